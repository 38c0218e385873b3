use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a dictionary provider, used as the registry key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(Cow<'static, str>);

impl SourceId {
    pub const CAMBRIDGE: SourceId = SourceId(Cow::Borrowed("CAMBRIDGE"));

    pub fn new(value: impl Into<String>) -> Self {
        Self(Cow::Owned(value.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SourceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Which page a fetch is for; each source maps it to its own URL path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadingPurpose {
    Pronunciation,
    Meaning,
}

impl ReadingPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingPurpose::Pronunciation => "pronunciation",
            ReadingPurpose::Meaning => "meaning",
        }
    }
}

impl fmt::Display for ReadingPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
