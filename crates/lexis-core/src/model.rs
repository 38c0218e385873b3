use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScrapeError;
use crate::source::SourceId;

/// Geographic pronunciation variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "UK")]
    Uk,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Us => "US",
            Region::Uk => "UK",
        }
    }
}

impl FromStr for Region {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "US" => Ok(Region::Us),
            "UK" => Ok(Region::Uk),
            _ => Err(ScrapeError::UnrecognizedRegion(s.to_string())),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One phonetic transcription for one part of speech
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpaEntry {
    /// Part-of-speech label, empty when the page has none
    pub category: String,
    pub ipa: String,
    /// Absolute URL of the recording
    pub audio_url: String,
}

/// Region -> entries in document order. Only regions actually found are present.
pub type PronunciationListing = BTreeMap<Region, Vec<IpaEntry>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeaningEntry {
    pub meaning: String,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMeaning {
    /// One or more part-of-speech labels, comma-joined
    pub categories: String,
    pub entries: Vec<MeaningEntry>,
}

/// Everything one scrape produced for a word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    /// Pronunciation link first, meaning link second when that fetch succeeded
    pub source_links: Vec<String>,
    pub pronunciations: PronunciationListing,
    pub meanings: Vec<WordMeaning>,
}

/// Result handed back to callers of the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryWord {
    pub source: SourceId,
    /// The word exactly as the caller passed it, before cleaning
    pub search_word: String,
    pub entry: DictionaryEntry,
}

impl DictionaryWord {
    pub fn new(source: SourceId, search_word: impl Into<String>, entry: DictionaryEntry) -> Self {
        Self {
            source,
            search_word: search_word.into(),
            entry,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
