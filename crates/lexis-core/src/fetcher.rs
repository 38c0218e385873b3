use async_trait::async_trait;

use crate::error::{FetchError, ScrapeError};
use crate::source::ReadingPurpose;

/// Raw page text and the URL it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub url: String,
    pub body: String,
}

/// Reads one dictionary page for an already cleaned word
///
/// Implementations own every network concern: timeouts, headers, redirects
/// and body decompression. A failure is final; callers never retry.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Location every page and media link of the source hangs off
    fn base_url(&self) -> &str;

    /// Fetch the page serving `purpose` for `word`
    async fn fetch(
        &self,
        word: &str,
        purpose: ReadingPurpose,
    ) -> Result<FetchResponse, FetchError>;
}

/// Reject fetchers whose base location is unset or whitespace
pub fn validate_fetcher(fetcher: &dyn Fetcher) -> Result<(), ScrapeError> {
    if fetcher.base_url().trim().is_empty() {
        return Err(ScrapeError::InvalidConfig(
            "fetcher base url can not be blank".to_string(),
        ));
    }
    Ok(())
}
