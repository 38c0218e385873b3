use crate::source::SourceId;

/// Transport-level failure while reading a dictionary page
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Read timeout: {url}")]
    Timeout { url: String },

    /// Local read failure of a file-backed or mirror fetcher
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No scraper has been registered for this source: {0}")]
    UnknownSource(SourceId),

    #[error("`{0}` is not valid word")]
    InvalidWord(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Unrecognized region: `{0}`")]
    UnrecognizedRegion(String),
}

impl ScrapeError {
    /// Whether this error came from the transport rather than from misuse or markup
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, ScrapeError::Fetch(_))
    }
}
