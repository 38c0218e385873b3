pub mod error;
pub mod fetcher;
pub mod model;
pub mod registry;
pub mod scraper;
pub mod source;

pub use error::{FetchError, ScrapeError};
pub use fetcher::{FetchResponse, Fetcher, validate_fetcher};
pub use model::{
    DictionaryEntry, DictionaryWord, IpaEntry, MeaningEntry, PronunciationListing, Region,
    WordMeaning,
};
pub use registry::DictionaryScraper;
pub use scraper::{Scraper, clean_word};
pub use source::{ReadingPurpose, SourceId};
