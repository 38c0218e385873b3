pub mod extract;
pub mod scrape;

pub use extract::{extract_meanings, extract_pronunciations};
pub use scrape::{CAMBRIDGE_ROUTES, CambridgeScraper};
