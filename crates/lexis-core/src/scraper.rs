use async_trait::async_trait;

use crate::error::ScrapeError;
use crate::model::DictionaryEntry;
use crate::source::SourceId;

/// One dictionary site, scraped end to end
#[async_trait]
pub trait Scraper: Send + Sync {
    /// Key this scraper registers itself under
    fn source(&self) -> SourceId;

    /// Turn caller input into the lookup key used in URLs
    fn clean_word(&self, word: &str) -> String {
        clean_word(word)
    }

    /// Scrape `word`.
    ///
    /// `Ok(None)` means the site has no entry for the word. Transport
    /// failures on the mandatory pronunciation page surface as
    /// [`ScrapeError::Fetch`].
    async fn scrape(&self, word: &str) -> Result<Option<DictionaryEntry>, ScrapeError>;
}

/// Keep ASCII letters only, lower-cased
pub fn clean_word(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_word_retains_just_letters() {
        let cases = [
            ("Abc", "abc"),
            ("Abc's word", "abcsword"),
            ("1love!", "love"),
            ("Amélie", "amlie"),
            ("", ""),
        ];

        for (given, expected) in cases {
            assert_eq!(clean_word(given), expected, "cleaning {given:?}");
        }
    }

    #[test]
    fn test_clean_word_is_idempotent() {
        for word in ["hello", "present", "Don't-Stop", "123 456"] {
            let once = clean_word(word);
            assert_eq!(clean_word(&once), once);
        }
    }

    #[test]
    fn test_clean_word_empties_non_letter_input() {
        assert!(clean_word("123 456").is_empty());
        assert!(clean_word("!?.,").is_empty());
    }
}
