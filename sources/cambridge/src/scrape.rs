use std::sync::Arc;

use async_trait::async_trait;
use lexis_config::Config;
use lexis_core::{
    DictionaryEntry, Fetcher, ReadingPurpose, ScrapeError, Scraper, SourceId, validate_fetcher,
};
use lexis_fetch::{HttpFetcher, Routes};

use crate::extract::{extract_meanings, extract_pronunciations};

pub const CAMBRIDGE_ROUTES: Routes = Routes {
    pronunciation: "pronunciation/english",
    meaning: "dictionary/english",
};

/// Cambridge Dictionary scraper
pub struct CambridgeScraper {
    fetcher: Arc<dyn Fetcher>,
}

impl CambridgeScraper {
    /// Scraper reading through `fetcher`
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Result<Self, ScrapeError> {
        validate_fetcher(fetcher.as_ref())?;
        Ok(Self { fetcher })
    }

    /// Scraper reading the configured site over HTTP
    pub fn from_config(config: &Config) -> Result<Self, ScrapeError> {
        let fetcher = HttpFetcher::new(
            config.cambridge.base_url.as_str(),
            CAMBRIDGE_ROUTES,
            &config.network,
        )?;
        Self::new(Arc::new(fetcher))
    }

    /// Swap the fetcher, e.g. to read from a mirror
    pub fn set_fetcher(&mut self, fetcher: Arc<dyn Fetcher>) -> Result<(), ScrapeError> {
        validate_fetcher(fetcher.as_ref())?;
        self.fetcher = fetcher;
        Ok(())
    }

    pub fn fetcher(&self) -> &Arc<dyn Fetcher> {
        &self.fetcher
    }
}

#[async_trait]
impl Scraper for CambridgeScraper {
    fn source(&self) -> SourceId {
        SourceId::CAMBRIDGE
    }

    async fn scrape(&self, word: &str) -> Result<Option<DictionaryEntry>, ScrapeError> {
        let cleaned_word = self.clean_word(word);
        if cleaned_word.is_empty() {
            return Err(ScrapeError::InvalidWord(word.to_string()));
        }

        let response = self
            .fetcher
            .fetch(&cleaned_word, ReadingPurpose::Pronunciation)
            .await?;

        let pronunciations = extract_pronunciations(&response.body, self.fetcher.base_url())?;
        if pronunciations.is_empty() {
            tracing::debug!("No pronunciation found for `{}`", cleaned_word);
            return Ok(None);
        }

        let mut source_links = vec![response.url];

        // Pronunciation is the priority; a page without meanings is still a result
        let meanings = match self
            .fetcher
            .fetch(&cleaned_word, ReadingPurpose::Meaning)
            .await
        {
            Ok(response) => {
                source_links.push(response.url);
                extract_meanings(&response.body)?
            }
            Err(e) => {
                tracing::warn!("Skipping meanings of `{}`: {}", cleaned_word, e);
                Vec::new()
            }
        };

        Ok(Some(DictionaryEntry {
            source_links,
            pronunciations,
            meanings,
        }))
    }
}
