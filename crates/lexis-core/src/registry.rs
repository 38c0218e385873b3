use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ScrapeError;
use crate::model::DictionaryWord;
use crate::scraper::Scraper;
use crate::source::SourceId;

/// Source-keyed set of scrapers
///
/// Registration needs `&mut self`, lookups only `&self`: build the registry
/// at startup, then share it behind an `Arc` for concurrent searches.
#[derive(Default)]
pub struct DictionaryScraper {
    scrapers: HashMap<SourceId, Arc<dyn Scraper>>,
    sources: Vec<SourceId>,
}

impl DictionaryScraper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `scraper` under `source`.
    ///
    /// Re-registering a known source swaps the scraper but keeps the
    /// source's position in [`sources`](Self::sources).
    pub fn register_source(
        &mut self,
        source: SourceId,
        scraper: Arc<dyn Scraper>,
    ) -> Result<(), ScrapeError> {
        if source.is_blank() {
            return Err(ScrapeError::InvalidArgument(
                "source can not be blank".to_string(),
            ));
        }

        if !self.scrapers.contains_key(&source) {
            self.sources.push(source.clone());
        }
        tracing::info!("Registered scraper for source {}", source);
        self.scrapers.insert(source, scraper);

        Ok(())
    }

    /// Register `scraper` under the source it reports for itself
    pub fn register(&mut self, scraper: Arc<dyn Scraper>) -> Result<(), ScrapeError> {
        let source = scraper.source();
        self.register_source(source, scraper)
    }

    /// Known sources in registration order
    pub fn sources(&self) -> &[SourceId] {
        &self.sources
    }

    pub fn get(&self, source: &SourceId) -> Option<Arc<dyn Scraper>> {
        self.scrapers.get(source).cloned()
    }

    /// Look `word` up in `source`.
    ///
    /// Fetch failures come back as `Ok(None)`, same as a word the site does
    /// not know. Every other error is returned unchanged.
    pub async fn search(
        &self,
        word: &str,
        source: &SourceId,
    ) -> Result<Option<DictionaryWord>, ScrapeError> {
        let scraper = self
            .get(source)
            .ok_or_else(|| ScrapeError::UnknownSource(source.clone()))?;

        match scraper.scrape(word).await {
            Ok(Some(entry)) => Ok(Some(DictionaryWord::new(source.clone(), word, entry))),
            Ok(None) => {
                tracing::debug!("No entry for `{}` in {}", word, source);
                Ok(None)
            }
            Err(e) if e.is_fetch_failure() => {
                tracing::warn!("Lookup of `{}` in {} failed: {}", word, source, e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
