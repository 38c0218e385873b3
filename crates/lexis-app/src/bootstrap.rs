use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use lexis_config::Config;
use lexis_core::{DictionaryScraper, Scraper};
use lexis_source_cambridge::CambridgeScraper;

/// Every source compiled into this binary, in listing order
pub fn default_scrapers(config: &Config) -> anyhow::Result<Vec<Arc<dyn Scraper>>> {
    let cambridge =
        CambridgeScraper::from_config(config).context("Failed to set up Cambridge scraper")?;

    Ok(vec![Arc::new(cambridge)])
}

/// Registry with all compiled-in sources registered
pub fn default_registry(config: &Config) -> anyhow::Result<DictionaryScraper> {
    let mut registry = DictionaryScraper::new();
    for scraper in default_scrapers(config)? {
        registry.register(scraper)?;
    }
    Ok(registry)
}

/// Load config from `path` if given, otherwise from the environment
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            Config::from_json(&json).context("Failed to parse config")
        }
        None => Ok(Config::new()),
    }
}
