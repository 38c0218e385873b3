use std::env;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://dictionary.cambridge.org".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CambridgeConfig {
    /// Point this at a mirror to scrape somewhere other than the live site
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl CambridgeConfig {
    pub fn new() -> Self {
        let base_url = env::var("CAMBRIDGE_BASE_URL").unwrap_or_else(|_| default_base_url());

        Self { base_url }
    }
}

impl Default for CambridgeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}
