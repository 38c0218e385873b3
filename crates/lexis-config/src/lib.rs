use serde::{Deserialize, Serialize};

use self::cambridge::CambridgeConfig;
use self::network::NetworkConfig;

pub mod cambridge;
pub mod network;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub cambridge: CambridgeConfig,
}

impl Config {
    /// Defaults overridden by environment variables
    pub fn new() -> Self {
        Config {
            network: NetworkConfig::new(),
            cambridge: CambridgeConfig::new(),
        }
    }

    /// Parse a JSON config file's contents; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
