use std::env;

use serde::{Deserialize, Serialize};

fn default_timeout_seconds() -> u64 {
    60
}

fn default_connect_timeout_seconds() -> u64 {
    60
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:131.0) Gecko/20100101 Firefox/131.0"
        .to_string()
}

fn default_accept_language() -> String {
    "en-US,en;q=0.5".to_string()
}

/// HTTP client settings shared by every source
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_connect_timeout_seconds")]
    pub connect_timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_accept_language")]
    pub accept_language: String,
}

impl NetworkConfig {
    pub fn new() -> Self {
        let timeout_seconds = env::var("LEXIS_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        let connect_timeout_seconds = env::var("LEXIS_CONNECT_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_connect_timeout_seconds);

        let user_agent = env::var("LEXIS_USER_AGENT").unwrap_or_else(|_| default_user_agent());

        Self {
            timeout_seconds,
            connect_timeout_seconds,
            user_agent,
            accept_language: default_accept_language(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            connect_timeout_seconds: default_connect_timeout_seconds(),
            user_agent: default_user_agent(),
            accept_language: default_accept_language(),
        }
    }
}
