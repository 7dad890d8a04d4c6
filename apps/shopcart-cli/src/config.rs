//! # Configuration
//!
//! Session settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SHOPCART_*`)
//! 2. Defaults (this file)
//!
//! The defaults reproduce the stock behaviour, so running with no
//! environment at all is the normal case.

use serde::{Deserialize, Serialize};
use shopcart_core::DEFAULT_SENTINEL;
use tracing_subscriber::EnvFilter;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliConfig {
    /// Word that ends item entry (case-insensitive).
    pub sentinel: String,

    /// Print the welcome line before the first prompt.
    pub show_banner: bool,

    /// Tracing filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            sentinel: DEFAULT_SENTINEL.to_string(),
            show_banner: true,
            log_filter: "warn".to_string(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from environment variables.
    ///
    /// ## Environment Variables
    /// - `SHOPCART_SENTINEL`: end-of-entry word (non-empty)
    /// - `SHOPCART_SHOW_BANNER`: `true` or `false`
    /// - `SHOPCART_LOG`: default tracing filter, e.g. `info`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CliConfig::default();

        if let Some(sentinel) = lookup("SHOPCART_SENTINEL") {
            let sentinel = sentinel.trim();
            if sentinel.is_empty() {
                return Err(ConfigError::InvalidValue("SHOPCART_SENTINEL".to_string()));
            }
            config.sentinel = sentinel.to_string();
        }

        if let Some(banner) = lookup("SHOPCART_SHOW_BANNER") {
            config.show_banner = banner
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SHOPCART_SHOW_BANNER".to_string()))?;
        }

        if let Some(filter) = lookup("SHOPCART_LOG") {
            EnvFilter::try_new(&filter)
                .map_err(|_| ConfigError::InvalidValue("SHOPCART_LOG".to_string()))?;
            config.log_filter = filter;
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
