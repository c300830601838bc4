use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::session::LoginOptions;

pub const DEFAULT_IDENTITY_PROVIDER: &str = "http://bkyz2-fmaaa-aaaaa-qaaaq-cai.localhost:4943/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Runtime settings. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Capacity of the store actor's mailbox.
    pub buffer_size: usize,
    /// Login page of the identity provider.
    pub identity_provider: String,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            identity_provider: DEFAULT_IDENTITY_PROVIDER.to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: CatalogConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn login_options(&self) -> LoginOptions {
        LoginOptions {
            identity_provider: self.identity_provider.clone(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_size == 0 {
            return Err(ConfigError::Invalid("buffer_size must be at least 1".to_string()));
        }
        if self.identity_provider.is_empty() {
            return Err(ConfigError::Invalid("identity_provider must not be empty".to_string()));
        }
        Ok(())
    }
}
