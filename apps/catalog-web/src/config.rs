//! Server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::net::SocketAddr;

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebConfig {
    /// IP address to bind (default: 0.0.0.0)
    pub host: String,

    /// HTTP port (default: 8080)
    pub port: u16,

    /// Create the seed items at startup (default: true)
    pub seed_data: bool,
}

impl Default for WebConfig {
    fn default() -> Self {
        WebConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            seed_data: true,
        }
    }
}

impl WebConfig {
    /// Load configuration from environment variables.
    ///
    /// ## Environment Variables
    /// - `CATALOG_HOST`: bind IP address
    /// - `CATALOG_PORT`: HTTP port
    /// - `CATALOG_SEED_DATA`: `true` / `false`
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = WebConfig::default();

        let host = lookup("CATALOG_HOST").unwrap_or(defaults.host);
        if host.trim().is_empty() {
            return Err(ConfigError::InvalidValue("CATALOG_HOST".to_string()));
        }

        let port = match lookup("CATALOG_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CATALOG_PORT".to_string()))?,
            None => defaults.port,
        };

        let seed_data = match lookup("CATALOG_SEED_DATA") {
            Some(raw) => raw
                .trim()
                .to_ascii_lowercase()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CATALOG_SEED_DATA".to_string()))?,
            None => defaults.seed_data,
        };

        Ok(WebConfig {
            host,
            port,
            seed_data,
        })
    }

    /// Socket address the server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue("CATALOG_HOST".to_string()))
    }
}

/// Configuration error types.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
