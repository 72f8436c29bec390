//! Runtime configuration for the line editor server.

use std::net::SocketAddr;

/// Environment variable holding the listen address.
pub const ADDR_ENV: &str = "LINE_EDITOR_ADDR";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "RUST_LOG";

/// Error returned when the environment holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid LINE_EDITOR_ADDR {value:?}: expected host:port")]
    InvalidAddr { value: String },
}

/// Configuration parameters for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Tracing filter directive (e.g. "info" or "line_editor=debug").
    pub log_filter: String,
}

impl ServerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(bind_addr: SocketAddr, log_filter: impl Into<String>) -> Self {
        Self {
            bind_addr,
            log_filter: log_filter.into(),
        }
    }

    /// Read the configuration from the environment, falling back to defaults
    /// for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let bind_addr = match lookup(ADDR_ENV).filter(|v| !v.trim().is_empty()) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidAddr { value })?,
            None => defaults.bind_addr,
        };

        let log_filter = lookup(LOG_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        Ok(Self {
            bind_addr,
            log_filter,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            log_filter: "info".to_string(),
        }
    }
}
