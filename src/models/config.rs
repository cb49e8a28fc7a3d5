//! Application configuration structures.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Receipt store settings
    #[serde(default)]
    pub store: StoreConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        self.server.socket_addr()?;
        if !defaults::LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(AppError::config(format!(
                "logging.level must be one of {:?}, got '{}'",
                defaults::LOG_LEVELS,
                self.logging.level
            )));
        }
        if self.server.shutdown_grace_secs == 0 {
            return Err(AppError::config(
                "server.shutdown_grace_secs must be > 0",
            ));
        }
        Ok(())
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    #[serde(default = "defaults::bind_address")]
    pub bind_address: String,

    /// Seconds to wait for in-flight requests on shutdown
    #[serde(default = "defaults::shutdown_grace")]
    pub shutdown_grace_secs: u64,
}

impl ServerConfig {
    /// Parse the configured bind address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address.parse().map_err(|e| {
            AppError::config(format!(
                "server.bind_address '{}' is not a socket address: {e}",
                self.bind_address
            ))
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: defaults::bind_address(),
            shutdown_grace_secs: defaults::shutdown_grace(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level filter (`error`, `warn`, `info`, `debug`, `trace`)
    #[serde(default = "defaults::log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output (server only)
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
            json: false,
        }
    }
}

/// Receipt store settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    /// Maximum number of receipts kept in memory; 0 means unlimited
    #[serde(default)]
    pub max_receipts: usize,
}

impl StoreConfig {
    pub fn capacity(&self) -> Option<usize> {
        (self.max_receipts > 0).then_some(self.max_receipts)
    }
}

mod defaults {
    pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

    pub fn bind_address() -> String {
        "0.0.0.0:8080".into()
    }
    pub fn shutdown_grace() -> u64 {
        10
    }
    pub fn log_level() -> String {
        "info".into()
    }
}
