// src/config.rs

//! Configuration loading utilities.
//!
//! The file is optional: a missing or unreadable file falls back to
//! defaults. Environment variables override individual settings afterwards.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::Config;

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "RECEIPT_PROCESSOR_CONFIG";
/// Environment variable overriding `server.bind_address`.
pub const BIND_ADDRESS_ENV: &str = "RECEIPT_PROCESSOR_BIND";
/// Environment variable overriding `logging.level`.
pub const LOG_LEVEL_ENV: &str = "RECEIPT_PROCESSOR_LOG";

pub const DEFAULT_CONFIG_PATH: &str = "data/config.toml";

/// Config file path from the environment, or the default.
pub fn config_path() -> PathBuf {
    std::env::var(CONFIG_PATH_ENV)
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Apply overrides looked up by environment variable name.
pub fn apply_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(bind) = non_empty(BIND_ADDRESS_ENV) {
        log::debug!("{} overrides server.bind_address", BIND_ADDRESS_ENV);
        config.server.bind_address = bind.trim().to_string();
    }
    if let Some(level) = non_empty(LOG_LEVEL_ENV) {
        log::debug!("{} overrides logging.level", LOG_LEVEL_ENV);
        config.logging.level = level.trim().to_string();
    }
}

/// Load configuration from a TOML file, apply environment overrides and
/// validate the result.
///
/// Falls back to defaults if the file cannot be loaded.
pub fn load_config(path: &Path) -> Result<Config> {
    let mut config = Config::load_or_default(path);
    apply_overrides(&mut config, |name| std::env::var(name).ok());
    config.validate()?;
    Ok(config)
}
