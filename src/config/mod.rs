//! Configuration module
//!
//! Handles loading and saving of gitdigest.toml configuration files.
//! Defines Config, Api, and Export types.

mod types;

pub use types::{Api, Config};

use crate::error::{DigestError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "gitdigest.toml";

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        DigestError::Config(format!(
            "Cannot read config from '{}': {}. Run 'gitdigest config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

/// Load an explicitly requested config, or the default file when present.
///
/// Without an explicit path and without `gitdigest.toml` in the working
/// directory, built-in defaults are used.
pub fn resolve(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => load(&path),
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                load(&default_path)
            } else {
                tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                Ok(Config::default())
            }
        }
    }
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| DigestError::Config(format!("Failed to serialize config: {}", e)))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}

fn validate(config: &Config) -> Result<()> {
    if config.api.page_size == 0 || config.api.page_size > 100 {
        return Err(DigestError::Config(format!(
            "api.page_size must be between 1 and 100, got {}",
            config.api.page_size
        )));
    }
    if config.api.max_pages == 0 {
        return Err(DigestError::Config(
            "api.max_pages must be at least 1".to_string(),
        ));
    }
    Ok(())
}
