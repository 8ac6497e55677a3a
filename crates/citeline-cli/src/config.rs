//! Configuration loading from TOML files

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Global configuration for citeline
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Corpus root, one subdirectory per entity kind
    pub data_dir: PathBuf,
    /// Database directory; outputs land in `<db_dir>/import`
    pub db_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            db_dir: PathBuf::from("db"),
        }
    }
}

impl Config {
    /// Load configuration from default locations
    ///
    /// Search order:
    /// 1. ./citeline.toml (current directory)
    /// 2. ~/.config/citeline/config.toml
    ///
    /// If no config file found, returns default config.
    pub fn load() -> Result<Self> {
        // Try current directory first
        let local_config = PathBuf::from("citeline.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        // Try user config directory
        if let Some(config_dir) = directories::ProjectDirs::from("", "", "citeline") {
            let user_config = config_dir.config_dir().join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        // Return defaults if no config found
        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
