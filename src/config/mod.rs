// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{Result, UtilsError};
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};

impl UtilsConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest)
    /// 2. Config file
    /// 3. Defaults (lowest)
    pub fn load() -> Result<Self> {
        Self::build(&Self::default_config_path(), false)
    }

    /// Load configuration from an explicit file, which must exist.
    /// Environment variables still override it.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::build(&path.as_ref().to_string_lossy(), true)
    }

    fn build(path: &str, required: bool) -> Result<Self> {
        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::with_name(path).required(required))
            // Override with environment variables, e.g. QUAS_UTILS_RETRY__DELAY_MS
            .add_source(
                Environment::with_prefix("QUAS_UTILS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| UtilsError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| UtilsError::Config(e.to_string()))
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| UtilsError::Config(e.to_string()))
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".quas-utils")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}
