use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

use super::currency::Currency;
use super::error::ConfigError;

/// Settings for the CNB exchange rate API.
///
/// No value has a default; all three must be present and non-blank.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CnbApiConfig {
    pub base_url: String,
    pub exchange_rate_endpoint: String,
    pub default_currency: String,
}

impl CnbApiConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("cnb_api.base_url", &self.base_url),
            ("cnb_api.exchange_rate_endpoint", &self.exchange_rate_endpoint),
            ("cnb_api.default_currency", &self.default_currency),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Missing(name));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub cnb_api: CnbApiConfig,
    /// Default filter for the `rates` command
    #[serde(default)]
    pub currencies: Vec<Currency>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("cz", "cnbrates", "cnbrates")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        config
            .cnb_api
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}
