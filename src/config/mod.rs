//! Persistent user preferences and the helpers that locate ledger data.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::services::TrendPeriod;
use crate::utils::atomic::write_atomic;

/// Environment variable overriding the data directory.
pub const HOME_ENV_VAR: &str = "SPENDWELL_HOME";
const DEFAULT_DIR_NAME: &str = "spendwell";
const FALLBACK_DIR_NAME: &str = ".spendwell";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),
}

/// Stores user-configurable preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default)]
    pub trend_period: TrendPeriod,
    /// Seed an empty install with the sample ledger instead of nothing.
    #[serde(default = "Config::default_use_sample_data")]
    pub use_sample_data: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for ledger data.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            trend_period: TrendPeriod::default(),
            use_sample_data: Self::default_use_sample_data(),
            data_dir: None,
        }
    }
}

impl Config {
    pub fn default_use_sample_data() -> bool {
        true
    }

    /// Directory holding the persisted collections: the configured
    /// `data_dir`, then `$SPENDWELL_HOME`, then the platform data directory,
    /// then `./.spendwell`.
    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(path) = &self.data_dir {
            return path.clone();
        }
        if let Some(custom) = env::var_os(HOME_ENV_VAR) {
            return PathBuf::from(custom);
        }
        dirs::data_dir()
            .map(|base| base.join(DEFAULT_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from(".").join(FALLBACK_DIR_NAME))
    }
}

/// Handles persistence for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base)?;
        Ok(Self::new(base.join(CONFIG_FILE)))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Reads the stored config, or the defaults when none has been saved.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        write_atomic(&self.config_path, &json)?;
        tracing::debug!(path = %self.config_path.display(), "config saved");
        Ok(())
    }
}
