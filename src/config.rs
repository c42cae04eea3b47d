//! User configuration, read from `<config dir>/whv-onboard/config.toml`.
//!
//! Every key is optional; a missing file yields [`Config::default`].
//!
//! ```toml
//! log_filter = "info,whv_onboard=debug"
//! log_dir = "/tmp/whv-logs"
//! strict_validation = true
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Directory name used under the platform config and data directories.
pub const APP_DIR: &str = "whv-onboard";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The config file is not valid TOML or has unknown keys.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The platform does not provide a config directory.
    #[error("could not determine config directory")]
    NoConfigDir,

    /// The platform does not provide a data directory.
    #[error("could not determine data directory")]
    NoDataDir,
}

/// Runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Where log files go. Defaults to `<data dir>/whv-onboard`.
    pub log_dir: Option<PathBuf>,
    /// Block submission on malformed dates and phone numbers.
    pub strict_validation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            log_dir: None,
            strict_validation: false,
        }
    }
}

impl Config {
    /// Loads the config from the platform default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_path(&Self::default_path()?)
    }

    /// Returns `<config dir>/whv-onboard/config.toml`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join(APP_DIR).join("config.toml"))
    }

    /// Loads the config at `path`, falling back to defaults if it does not exist.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Parses a config from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Resolves the directory log files are written to.
    pub fn log_directory(&self) -> Result<PathBuf, ConfigError> {
        match &self.log_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::data_dir()
                .map(|d| d.join(APP_DIR))
                .ok_or(ConfigError::NoDataDir),
        }
    }
}
