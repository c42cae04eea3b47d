//! Log output setup.
//!
//! The terminal belongs to the TUI, so events go to a daily-rolled file in
//! the configured log directory. `RUST_LOG` overrides the configured filter.

use std::fs;
use std::io;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use crate::config::{Config, ConfigError};

/// File name prefix; the appender adds a date suffix.
pub const LOG_FILE_PREFIX: &str = "whv-onboard.log";

/// Errors that can occur while setting up logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log directory could not be created.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The log directory could not be resolved.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The filter directive is malformed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),

    /// A global subscriber is already installed.
    #[error("could not install subscriber: {0}")]
    Init(String),
}

/// Installs the global subscriber. Keep the returned guard alive until exit
/// so buffered events are flushed.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init_logging(config: &Config) -> Result<WorkerGuard, LoggingError> {
    let dir = config.log_directory()?;
    fs::create_dir_all(&dir)?;

    let filter = resolve_filter(std::env::var("RUST_LOG").ok(), &config.log_filter)?;
    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    Ok(guard)
}

/// Picks the filter directive: a non-blank `RUST_LOG` value, else the configured one.
fn resolve_filter(env: Option<String>, configured: &str) -> Result<EnvFilter, LoggingError> {
    let directive = env
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| configured.to_string());
    Ok(EnvFilter::try_new(directive)?)
}
