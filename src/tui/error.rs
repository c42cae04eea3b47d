use crate::config::ConfigError;
use crate::logging::LoggingError;

/// Errors that can occur in the TUI layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file could not be located or parsed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Log output could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts_and_displays() {
        let err: AppError = std::io::Error::other("terminal gone").into();
        assert!(matches!(err, AppError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: terminal gone");
    }

    #[test]
    fn config_error_converts_and_displays() {
        let err: AppError = ConfigError::NoConfigDir.into();
        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Config error: could not determine config directory"
        );
    }

    #[test]
    fn logging_error_wraps_config_error() {
        let err: AppError = LoggingError::from(ConfigError::NoDataDir).into();
        assert_eq!(
            err.to_string(),
            "Logging error: Config error: could not determine data directory"
        );
    }
}
