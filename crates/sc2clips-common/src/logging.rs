//! Structured logging infrastructure.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Configuration for the logging system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "sc2clips_gate=trace").
    pub level: String,
    /// Whether to emit JSON lines instead of human readable output.
    pub json: bool,
    /// Directory for daily rolling log files, in addition to stdout.
    pub directory: Option<PathBuf>,
    /// File name prefix for rolling log files.
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            directory: None,
            file_prefix: "sc2clips-bot.log".to_string(),
        }
    }
}

/// Errors raised while installing the global subscriber.
#[derive(thiserror::Error, Debug)]
pub enum LoggingError {
    /// The level filter could not be parsed.
    #[error("invalid log filter '{filter}': {source}")]
    Filter {
        /// Offending filter string.
        filter: String,
        /// Parser error.
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    /// A global subscriber was already installed.
    #[error("failed to install subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Initialize the tracing subscriber with the given configuration.
///
/// The returned guard flushes the file writer when dropped and must be kept
/// alive for the lifetime of the process when file output is enabled.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>, LoggingError> {
    let env_filter = EnvFilter::try_new(&config.level).map_err(|source| LoggingError::Filter {
        filter: config.level.clone(),
        source,
    })?;

    let stdout_layer = if config.json {
        fmt::layer().json().with_target(true).boxed()
    } else {
        fmt::layer().with_target(true).boxed()
    };

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, &config.file_prefix);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(writer);
            let layer = if config.json { layer.json().boxed() } else { layer.boxed() };
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(!config.json);
        assert!(config.directory.is_none());
        assert_eq!(config.file_prefix, "sc2clips-bot.log");
    }

    #[test]
    fn test_invalid_filter_is_reported() {
        let config = LoggingConfig {
            level: "sc2clips=notalevel".to_string(),
            ..LoggingConfig::default()
        };
        let err = init_logging(&config).unwrap_err();
        assert!(matches!(err, LoggingError::Filter { .. }));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: LoggingConfig = serde_json::from_str(r#"{"level":"debug"}"#).unwrap();
        assert_eq!(config.level, "debug");
        assert_eq!(config.file_prefix, "sc2clips-bot.log");
    }
}
