//! Structured logging setup for applications embedding revchart.
//!
//! The rendering crates only emit `tracing` events; nothing is printed until
//! the embedding application installs a subscriber, for example with
//! [`init_logging`].

use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, human friendly output.
    Pretty,
    /// Single-line output.
    Compact,
    /// Newline-delimited JSON.
    Json,
}

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "revchart_graphs=debug")
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Optional file path for log output
    pub file_path: Option<String>,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
            file_path: None,
            include_targets: true,
        }
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// `RUST_LOG` takes precedence over `config.level` when set.
pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    let file = match &config.file_path {
        Some(path) => Some(Mutex::new(
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?,
        )),
        None => None,
    };

    let layer = fmt::layer().with_target(config.include_targets);

    match (config.format, file) {
        (LogFormat::Json, Some(file)) => registry.with(layer.json().with_writer(file)).try_init()?,
        (LogFormat::Json, None) => registry.with(layer.json()).try_init()?,
        (LogFormat::Pretty, Some(file)) => registry
            .with(layer.pretty().with_ansi(false).with_writer(file))
            .try_init()?,
        (LogFormat::Pretty, None) => registry.with(layer.pretty()).try_init()?,
        (LogFormat::Compact, Some(file)) => registry
            .with(layer.compact().with_ansi(false).with_writer(file))
            .try_init()?,
        (LogFormat::Compact, None) => registry.with(layer.compact()).try_init()?,
    }

    Ok(())
}

/// Initialize logging with default configuration
pub fn init_default_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging(LoggingConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Compact);
        assert!(config.file_path.is_none());
        assert!(config.include_targets);
    }

    #[test]
    fn test_init_logging_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("revchart.log");

        let result = init_logging(LoggingConfig {
            level: "debug".to_string(),
            format: LogFormat::Json,
            file_path: Some(path.display().to_string()),
            include_targets: false,
        });

        // another test may already own the global subscriber
        match result {
            Ok(()) => {}
            Err(err) => assert!(
                err.downcast_ref::<tracing_subscriber::util::TryInitError>().is_some(),
                "unexpected logging error: {err}"
            ),
        }
        assert!(path.exists());
    }

    #[test]
    fn test_init_logging_reports_unopenable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("revchart.log");

        let err = init_logging(LoggingConfig {
            file_path: Some(path.display().to_string()),
            ..LoggingConfig::default()
        })
        .unwrap_err();

        assert!(err.downcast_ref::<std::io::Error>().is_some());
        assert!(!path.exists());
    }
}
