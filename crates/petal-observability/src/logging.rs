//! Structured logging setup.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Log level for the subscriber filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Filter directive understood by `EnvFilter`.
    pub fn as_directive(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format (for development).
    #[default]
    Human,
    /// JSON format (for log aggregation).
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level when `RUST_LOG` is unset.
    pub level: LogLevel,
    /// Output format.
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Filter directive, preferring a non-empty `env_override`.
    pub fn directive(&self, env_override: Option<&str>) -> String {
        match env_override.map(str::trim) {
            Some(env) if !env.is_empty() => env.to_string(),
            _ => self.level.as_directive().to_string(),
        }
    }
}

/// Errors from logging setup.
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid log filter '{directive}': {reason}")]
    InvalidFilter { directive: String, reason: String },

    #[error("Global logger already initialized")]
    AlreadyInitialized,
}

/// Install the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` overrides the configured level.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let env = std::env::var("RUST_LOG").ok();
    let directive = config.directive(env.as_deref());

    let filter = EnvFilter::try_new(&directive).map_err(|e| LoggingError::InvalidFilter {
        directive: directive.clone(),
        reason: e.to_string(),
    })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = match config.format {
        LogFormat::Human => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|_| LoggingError::AlreadyInitialized)?;

    announce(config, &directive);
    Ok(())
}

fn announce(config: &LoggingConfig, directive: &str) {
    tracing::debug!(directive, format = ?config.format, "logging initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.format, LogFormat::Human);
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert_eq!(LogLevel::Warn.to_string(), "WARN");
    }

    #[test]
    fn test_directive_prefers_env() {
        let config = LoggingConfig::default().with_level(LogLevel::Debug);

        assert_eq!(config.directive(None), "debug");
        assert_eq!(config.directive(Some("  ")), "debug");
        assert_eq!(config.directive(Some("petal_render=trace")), "petal_render=trace");
    }

    #[test]
    fn test_parse_from_toml() {
        let config: LoggingConfig = toml::from_str(
            r#"
level = "warn"
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(
            config,
            LoggingConfig::default()
                .with_level(LogLevel::Warn)
                .with_format(LogFormat::Json)
        );
    }

    #[test]
    fn test_announce_emits_event() {
        use std::io;
        use std::sync::{Arc, Mutex};

        struct Capture(Arc<Mutex<Vec<u8>>>);

        impl io::Write for Capture {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let buf = Arc::new(Mutex::new(Vec::new()));
        let sink = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || Capture(sink.clone()))
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();

        let config = LoggingConfig::default().with_format(LogFormat::Json);
        tracing::subscriber::with_default(subscriber, || announce(&config, "debug"));

        let out = String::from_utf8(buf.lock().unwrap().clone()).unwrap();
        assert!(out.contains("logging initialized"));
        assert!(out.contains("directive=\"debug\""));
        assert!(out.contains("format=Json"));
    }

    #[test]
    fn test_init_twice_fails() {
        let config = LoggingConfig::default().with_level(LogLevel::Error);
        // The first call may lose to another test in the same process.
        let _ = init_logging(&config);
        assert!(matches!(
            init_logging(&config),
            Err(LoggingError::AlreadyInitialized)
        ));
    }
}
