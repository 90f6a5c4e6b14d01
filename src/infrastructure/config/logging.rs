//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Output formats understood by [`LoggingConfig::init`].
pub const LOG_FORMATS: &[&str] = &["pretty", "json"];

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `dashrates=debug,reqwest=warn`.
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` wins over the configured level. Events go to stderr so
    /// command output on stdout stays parseable.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }

    /// Whether `level` parses as a filter directive.
    #[must_use]
    pub fn level_is_valid(&self) -> bool {
        EnvFilter::try_new(&self.level).is_ok()
    }

    #[must_use]
    pub fn format_is_known(&self) -> bool {
        LOG_FORMATS.contains(&self.format.as_str())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_info_and_pretty() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(config.format_is_known());
        assert!(config.level_is_valid());
    }

    #[test]
    fn partial_table_keeps_default_format() {
        let config: LoggingConfig = toml::from_str("level = \"debug\"").unwrap();
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, "pretty");
    }

    #[test]
    fn unknown_format_is_flagged() {
        let config = LoggingConfig {
            format: "xml".into(),
            ..LoggingConfig::default()
        };
        assert!(!config.format_is_known());
    }

    #[test]
    fn garbage_level_is_flagged() {
        let config = LoggingConfig {
            level: "dashrates=loud".into(),
            ..LoggingConfig::default()
        };
        assert!(!config.level_is_valid());
    }
}
