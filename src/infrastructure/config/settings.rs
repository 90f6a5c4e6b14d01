//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; every section is optional. Two
//! environment variables take part:
//!
//! - `DASHRATES_CONFIG` replaces the default file path (`dashrates.toml`).
//! - `DASHRATES_LOG` replaces `logging.level`.
//!
//! # Example
//!
//! ```no_run
//! use dashrates::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("dashrates.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::aggregator::AggregatorConfig;
use super::logging::{LoggingConfig, LOG_FORMATS};
use super::sources::SourcesConfig;
use crate::adapter::outbound::http::settings::HttpConfig;
use crate::adapter::outbound::venue::catalog::{catalog, find};
use crate::error::{ConfigError, Result};

/// File read when no path is given and `DASHRATES_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "dashrates.toml";

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "DASHRATES_CONFIG";

/// Environment variable overriding `logging.level`.
pub const LOG_LEVEL_ENV: &str = "DASHRATES_LOG";

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Timeouts and user agent of the shared HTTP client.
    #[serde(default)]
    pub http: HttpConfig,

    /// Fetch mode and per-source deadline.
    #[serde(default)]
    pub aggregator: AggregatorConfig,

    /// Which venues run.
    #[serde(default)]
    pub sources: SourcesConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Applies the `DASHRATES_LOG` override before validating.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_log_override(std::env::var(LOG_LEVEL_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from `path` if given, otherwise from [`Config::default_path`].
    ///
    /// A missing default file is not an error: defaults apply. A missing
    /// explicit path is.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let path = Self::default_path();
        if path.exists() {
            Self::load(path)
        } else {
            Self::parse_toml("")
        }
    }

    /// `DASHRATES_CONFIG` if set, else `dashrates.toml`.
    #[must_use]
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_ENV)
            .filter(|value| !value.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
    }

    fn apply_log_override(&mut self, level: Option<String>) {
        if let Some(level) = level.filter(|l| !l.trim().is_empty()) {
            self.logging.level = level;
        }
    }

    /// Validate configuration values.
    ///
    /// Checks that values are within acceptable ranges and that every source
    /// name refers to a catalog venue.
    pub fn validate(&self) -> Result<()> {
        if !self.logging.format_is_known() {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!(
                    "unknown format {:?} (expected one of {})",
                    self.logging.format,
                    LOG_FORMATS.join(", ")
                ),
            }
            .into());
        }
        if !self.logging.level_is_valid() {
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                reason: format!("{:?} is not a valid filter directive", self.logging.level),
            }
            .into());
        }

        if self.http.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "http.timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.http.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "http.connect_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.http.user_agent.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "http.user_agent",
            }
            .into());
        }

        for name in &self.sources.include {
            if find(name).is_none() {
                return Err(ConfigError::UnknownSource {
                    field: "sources.include",
                    name: name.clone(),
                }
                .into());
            }
        }
        for name in &self.sources.exclude {
            if find(name).is_none() {
                return Err(ConfigError::UnknownSource {
                    field: "sources.exclude",
                    name: name.clone(),
                }
                .into());
            }
        }
        if !catalog().iter().any(|spec| self.sources.enables(spec)) {
            return Err(ConfigError::InvalidValue {
                field: "sources",
                reason: "every source is excluded".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
