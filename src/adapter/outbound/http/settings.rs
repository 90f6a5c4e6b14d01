//! HTTP client configuration.

use serde::Deserialize;

/// Settings for the shared `reqwest` client used by every venue adapter.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

const fn default_timeout_ms() -> u64 {
    10_000
}

const fn default_connect_timeout_ms() -> u64 {
    5_000
}

fn default_user_agent() -> String {
    concat!("dashrates/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_empty_table() {
        let config: HttpConfig = toml::from_str("").unwrap();
        assert_eq!(config.timeout_ms, 10_000);
        assert_eq!(config.connect_timeout_ms, 5_000);
        assert!(config.user_agent.starts_with("dashrates/"));
    }

    #[test]
    fn partial_table_keeps_other_defaults() {
        let config: HttpConfig = toml::from_str("timeout_ms = 250").unwrap();
        assert_eq!(config.timeout_ms, 250);
        assert_eq!(config.connect_timeout_ms, 5_000);
    }
}
