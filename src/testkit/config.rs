//! Canonical test configurations.
//!
//! Single source of truth for config structs used across tests.

use crate::application::aggregator::FetchMode;
use crate::infrastructure::config::aggregator::AggregatorConfig;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::config::sources::SourcesConfig;

/// Defaults, except that only `names` run.
pub fn only(names: &[&str]) -> Config {
    Config {
        sources: SourcesConfig {
            include: names.iter().map(ToString::to_string).collect(),
            exclude: Vec::new(),
        },
        ..Config::default()
    }
}

/// Sequential aggregator with a short per-source deadline.
pub fn sequential(source_timeout_ms: u64) -> AggregatorConfig {
    AggregatorConfig {
        mode: FetchMode::Sequential,
        source_timeout_ms,
    }
}

/// A complete, valid TOML file exercising every section.
pub const FULL_TOML: &str = r#"
[logging]
level = "warn"
format = "json"

[http]
timeout_ms = 3000
connect_timeout_ms = 1000
user_agent = "dashrates-test"

[aggregator]
mode = "sequential"
source_timeout_ms = 500

[sources]
include = ["Kraken", "Coinbase Pro", "Poloniex"]
exclude = ["Poloniex"]
"#;
