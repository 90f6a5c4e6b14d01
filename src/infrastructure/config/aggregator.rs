//! Aggregator configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::application::aggregator::FetchMode;

/// How a collection drives its sources.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AggregatorConfig {
    pub mode: FetchMode,
    /// Per-source deadline in milliseconds. `0` disables it.
    pub source_timeout_ms: u64,
}

impl AggregatorConfig {
    #[must_use]
    pub fn source_timeout(&self) -> Option<Duration> {
        (self.source_timeout_ms > 0).then(|| Duration::from_millis(self.source_timeout_ms))
    }
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            mode: FetchMode::Concurrent,
            source_timeout_ms: 15_000,
        }
    }
}
