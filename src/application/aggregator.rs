//! Fan-out over configured rate sources.
//!
//! Every source is invoked once per [`RateAggregator::collect`]. Failures stay
//! with the source that produced them: one venue timing out, returning junk or
//! panicking never affects the others, and the report always holds exactly one
//! outcome per source in configuration order.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures_util::FutureExt;
use tokio::task::{AbortHandle, JoinHandle};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::rate::CanonicalRate;
use crate::error::FetchError;
use crate::port::outbound::rate::RateSource;

/// How sources are driven during a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    /// One source at a time, in configuration order.
    Sequential,
    /// One task per source, all in flight at once.
    #[default]
    Concurrent,
}

impl std::fmt::Display for FetchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::Concurrent => write!(f, "concurrent"),
        }
    }
}

/// Result of invoking one source.
#[derive(Debug)]
pub struct SourceOutcome {
    pub source: &'static str,
    pub result: Result<CanonicalRate, FetchError>,
}

impl SourceOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    #[must_use]
    pub fn rate(&self) -> Option<&CanonicalRate> {
        self.result.as_ref().ok()
    }

    #[must_use]
    pub fn error(&self) -> Option<&FetchError> {
        self.result.as_ref().err()
    }
}

/// Outcomes of one collection, in configuration order.
#[derive(Debug, Default)]
pub struct AggregateReport {
    outcomes: Vec<SourceOutcome>,
}

impl AggregateReport {
    #[must_use]
    pub fn outcomes(&self) -> &[SourceOutcome] {
        &self.outcomes
    }

    /// Successful sources with their rates.
    pub fn successes(&self) -> impl Iterator<Item = (&'static str, &CanonicalRate)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.rate().map(|rate| (o.source, rate)))
    }

    /// Failed sources with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&'static str, &FetchError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.error().map(|err| (o.source, err)))
    }

    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    #[must_use]
    pub fn into_outcomes(self) -> Vec<SourceOutcome> {
        self.outcomes
    }
}

/// Invokes every configured [`RateSource`] and collects one outcome each.
pub struct RateAggregator {
    sources: Vec<Arc<dyn RateSource>>,
    mode: FetchMode,
    source_timeout: Option<Duration>,
}

impl RateAggregator {
    /// Concurrent, without a per-source timeout.
    #[must_use]
    pub fn new(sources: Vec<Arc<dyn RateSource>>) -> Self {
        Self {
            sources,
            mode: FetchMode::default(),
            source_timeout: None,
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: FetchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Bound each source's `fetch_rate`; `None` waits indefinitely.
    #[must_use]
    pub fn with_source_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.source_timeout = timeout;
        self
    }

    #[must_use]
    pub const fn mode(&self) -> FetchMode {
        self.mode
    }

    #[must_use]
    pub const fn source_timeout(&self) -> Option<Duration> {
        self.source_timeout
    }

    /// Display names of the configured sources, in order.
    #[must_use]
    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.display_name()).collect()
    }

    /// Invoke every source once.
    ///
    /// Never fails as a whole; each source's error is kept in its outcome.
    pub async fn collect(&self) -> AggregateReport {
        debug!(
            sources = self.sources.len(),
            mode = %self.mode,
            timeout_ms = self.source_timeout.map(|t| t.as_millis() as u64),
            "Collecting rates"
        );

        let results = match self.mode {
            FetchMode::Sequential => self.collect_sequential().await,
            FetchMode::Concurrent => self.collect_concurrent().await,
        };

        let outcomes: Vec<SourceOutcome> = self
            .sources
            .iter()
            .zip(results)
            .map(|(source, result)| {
                let outcome = SourceOutcome {
                    source: source.display_name(),
                    result,
                };
                log_outcome(&outcome);
                outcome
            })
            .collect();

        let report = AggregateReport { outcomes };
        info!(
            succeeded = report.succeeded(),
            failed = report.failed(),
            "Collection finished"
        );
        report
    }

    async fn collect_sequential(&self) -> Vec<Result<CanonicalRate, FetchError>> {
        let mut results = Vec::with_capacity(self.sources.len());
        for source in &self.sources {
            let name = source.display_name();
            let result = AssertUnwindSafe(fetch_one(source.clone(), self.source_timeout))
                .catch_unwind()
                .await
                .unwrap_or_else(|payload| Err(aborted(name, payload)));
            results.push(result);
        }
        results
    }

    async fn collect_concurrent(&self) -> Vec<Result<CanonicalRate, FetchError>> {
        let handles: Vec<_> = self
            .sources
            .iter()
            .map(|source| tokio::spawn(fetch_one(source.clone(), self.source_timeout)))
            .collect();
        let _abort = AbortOnDrop(handles.iter().map(JoinHandle::abort_handle).collect());

        let joined = futures_util::future::join_all(handles).await;

        self.sources
            .iter()
            .zip(joined)
            .map(|(source, joined)| match joined {
                Ok(result) => result,
                Err(err) if err.is_panic() => Err(aborted(source.display_name(), err.into_panic())),
                Err(err) => Err(FetchError::Aborted {
                    venue: source.display_name(),
                    reason: err.to_string(),
                }),
            })
            .collect()
    }
}

/// Aborts the spawned fetches if `collect` is dropped before they finish.
/// Aborting a finished task is a no-op.
struct AbortOnDrop(Vec<AbortHandle>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        for handle in &self.0 {
            handle.abort();
        }
    }
}

async fn fetch_one(
    source: Arc<dyn RateSource>,
    timeout: Option<Duration>,
) -> Result<CanonicalRate, FetchError> {
    let Some(limit) = timeout else {
        return source.fetch_rate().await;
    };
    tokio::time::timeout(limit, source.fetch_rate())
        .await
        .unwrap_or_else(|_| {
            Err(FetchError::Timeout {
                venue: source.display_name(),
                timeout: limit,
            })
        })
}

fn aborted(venue: &'static str, payload: Box<dyn Any + Send>) -> FetchError {
    let reason = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "adapter panicked".to_string());
    FetchError::Aborted { venue, reason }
}

fn log_outcome(outcome: &SourceOutcome) {
    match &outcome.result {
        Ok(rate) => info!(
            source = outcome.source,
            pair = %rate.pair_label(),
            price = rate.last_price(),
            volume = rate.base_asset_volume(),
            "Rate fetched"
        ),
        Err(e) => warn!(
            source = outcome.source,
            kind = e.kind(),
            error = %e,
            "Rate fetch failed"
        ),
    }
}
