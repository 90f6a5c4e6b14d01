//! Scripted [`RateSource`] implementations for aggregator tests.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::pair::CurrencyPair;
use crate::domain::rate::CanonicalRate;
use crate::error::FetchError;
use crate::port::outbound::rate::RateSource;

// ---------------------------------------------------------------------------
// StaticSource
// ---------------------------------------------------------------------------

/// Always succeeds with the same price and volume, stamped with the call time.
pub struct StaticSource {
    name: &'static str,
    pair: CurrencyPair,
    price: f64,
    volume: f64,
    delay: Option<Duration>,
    calls: Arc<AtomicU32>,
}

impl StaticSource {
    pub fn new(name: &'static str, price: f64) -> Self {
        Self {
            name,
            pair: CurrencyPair::DASH_USD,
            price,
            volume: 0.0,
            delay: None,
            calls: Arc::new(AtomicU32::new(0)),
        }
    }

    pub fn with_pair(mut self, pair: CurrencyPair) -> Self {
        self.pair = pair;
        self
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    /// Sleep before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Shared call counter.
    pub fn calls(&self) -> Arc<AtomicU32> {
        self.calls.clone()
    }
}

#[async_trait]
impl RateSource for StaticSource {
    fn display_name(&self) -> &'static str {
        self.name
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        CanonicalRate::try_new(self.pair, self.price, self.volume, Utc::now()).map_err(|e| {
            FetchError::Normalize {
                venue: self.name,
                source: e.into(),
            }
        })
    }
}

// ---------------------------------------------------------------------------
// FailingSource
// ---------------------------------------------------------------------------

/// Always fails with [`FetchError::Rejected`] carrying a fixed message.
pub struct FailingSource {
    name: &'static str,
    message: String,
}

impl FailingSource {
    pub fn new(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name,
            message: message.into(),
        }
    }
}

#[async_trait]
impl RateSource for FailingSource {
    fn display_name(&self) -> &'static str {
        self.name
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        Err(FetchError::Rejected {
            venue: self.name,
            message: self.message.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// PanickingSource
// ---------------------------------------------------------------------------

/// Panics inside `fetch_rate`.
pub struct PanickingSource {
    name: &'static str,
}

impl PanickingSource {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

#[async_trait]
impl RateSource for PanickingSource {
    fn display_name(&self) -> &'static str {
        self.name
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        panic!("{} exploded mid-fetch", self.name);
    }
}

// ---------------------------------------------------------------------------
// PendingSource
// ---------------------------------------------------------------------------

/// Never completes; only a caller timeout or cancellation ends it.
pub struct PendingSource {
    name: &'static str,
    in_flight: Arc<AtomicU32>,
}

impl PendingSource {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            in_flight: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Number of `fetch_rate` futures currently alive.
    pub fn in_flight(&self) -> Arc<AtomicU32> {
        self.in_flight.clone()
    }
}

/// Decrements the in-flight counter when the fetch future is dropped.
struct InFlight(Arc<AtomicU32>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl RateSource for PendingSource {
    fn display_name(&self) -> &'static str {
        self.name
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        let _guard = InFlight(self.in_flight.clone());
        std::future::pending().await
    }
}
