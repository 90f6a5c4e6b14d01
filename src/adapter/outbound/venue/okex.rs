//! OKEx v3 spot instrument ticker.
//!
//! For this instrument the wire `quote_volume_24h` carries the
//! DASH-denominated figure, so it is the one reported as base volume.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use super::client::VenueClient;
use super::normalize::{decimal, rfc3339};
use crate::domain::pair::CurrencyPair;
use crate::domain::rate::CanonicalRate;
use crate::error::{FetchError, NormalizeError};
use crate::port::outbound::rate::RateSource;
use crate::port::outbound::transport::HttpTransport;

const BASE_URL: &str = "https://www.okex.com";
const TICKER_PATH: &str = "/api/spot/v3/instruments/DASH-BTC/ticker";

#[derive(Debug, Deserialize)]
pub struct TickerResponse {
    pub instrument_id: String,
    #[serde(default)]
    pub product_id: Option<String>,
    pub best_ask: String,
    pub best_bid: String,
    pub last: String,
    pub last_qty: String,
    pub ask: String,
    pub best_ask_size: String,
    pub bid: String,
    pub best_bid_size: String,
    pub open_24h: String,
    pub high_24h: String,
    pub low_24h: String,
    pub base_volume_24h: String,
    pub quote_volume_24h: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    pub instrument_id: String,
    pub best_ask: f64,
    pub best_bid: f64,
    pub last: f64,
    pub last_qty: f64,
    pub ask: f64,
    pub best_ask_size: f64,
    pub bid: f64,
    pub best_bid_size: f64,
    pub open_24h: f64,
    pub high_24h: f64,
    pub low_24h: f64,
    /// Wire `quote_volume_24h`.
    pub base_volume: f64,
    /// Wire `base_volume_24h`.
    pub quote_volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl TickerResponse {
    pub fn normalize(&self) -> Result<Ticker, NormalizeError> {
        Ok(Ticker {
            instrument_id: self.instrument_id.clone(),
            best_ask: decimal("best_ask", &self.best_ask)?,
            best_bid: decimal("best_bid", &self.best_bid)?,
            last: decimal("last", &self.last)?,
            last_qty: decimal("last_qty", &self.last_qty)?,
            ask: decimal("ask", &self.ask)?,
            best_ask_size: decimal("best_ask_size", &self.best_ask_size)?,
            bid: decimal("bid", &self.bid)?,
            best_bid_size: decimal("best_bid_size", &self.best_bid_size)?,
            open_24h: decimal("open_24h", &self.open_24h)?,
            high_24h: decimal("high_24h", &self.high_24h)?,
            low_24h: decimal("low_24h", &self.low_24h)?,
            base_volume: decimal("quote_volume_24h", &self.quote_volume_24h)?,
            quote_volume: decimal("base_volume_24h", &self.base_volume_24h)?,
            timestamp: rfc3339("timestamp", &self.timestamp)?,
        })
    }
}

pub struct OkexSource {
    client: VenueClient,
}

impl OkexSource {
    pub const NAME: &'static str = "OKEx";
    pub const PAIR: CurrencyPair = CurrencyPair::DASH_BTC;

    #[must_use]
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self::with_base_url(transport, BASE_URL)
    }

    #[must_use]
    pub fn with_base_url(transport: Arc<dyn HttpTransport>, base_url: impl Into<String>) -> Self {
        Self {
            client: VenueClient::new(Self::NAME, base_url, transport),
        }
    }
}

#[async_trait]
impl RateSource for OkexSource {
    fn display_name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        let fetched = self.client.get_json::<TickerResponse>(TICKER_PATH).await?;
        let ticker = self.client.normalized(fetched.payload.normalize())?;

        debug!(
            venue = Self::NAME,
            instrument = %ticker.instrument_id,
            venue_time = %ticker.timestamp,
            quote_volume = ticker.quote_volume,
            "Ticker normalized"
        );

        self.client
            .rate(Self::PAIR, ticker.last, ticker.base_volume, fetched.received_at)
    }
}
