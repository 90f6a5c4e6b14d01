//! CEX.IO ticker.
//!
//! The response names its own pair (`"DASH:USD"`); the label must agree with
//! the pair the adapter asked for.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use super::client::VenueClient;
use super::normalize::{currency_pair, decimal, epoch_seconds_text};
use crate::domain::pair::CurrencyPair;
use crate::domain::rate::CanonicalRate;
use crate::error::{FetchError, NormalizeError};
use crate::port::outbound::rate::RateSource;
use crate::port::outbound::transport::HttpTransport;

const BASE_URL: &str = "https://cex.io";
const TICKER_PATH: &str = "/api/ticker/DASH/USD";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerResponse {
    /// Whole-second epoch as text.
    pub timestamp: String,
    pub low: String,
    pub high: String,
    pub last: String,
    pub volume: String,
    pub volume30d: String,
    pub bid: f64,
    pub ask: f64,
    pub price_change: String,
    pub price_change_percentage: String,
    pub pair: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    pub timestamp: DateTime<Utc>,
    pub low: f64,
    pub high: f64,
    pub last: f64,
    pub volume: f64,
    pub volume_30d: f64,
    pub bid: f64,
    pub ask: f64,
    pub price_change: f64,
    pub price_change_percentage: f64,
    pub base: String,
    pub quote: String,
}

impl TickerResponse {
    pub fn normalize(&self) -> Result<Ticker, NormalizeError> {
        let (base, quote) = currency_pair("pair", &self.pair, ':')?;
        Ok(Ticker {
            timestamp: epoch_seconds_text("timestamp", &self.timestamp)?,
            low: decimal("low", &self.low)?,
            high: decimal("high", &self.high)?,
            last: decimal("last", &self.last)?,
            volume: decimal("volume", &self.volume)?,
            volume_30d: decimal("volume30d", &self.volume30d)?,
            bid: self.bid,
            ask: self.ask,
            price_change: decimal("priceChange", &self.price_change)?,
            price_change_percentage: decimal("priceChangePercentage", &self.price_change_percentage)?,
            base: base.to_string(),
            quote: quote.to_string(),
        })
    }
}

pub struct CexSource {
    client: VenueClient,
}

impl CexSource {
    pub const NAME: &'static str = "CEX.IO";
    pub const PAIR: CurrencyPair = CurrencyPair::DASH_USD;

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
impl RateSource for CexSource {
    fn display_name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        let fetched = self.client.get_json::<TickerResponse>(TICKER_PATH).await?;
        let ticker = self.client.normalized(fetched.payload.normalize())?;

        if !Self::PAIR.matches(&ticker.base, &ticker.quote) {
            return Err(self.client.unavailable(Self::PAIR));
        }
        debug!(venue = Self::NAME, venue_time = %ticker.timestamp, bid = ticker.bid, ask = ticker.ask, "Ticker normalized");

        self.client
            .rate(Self::PAIR, ticker.last, ticker.volume, fetched.received_at)
    }
}
