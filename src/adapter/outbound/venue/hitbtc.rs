//! HitBTC v2 symbol ticker.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use super::client::VenueClient;
use super::normalize::{decimal, millis_zulu};
use crate::domain::pair::CurrencyPair;
use crate::domain::rate::CanonicalRate;
use crate::error::{FetchError, NormalizeError};
use crate::port::outbound::rate::RateSource;
use crate::port::outbound::transport::HttpTransport;

const BASE_URL: &str = "https://api.hitbtc.com";
const TICKER_PATH: &str = "/api/2/public/ticker/DASHUSD";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerResponse {
    pub symbol: String,
    pub ask: String,
    pub bid: String,
    pub last: String,
    pub high: String,
    pub low: String,
    pub open: String,
    /// Base-denominated.
    pub volume: String,
    pub volume_quote: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    pub symbol: String,
    pub ask: f64,
    pub bid: f64,
    pub last: f64,
    pub high: f64,
    pub low: f64,
    pub open: f64,
    pub base_volume: f64,
    pub quote_volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl TickerResponse {
    pub fn normalize(&self) -> Result<Ticker, NormalizeError> {
        Ok(Ticker {
            symbol: self.symbol.clone(),
            ask: decimal("ask", &self.ask)?,
            bid: decimal("bid", &self.bid)?,
            last: decimal("last", &self.last)?,
            high: decimal("high", &self.high)?,
            low: decimal("low", &self.low)?,
            open: decimal("open", &self.open)?,
            base_volume: decimal("volume", &self.volume)?,
            quote_volume: decimal("volumeQuote", &self.volume_quote)?,
            timestamp: millis_zulu("timestamp", &self.timestamp)?,
        })
    }
}

pub struct HitBtcSource {
    client: VenueClient,
}

impl HitBtcSource {
    pub const NAME: &'static str = "HitBTC";
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
impl RateSource for HitBtcSource {
    fn display_name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        let fetched = self.client.get_json::<TickerResponse>(TICKER_PATH).await?;
        let ticker = self.client.normalized(fetched.payload.normalize())?;

        debug!(venue = Self::NAME, symbol = %ticker.symbol, venue_time = %ticker.timestamp, "Ticker normalized");

        self.client
            .rate(Self::PAIR, ticker.last, ticker.base_volume, fetched.received_at)
    }
}
