//! Bitfinex v1 public ticker.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use super::client::VenueClient;
use super::normalize::{decimal, dotted_seconds};
use crate::domain::pair::CurrencyPair;
use crate::domain::rate::CanonicalRate;
use crate::error::{FetchError, NormalizeError};
use crate::port::outbound::rate::RateSource;
use crate::port::outbound::transport::HttpTransport;

const BASE_URL: &str = "https://api.bitfinex.com";
const TICKER_PATH: &str = "/v1/pubticker/dshusd";

#[derive(Debug, Deserialize)]
pub struct PubTickerResponse {
    pub mid: String,
    pub bid: String,
    pub ask: String,
    pub last_price: String,
    pub low: String,
    pub high: String,
    pub volume: String,
    /// `"<seconds>.<fraction>"`.
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PubTicker {
    pub mid: f64,
    pub bid: f64,
    pub ask: f64,
    pub last_price: f64,
    pub low: f64,
    pub high: f64,
    pub volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl PubTickerResponse {
    pub fn normalize(&self) -> Result<PubTicker, NormalizeError> {
        Ok(PubTicker {
            mid: decimal("mid", &self.mid)?,
            bid: decimal("bid", &self.bid)?,
            ask: decimal("ask", &self.ask)?,
            last_price: decimal("last_price", &self.last_price)?,
            low: decimal("low", &self.low)?,
            high: decimal("high", &self.high)?,
            volume: decimal("volume", &self.volume)?,
            timestamp: dotted_seconds("timestamp", &self.timestamp)?,
        })
    }
}

pub struct BitfinexSource {
    client: VenueClient,
}

impl BitfinexSource {
    pub const NAME: &'static str = "Bitfinex";
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
impl RateSource for BitfinexSource {
    fn display_name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        let fetched = self.client.get_json::<PubTickerResponse>(TICKER_PATH).await?;
        let ticker = self.client.normalized(fetched.payload.normalize())?;

        debug!(venue = Self::NAME, venue_time = %ticker.timestamp, mid = ticker.mid, "Ticker normalized");

        self.client
            .rate(Self::PAIR, ticker.last_price, ticker.volume, fetched.received_at)
    }
}
