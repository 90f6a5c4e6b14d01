//! Exmo ticker map. Every market in one response, keyed `BASE_QUOTE`.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::client::VenueClient;
use super::normalize::{decimal, epoch_seconds};
use crate::domain::pair::CurrencyPair;
use crate::domain::rate::CanonicalRate;
use crate::error::{FetchError, NormalizeError};
use crate::port::outbound::rate::RateSource;
use crate::port::outbound::transport::HttpTransport;

const BASE_URL: &str = "https://api.exmo.com";
const TICKER_PATH: &str = "/v1/ticker/";
const MARKET_KEY: &str = "DASH_USD";

#[derive(Debug, Deserialize)]
pub struct MarketTicker {
    pub buy_price: String,
    pub sell_price: String,
    pub last_trade: String,
    pub high: String,
    pub low: String,
    pub avg: String,
    /// Base-denominated.
    pub vol: String,
    /// Quote-denominated.
    pub vol_curr: String,
    pub updated: i64,
}

/// Every market, left undecoded until the DASH entry is selected.
pub type TickerMap = HashMap<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    pub buy_price: f64,
    pub sell_price: f64,
    pub last_trade: f64,
    pub high: f64,
    pub low: f64,
    pub avg: f64,
    pub base_volume: f64,
    pub quote_volume: f64,
    pub updated: DateTime<Utc>,
}

impl MarketTicker {
    pub fn normalize(&self) -> Result<Ticker, NormalizeError> {
        Ok(Ticker {
            buy_price: decimal("buy_price", &self.buy_price)?,
            sell_price: decimal("sell_price", &self.sell_price)?,
            last_trade: decimal("last_trade", &self.last_trade)?,
            high: decimal("high", &self.high)?,
            low: decimal("low", &self.low)?,
            avg: decimal("avg", &self.avg)?,
            base_volume: decimal("vol", &self.vol)?,
            quote_volume: decimal("vol_curr", &self.vol_curr)?,
            updated: epoch_seconds("updated", self.updated)?,
        })
    }
}

pub struct ExmoSource {
    client: VenueClient,
}

impl ExmoSource {
    pub const NAME: &'static str = "Exmo";
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
impl RateSource for ExmoSource {
    fn display_name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        let mut fetched = self.client.get_json::<TickerMap>(TICKER_PATH).await?;
        let entry: MarketTicker = self
            .client
            .select(&mut fetched.payload, MARKET_KEY, Self::PAIR)?;
        let ticker = self.client.normalized(entry.normalize())?;

        debug!(venue = Self::NAME, venue_time = %ticker.updated, avg = ticker.avg, "Ticker normalized");

        self.client
            .rate(Self::PAIR, ticker.last_trade, ticker.base_volume, fetched.received_at)
    }
}
