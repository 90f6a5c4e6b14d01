//! Poloniex `returnTicker`.
//!
//! One response lists every market keyed `QUOTE_BASE` (`BTC_DASH`). Poloniex
//! names volumes from the quote side, so the wire `quoteVolume` is the DASH
//! volume and the wire `baseVolume` the BTC volume.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::client::VenueClient;
use super::normalize::{decimal, integer};
use crate::domain::pair::CurrencyPair;
use crate::domain::rate::CanonicalRate;
use crate::error::{FetchError, NormalizeError};
use crate::port::outbound::rate::RateSource;
use crate::port::outbound::transport::HttpTransport;

const BASE_URL: &str = "https://poloniex.com/public";
const TICKER_PATH: &str = "?command=returnTicker";
const MARKET_KEY: &str = "BTC_DASH";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketTicker {
    pub id: i64,
    pub last: String,
    pub lowest_ask: String,
    pub highest_bid: String,
    pub percent_change: String,
    pub base_volume: String,
    pub quote_volume: String,
    /// `"0"` or `"1"`.
    pub is_frozen: String,
    pub high24hr: String,
    pub low24hr: String,
}

/// Every market, left undecoded until the DASH entry is selected.
pub type TickerMap = HashMap<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    pub id: i64,
    pub last: f64,
    pub lowest_ask: f64,
    pub highest_bid: f64,
    pub percent_change: f64,
    /// Wire `quoteVolume`.
    pub base_volume: f64,
    /// Wire `baseVolume`.
    pub quote_volume: f64,
    pub frozen: bool,
    pub high_24h: f64,
    pub low_24h: f64,
}

impl MarketTicker {
    pub fn normalize(&self) -> Result<Ticker, NormalizeError> {
        Ok(Ticker {
            id: self.id,
            last: decimal("last", &self.last)?,
            lowest_ask: decimal("lowestAsk", &self.lowest_ask)?,
            highest_bid: decimal("highestBid", &self.highest_bid)?,
            percent_change: decimal("percentChange", &self.percent_change)?,
            base_volume: decimal("quoteVolume", &self.quote_volume)?,
            quote_volume: decimal("baseVolume", &self.base_volume)?,
            frozen: integer("isFrozen", &self.is_frozen)? != 0,
            high_24h: decimal("high24hr", &self.high24hr)?,
            low_24h: decimal("low24hr", &self.low24hr)?,
        })
    }
}

pub struct PoloniexSource {
    client: VenueClient,
}

impl PoloniexSource {
    pub const NAME: &'static str = "Poloniex";
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
impl RateSource for PoloniexSource {
    fn display_name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        let mut fetched = self.client.get_json::<TickerMap>(TICKER_PATH).await?;
        let entry: MarketTicker = self
            .client
            .select(&mut fetched.payload, MARKET_KEY, Self::PAIR)?;
        let ticker = self.client.normalized(entry.normalize())?;

        if ticker.frozen {
            warn!(venue = Self::NAME, market = MARKET_KEY, "Market is frozen");
        }
        debug!(venue = Self::NAME, market_id = ticker.id, quote_volume = ticker.quote_volume, "Ticker normalized");

        self.client
            .rate(Self::PAIR, ticker.last, ticker.base_volume, fetched.received_at)
    }
}
