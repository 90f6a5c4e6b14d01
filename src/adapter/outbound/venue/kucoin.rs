//! KuCoin level-1 order book ticker. No volume on this endpoint.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use super::client::VenueClient;
use super::normalize::{decimal, epoch_millis, integer};
use crate::domain::pair::CurrencyPair;
use crate::domain::rate::CanonicalRate;
use crate::error::{FetchError, NormalizeError};
use crate::port::outbound::rate::RateSource;
use crate::port::outbound::transport::HttpTransport;

const BASE_URL: &str = "https://api.kucoin.com";
const TICKER_PATH: &str = "/api/v1/market/orderbook/level1?symbol=DASH-BTC";
const CODE_OK: &str = "200000";

#[derive(Debug, Deserialize)]
pub struct TickerResponse {
    pub code: String,
    #[serde(default)]
    pub msg: Option<String>,
    /// `null` when the symbol is not listed.
    #[serde(default)]
    pub data: Option<Level1>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level1 {
    pub sequence: String,
    pub best_ask: String,
    pub size: String,
    pub price: String,
    pub best_bid_size: String,
    /// Millisecond epoch.
    pub time: i64,
    pub best_bid: String,
    pub best_ask_size: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    pub sequence: i64,
    pub best_ask: f64,
    pub size: f64,
    pub price: f64,
    pub best_bid_size: f64,
    pub time: DateTime<Utc>,
    pub best_bid: f64,
    pub best_ask_size: f64,
}

impl Level1 {
    pub fn normalize(&self) -> Result<Ticker, NormalizeError> {
        Ok(Ticker {
            sequence: integer("sequence", &self.sequence)?,
            best_ask: decimal("bestAsk", &self.best_ask)?,
            size: decimal("size", &self.size)?,
            price: decimal("price", &self.price)?,
            best_bid_size: decimal("bestBidSize", &self.best_bid_size)?,
            time: epoch_millis("time", self.time)?,
            best_bid: decimal("bestBid", &self.best_bid)?,
            best_ask_size: decimal("bestAskSize", &self.best_ask_size)?,
        })
    }
}

pub struct KuCoinSource {
    client: VenueClient,
}

impl KuCoinSource {
    pub const NAME: &'static str = "KuCoin";
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
impl RateSource for KuCoinSource {
    fn display_name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        let fetched = self.client.get_json::<TickerResponse>(TICKER_PATH).await?;
        let response = fetched.payload;

        if response.code != CODE_OK {
            return Err(self.client.rejected(format!(
                "code {}: {}",
                response.code,
                response.msg.unwrap_or_default()
            )));
        }
        let level1 = response.data.ok_or_else(|| self.client.unavailable(Self::PAIR))?;
        let ticker = self.client.normalized(level1.normalize())?;

        debug!(venue = Self::NAME, sequence = ticker.sequence, venue_time = %ticker.time, "Ticker normalized");

        self.client.rate(Self::PAIR, ticker.price, 0.0, fetched.received_at)
    }
}
