//! BigONE v3 asset pair ticker.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::client::VenueClient;
use super::normalize::decimal;
use crate::domain::pair::CurrencyPair;
use crate::domain::rate::CanonicalRate;
use crate::error::{FetchError, NormalizeError};
use crate::port::outbound::rate::RateSource;
use crate::port::outbound::transport::HttpTransport;

const BASE_URL: &str = "https://big.one/api/v3";
const TICKER_PATH: &str = "/asset_pairs/DASH-BTC/ticker";

#[derive(Debug, Deserialize)]
pub struct TickerResponse {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<TickerData>,
}

#[derive(Debug, Deserialize)]
pub struct TickerData {
    pub asset_pair_name: String,
    pub bid: BookLevel,
    pub ask: BookLevel,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
    pub daily_change: String,
}

#[derive(Debug, Deserialize)]
pub struct BookLevel {
    pub price: String,
    pub order_count: i64,
    pub quantity: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub price: f64,
    pub order_count: i64,
    pub quantity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    pub asset_pair_name: String,
    pub bid: Level,
    pub ask: Level,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub daily_change: f64,
}

impl BookLevel {
    fn normalize(&self, price: &'static str, quantity: &'static str) -> Result<Level, NormalizeError> {
        Ok(Level {
            price: decimal(price, &self.price)?,
            order_count: self.order_count,
            quantity: decimal(quantity, &self.quantity)?,
        })
    }
}

impl TickerData {
    pub fn normalize(&self) -> Result<Ticker, NormalizeError> {
        Ok(Ticker {
            asset_pair_name: self.asset_pair_name.clone(),
            bid: self.bid.normalize("bid.price", "bid.quantity")?,
            ask: self.ask.normalize("ask.price", "ask.quantity")?,
            open: decimal("open", &self.open)?,
            high: decimal("high", &self.high)?,
            low: decimal("low", &self.low)?,
            close: decimal("close", &self.close)?,
            volume: decimal("volume", &self.volume)?,
            daily_change: decimal("daily_change", &self.daily_change)?,
        })
    }
}

pub struct BigOneSource {
    client: VenueClient,
}

impl BigOneSource {
    pub const NAME: &'static str = "BigONE";
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
impl RateSource for BigOneSource {
    fn display_name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        let fetched = self.client.get_json::<TickerResponse>(TICKER_PATH).await?;
        let response = fetched.payload;

        if response.code != 0 {
            return Err(self.client.rejected(format!(
                "code {}: {}",
                response.code,
                response.message.unwrap_or_default()
            )));
        }
        let data = response.data.ok_or_else(|| self.client.unavailable(Self::PAIR))?;
        let ticker = self.client.normalized(data.normalize())?;

        debug!(
            venue = Self::NAME,
            pair = %ticker.asset_pair_name,
            bid = ticker.bid.price,
            ask = ticker.ask.price,
            "Ticker normalized"
        );

        self.client
            .rate(Self::PAIR, ticker.close, ticker.volume, fetched.received_at)
    }
}
