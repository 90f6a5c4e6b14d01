//! Indodax ticker. Indodax still lists DASH under its old `drk` code.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use super::client::VenueClient;
use super::normalize::{decimal, epoch_seconds};
use crate::domain::pair::CurrencyPair;
use crate::domain::rate::CanonicalRate;
use crate::error::{FetchError, NormalizeError};
use crate::port::outbound::rate::RateSource;
use crate::port::outbound::transport::HttpTransport;

const BASE_URL: &str = "https://indodax.com";
const TICKER_PATH: &str = "/api/drk_btc/ticker";

#[derive(Debug, Deserialize)]
pub struct TickerResponse {
    pub ticker: TickerData,
}

#[derive(Debug, Deserialize)]
pub struct TickerData {
    pub high: String,
    pub low: String,
    pub vol_drk: String,
    pub vol_btc: String,
    pub last: String,
    pub buy: String,
    pub sell: String,
    pub server_time: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    pub high: f64,
    pub low: f64,
    pub base_volume: f64,
    pub quote_volume: f64,
    pub last: f64,
    pub buy: f64,
    pub sell: f64,
    pub server_time: DateTime<Utc>,
}

impl TickerData {
    pub fn normalize(&self) -> Result<Ticker, NormalizeError> {
        Ok(Ticker {
            high: decimal("high", &self.high)?,
            low: decimal("low", &self.low)?,
            base_volume: decimal("vol_drk", &self.vol_drk)?,
            quote_volume: decimal("vol_btc", &self.vol_btc)?,
            last: decimal("last", &self.last)?,
            buy: decimal("buy", &self.buy)?,
            sell: decimal("sell", &self.sell)?,
            server_time: epoch_seconds("server_time", self.server_time)?,
        })
    }
}

pub struct IndodaxSource {
    client: VenueClient,
}

impl IndodaxSource {
    pub const NAME: &'static str = "Indodax";
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
impl RateSource for IndodaxSource {
    fn display_name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        let fetched = self.client.get_json::<TickerResponse>(TICKER_PATH).await?;
        let ticker = self.client.normalized(fetched.payload.ticker.normalize())?;

        debug!(venue = Self::NAME, venue_time = %ticker.server_time, "Ticker normalized");

        self.client
            .rate(Self::PAIR, ticker.last, ticker.base_volume, fetched.received_at)
    }
}
