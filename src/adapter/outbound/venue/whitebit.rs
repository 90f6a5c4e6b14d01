//! WhiteBIT v1 market ticker.

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

const BASE_URL: &str = "https://whitebit.com";
const TICKER_PATH: &str = "/api/v1/public/ticker?market=DASH_USD";

#[derive(Debug, Deserialize)]
pub struct TickerResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub result: Option<MarketTicker>,
}

#[derive(Debug, Deserialize)]
pub struct MarketTicker {
    pub bid: String,
    pub ask: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub last: String,
    /// Base-denominated.
    pub volume: String,
    /// Quote-denominated.
    pub deal: String,
    pub change: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    pub bid: f64,
    pub ask: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub last: f64,
    pub volume: f64,
    pub deal: f64,
    pub change: f64,
}

impl MarketTicker {
    pub fn normalize(&self) -> Result<Ticker, NormalizeError> {
        Ok(Ticker {
            bid: decimal("bid", &self.bid)?,
            ask: decimal("ask", &self.ask)?,
            open: decimal("open", &self.open)?,
            high: decimal("high", &self.high)?,
            low: decimal("low", &self.low)?,
            last: decimal("last", &self.last)?,
            volume: decimal("volume", &self.volume)?,
            deal: decimal("deal", &self.deal)?,
            change: decimal("change", &self.change)?,
        })
    }
}

pub struct WhiteBitSource {
    client: VenueClient,
}

impl WhiteBitSource {
    pub const NAME: &'static str = "WhiteBIT";
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
impl RateSource for WhiteBitSource {
    fn display_name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        let fetched = self.client.get_json::<TickerResponse>(TICKER_PATH).await?;
        let response = fetched.payload;

        if !response.success {
            return Err(self.client.rejected(response.message.unwrap_or_default()));
        }
        let market = response.result.ok_or_else(|| self.client.unavailable(Self::PAIR))?;
        let ticker = self.client.normalized(market.normalize())?;

        debug!(venue = Self::NAME, deal = ticker.deal, change = ticker.change, "Ticker normalized");

        self.client
            .rate(Self::PAIR, ticker.last, ticker.volume, fetched.received_at)
    }
}
