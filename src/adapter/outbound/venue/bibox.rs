//! Bibox market ticker.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use super::client::VenueClient;
use super::normalize::decimal;
use crate::domain::pair::CurrencyPair;
use crate::domain::rate::CanonicalRate;
use crate::error::{FetchError, NormalizeError};
use crate::port::outbound::rate::RateSource;
use crate::port::outbound::transport::HttpTransport;

const BASE_URL: &str = "https://api.bibox.com";
const TICKER_PATH: &str = "/v1/mdata?cmd=market&pair=DASH_BTC";

/// `cmd=market` envelope.
#[derive(Debug, Deserialize)]
pub struct MarketResponse {
    pub result: MarketResult,
    #[serde(default)]
    pub cmd: String,
}

/// Every price field is text; `is_hide` is an integer flag.
#[derive(Debug, Deserialize)]
pub struct MarketResult {
    pub is_hide: i64,
    pub coin_symbol: String,
    pub currency_symbol: String,
    pub last: String,
    pub high: String,
    pub low: String,
    pub change: String,
    pub percent: String,
    pub amount: String,
    #[serde(rename = "vol24H")]
    pub vol_24h: String,
    pub last_usd: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarketTicker {
    pub hidden: bool,
    pub coin_symbol: String,
    pub currency_symbol: String,
    pub last: f64,
    pub high: f64,
    pub low: f64,
    pub change: f64,
    /// Quote-denominated turnover.
    pub amount: f64,
    /// Base-denominated 24h volume.
    pub vol_24h: f64,
    pub last_usd: f64,
}

impl MarketResult {
    pub fn normalize(&self) -> Result<MarketTicker, NormalizeError> {
        Ok(MarketTicker {
            hidden: self.is_hide != 0,
            coin_symbol: self.coin_symbol.clone(),
            currency_symbol: self.currency_symbol.clone(),
            last: decimal("last", &self.last)?,
            high: decimal("high", &self.high)?,
            low: decimal("low", &self.low)?,
            change: decimal("change", &self.change)?,
            amount: decimal("amount", &self.amount)?,
            vol_24h: decimal("vol24H", &self.vol_24h)?,
            last_usd: decimal("last_usd", &self.last_usd)?,
        })
    }
}

pub struct BiboxSource {
    client: VenueClient,
}

impl BiboxSource {
    pub const NAME: &'static str = "Bibox";
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
impl RateSource for BiboxSource {
    fn display_name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        let fetched = self.client.get_json::<MarketResponse>(TICKER_PATH).await?;
        let ticker = self.client.normalized(fetched.payload.result.normalize())?;

        if !Self::PAIR.matches(&ticker.coin_symbol, &ticker.currency_symbol) {
            return Err(self.client.unavailable(Self::PAIR));
        }
        if ticker.hidden {
            warn!(venue = Self::NAME, "Market is flagged hidden");
        }
        debug!(venue = Self::NAME, cmd = %fetched.payload.cmd, last_usd = ticker.last_usd, "Ticker normalized");

        self.client
            .rate(Self::PAIR, ticker.last, ticker.vol_24h, fetched.received_at)
    }
}
