//! Bvnex ticker.

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

const BASE_URL: &str = "https://api.bvnex.com";
const TICKER_PATH: &str = "/api/ticker/get?symbol=dash_usdt";

#[derive(Debug, Deserialize)]
pub struct TickerResponse {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Option<TickerData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerData {
    pub last: String,
    pub lowest_ask: String,
    pub highest_bid: String,
    pub percent_change: String,
    pub base_volume: String,
    pub quote_volume: String,
    pub high24hr: String,
    pub low24hr: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    pub last: f64,
    pub lowest_ask: f64,
    pub highest_bid: f64,
    pub percent_change: f64,
    pub base_volume: f64,
    pub quote_volume: f64,
    pub high_24h: f64,
    pub low_24h: f64,
}

impl TickerData {
    pub fn normalize(&self) -> Result<Ticker, NormalizeError> {
        Ok(Ticker {
            last: decimal("last", &self.last)?,
            lowest_ask: decimal("lowestAsk", &self.lowest_ask)?,
            highest_bid: decimal("highestBid", &self.highest_bid)?,
            percent_change: decimal("percentChange", &self.percent_change)?,
            base_volume: decimal("baseVolume", &self.base_volume)?,
            quote_volume: decimal("quoteVolume", &self.quote_volume)?,
            high_24h: decimal("high24hr", &self.high24hr)?,
            low_24h: decimal("low24hr", &self.low24hr)?,
        })
    }
}

pub struct BvnexSource {
    client: VenueClient,
}

impl BvnexSource {
    pub const NAME: &'static str = "Bvnex";
    pub const PAIR: CurrencyPair = CurrencyPair::DASH_USDT;

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
impl RateSource for BvnexSource {
    fn display_name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        let fetched = self.client.get_json::<TickerResponse>(TICKER_PATH).await?;
        let response = fetched.payload;

        if response.code != 0 {
            return Err(self
                .client
                .rejected(format!("code {}: {}", response.code, response.msg)));
        }
        let data = response.data.ok_or_else(|| self.client.unavailable(Self::PAIR))?;
        let ticker = self.client.normalized(data.normalize())?;

        debug!(venue = Self::NAME, quote_volume = ticker.quote_volume, "Ticker normalized");

        self.client
            .rate(Self::PAIR, ticker.last, ticker.base_volume, fetched.received_at)
    }
}
