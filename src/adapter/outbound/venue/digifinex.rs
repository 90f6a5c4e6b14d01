//! Digifinex v3 ticker.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::client::VenueClient;
use super::normalize::epoch_seconds;
use crate::domain::pair::CurrencyPair;
use crate::domain::rate::CanonicalRate;
use crate::error::FetchError;
use crate::port::outbound::rate::RateSource;
use crate::port::outbound::transport::HttpTransport;

const BASE_URL: &str = "https://openapi.digifinex.com";
const TICKER_PATH: &str = "/v3/ticker?symbol=dash_usdt";
const SYMBOL: &str = "dash_usdt";

#[derive(Debug, Deserialize)]
pub struct TickerResponse {
    #[serde(default)]
    pub ticker: Vec<SymbolTicker>,
    /// Whole-second epoch.
    #[serde(default)]
    pub date: Option<i64>,
    pub code: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SymbolTicker {
    pub symbol: String,
    pub vol: f64,
    pub change: f64,
    pub base_vol: f64,
    pub sell: f64,
    pub last: f64,
    pub low: f64,
    pub buy: f64,
    pub high: f64,
}

pub struct DigifinexSource {
    client: VenueClient,
}

impl DigifinexSource {
    pub const NAME: &'static str = "Digifinex";
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
impl RateSource for DigifinexSource {
    fn display_name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        let fetched = self.client.get_json::<TickerResponse>(TICKER_PATH).await?;
        let response = fetched.payload;

        if response.code != 0 {
            return Err(self.client.rejected(format!("code {}", response.code)));
        }
        let ticker = response
            .ticker
            .iter()
            .find(|t| t.symbol.eq_ignore_ascii_case(SYMBOL))
            .ok_or_else(|| self.client.unavailable(Self::PAIR))?;
        if let Some(date) = response.date {
            let venue_time = self.client.normalized(epoch_seconds("date", date))?;
            debug!(venue = Self::NAME, venue_time = %venue_time, vol = ticker.vol, "Ticker selected");
        }

        self.client
            .rate(Self::PAIR, ticker.last, ticker.base_vol, fetched.received_at)
    }
}
