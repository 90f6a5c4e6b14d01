//! Livecoin ticker. Every field is a JSON number.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::client::VenueClient;
use crate::domain::pair::CurrencyPair;
use crate::domain::rate::CanonicalRate;
use crate::error::FetchError;
use crate::port::outbound::rate::RateSource;
use crate::port::outbound::transport::HttpTransport;

const BASE_URL: &str = "https://api.livecoin.net";
const TICKER_PATH: &str = "/exchange/ticker?currencyPair=DASH/USD";

#[derive(Debug, Clone, Deserialize)]
pub struct TickerResponse {
    pub cur: String,
    pub symbol: String,
    pub last: f64,
    pub high: f64,
    pub low: f64,
    pub volume: f64,
    pub vwap: f64,
    pub max_bid: f64,
    pub min_ask: f64,
    pub best_bid: f64,
    pub best_ask: f64,
}

pub struct LivecoinSource {
    client: VenueClient,
}

impl LivecoinSource {
    pub const NAME: &'static str = "Livecoin";
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
impl RateSource for LivecoinSource {
    fn display_name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        let fetched = self.client.get_json::<TickerResponse>(TICKER_PATH).await?;
        let ticker = fetched.payload;

        let listed = ticker
            .symbol
            .split_once('/')
            .is_some_and(|(base, quote)| Self::PAIR.matches(base, quote));
        if !listed {
            return Err(self.client.unavailable(Self::PAIR));
        }
        debug!(venue = Self::NAME, vwap = ticker.vwap, "Ticker decoded");

        self.client
            .rate(Self::PAIR, ticker.last, ticker.volume, fetched.received_at)
    }
}
