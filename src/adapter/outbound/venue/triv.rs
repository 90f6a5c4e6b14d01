//! Triv ticker list. One entry per coin, quoted in the requested currency.
//!
//! Triv publishes dealer buy and sell quotes rather than a last trade; the
//! buy quote stands in for the last price.

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

const BASE_URL: &str = "https://triv.id";
const TICKER_PATH: &str = "/api/v1/config/ticker?pair=USD";

#[derive(Debug, Clone, Deserialize)]
pub struct CoinQuote {
    pub code: String,
    #[serde(default)]
    pub name: String,
    pub sell: f64,
    pub buy: f64,
}

pub struct TrivSource {
    client: VenueClient,
}

impl TrivSource {
    pub const NAME: &'static str = "Triv";
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
impl RateSource for TrivSource {
    fn display_name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        let fetched = self.client.get_json::<Vec<CoinQuote>>(TICKER_PATH).await?;
        let quote = fetched
            .payload
            .iter()
            .find(|q| q.code == Self::PAIR.base())
            .ok_or_else(|| self.client.unavailable(Self::PAIR))?;

        debug!(venue = Self::NAME, name = %quote.name, sell = quote.sell, "Quote selected");

        self.client.rate(Self::PAIR, quote.buy, 0.0, fetched.received_at)
    }
}
