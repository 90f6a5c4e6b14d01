//! Uphold ticker. Only bid and ask are published; the ask is reported.

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

const BASE_URL: &str = "https://api.uphold.com";
const TICKER_PATH: &str = "/v0/ticker/DASHUSD";

#[derive(Debug, Deserialize)]
pub struct TickerResponse {
    pub ask: String,
    pub bid: String,
    /// Quote currency.
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    pub ask: f64,
    pub bid: f64,
    pub currency: String,
}

impl TickerResponse {
    pub fn normalize(&self) -> Result<Ticker, NormalizeError> {
        Ok(Ticker {
            ask: decimal("ask", &self.ask)?,
            bid: decimal("bid", &self.bid)?,
            currency: self.currency.clone(),
        })
    }
}

pub struct UpholdSource {
    client: VenueClient,
}

impl UpholdSource {
    pub const NAME: &'static str = "Uphold";
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
impl RateSource for UpholdSource {
    fn display_name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        let fetched = self.client.get_json::<TickerResponse>(TICKER_PATH).await?;
        let ticker = self.client.normalized(fetched.payload.normalize())?;

        if !ticker.currency.eq_ignore_ascii_case(Self::PAIR.quote()) {
            return Err(self.client.unavailable(Self::PAIR));
        }
        debug!(venue = Self::NAME, bid = ticker.bid, "Ticker normalized");

        self.client.rate(Self::PAIR, ticker.ask, 0.0, fetched.received_at)
    }
}
