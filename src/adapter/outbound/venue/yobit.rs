//! Yobit v3 ticker.
//!
//! The body is an object keyed by pair name. On an unknown pair Yobit answers
//! `{"success": 0, "error": "..."}` in the same shape, so entries are decoded
//! only after the requested key is found.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::client::VenueClient;
use super::normalize::epoch_seconds;
use crate::domain::pair::CurrencyPair;
use crate::domain::rate::CanonicalRate;
use crate::error::FetchError;
use crate::port::outbound::rate::RateSource;
use crate::port::outbound::transport::HttpTransport;

const BASE_URL: &str = "https://yobit.net";
const TICKER_PATH: &str = "/api/3/ticker/dash_usd";
const PAIR_KEY: &str = "dash_usd";

#[derive(Debug, Clone, Deserialize)]
pub struct PairTicker {
    pub high: f64,
    pub low: f64,
    pub avg: f64,
    /// Quote-denominated.
    pub vol: f64,
    /// Base-denominated.
    pub vol_cur: f64,
    pub last: f64,
    pub buy: f64,
    pub sell: f64,
    pub updated: i64,
}

pub struct YobitSource {
    client: VenueClient,
}

impl YobitSource {
    pub const NAME: &'static str = "Yobit";
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
impl RateSource for YobitSource {
    fn display_name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        let fetched = self.client.get_json::<HashMap<String, Value>>(TICKER_PATH).await?;
        let mut body = fetched.payload;

        let Some(entry) = body.remove(PAIR_KEY) else {
            return match body.get("error").and_then(Value::as_str) {
                Some(message) => Err(self.client.rejected(message)),
                None => Err(self.client.unavailable(Self::PAIR)),
            };
        };
        let ticker: PairTicker = self.client.decode(entry)?;
        let updated = self.client.normalized(epoch_seconds("updated", ticker.updated))?;

        debug!(venue = Self::NAME, venue_time = %updated, quote_volume = ticker.vol, "Ticker decoded");

        self.client
            .rate(Self::PAIR, ticker.last, ticker.vol_cur, fetched.received_at)
    }
}
