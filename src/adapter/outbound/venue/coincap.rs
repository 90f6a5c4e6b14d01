//! CoinCap v2 reference rate. Quoted in USD, no volume.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::client::VenueClient;
use super::normalize::{decimal, epoch_millis};
use crate::domain::pair::CurrencyPair;
use crate::domain::rate::CanonicalRate;
use crate::error::FetchError;
use crate::port::outbound::rate::RateSource;
use crate::port::outbound::transport::HttpTransport;

const BASE_URL: &str = "https://api.coincap.io";
const RATE_PATH: &str = "/v2/rates/dash";

#[derive(Debug, Deserialize)]
pub struct RateResponse {
    #[serde(default)]
    pub data: Option<RateData>,
    /// Millisecond epoch.
    #[serde(default)]
    pub timestamp: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateData {
    pub id: String,
    pub symbol: String,
    #[serde(default)]
    pub currency_symbol: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub rate_usd: String,
}

pub struct CoinCapSource {
    client: VenueClient,
}

impl CoinCapSource {
    pub const NAME: &'static str = "CoinCap";
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
impl RateSource for CoinCapSource {
    fn display_name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        let fetched = self.client.get_json::<RateResponse>(RATE_PATH).await?;
        let response = fetched.payload;

        let data = response
            .data
            .filter(|data| data.symbol.eq_ignore_ascii_case(Self::PAIR.base()))
            .ok_or_else(|| self.client.unavailable(Self::PAIR))?;
        let price = self.client.normalized(decimal("rateUsd", &data.rate_usd))?;
        if let Some(ms) = response.timestamp {
            let venue_time = self.client.normalized(epoch_millis("timestamp", ms))?;
            debug!(venue = Self::NAME, id = %data.id, kind = %data.kind, venue_time = %venue_time, "Rate normalized");
        }

        self.client.rate(Self::PAIR, price, 0.0, fetched.received_at)
    }
}
