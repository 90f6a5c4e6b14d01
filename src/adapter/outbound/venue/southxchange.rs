//! SouthXchange market price.

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

const BASE_URL: &str = "https://www.southxchange.com";
const PRICE_PATH: &str = "/api/price/DASH/BTC";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PriceResponse {
    /// `null` on an empty book side.
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub last: f64,
    pub variation24_hr: f64,
    pub volume24_hr: f64,
}

pub struct SouthXchangeSource {
    client: VenueClient,
}

impl SouthXchangeSource {
    pub const NAME: &'static str = "SouthXchange";
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
impl RateSource for SouthXchangeSource {
    fn display_name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        let fetched = self.client.get_json::<PriceResponse>(PRICE_PATH).await?;
        let price = fetched.payload;

        debug!(venue = Self::NAME, bid = ?price.bid, ask = ?price.ask, variation = price.variation24_hr, "Price decoded");

        self.client
            .rate(Self::PAIR, price.last, price.volume24_hr, fetched.received_at)
    }
}
