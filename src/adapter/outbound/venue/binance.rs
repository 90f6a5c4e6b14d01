//! Binance symbol price ticker. The endpoint carries no volume.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use super::client::VenueClient;
use super::normalize::decimal;
use crate::domain::pair::CurrencyPair;
use crate::domain::rate::CanonicalRate;
use crate::error::{FetchError, NormalizeError};
use crate::port::outbound::rate::RateSource;
use crate::port::outbound::transport::HttpTransport;

const BASE_URL: &str = "https://api.binance.com";
const TICKER_PATH: &str = "/api/v3/ticker/price?symbol=DASHBTC";

#[derive(Debug, Deserialize)]
pub struct PriceResponse {
    pub symbol: String,
    pub price: String,
}

impl PriceResponse {
    pub fn normalize(&self) -> Result<f64, NormalizeError> {
        decimal("price", &self.price)
    }
}

pub struct BinanceSource {
    client: VenueClient,
}

impl BinanceSource {
    pub const NAME: &'static str = "Binance";
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
impl RateSource for BinanceSource {
    fn display_name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        let fetched = self.client.get_json::<PriceResponse>(TICKER_PATH).await?;
        let price = self.client.normalized(fetched.payload.normalize())?;

        self.client.rate(Self::PAIR, price, 0.0, fetched.received_at)
    }
}
