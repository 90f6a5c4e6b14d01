//! Coinbase v2 exchange rates for DASH, keyed by quote currency.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use super::client::VenueClient;
use super::normalize::decimal;
use crate::domain::pair::CurrencyPair;
use crate::domain::rate::CanonicalRate;
use crate::error::FetchError;
use crate::port::outbound::rate::RateSource;
use crate::port::outbound::transport::HttpTransport;

const BASE_URL: &str = "https://api.coinbase.com";
const RATES_PATH: &str = "/v2/exchange-rates?currency=DASH";

#[derive(Debug, Deserialize)]
pub struct ExchangeRatesResponse {
    #[serde(default)]
    pub data: Option<ExchangeRates>,
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

#[derive(Debug, Deserialize)]
pub struct ExchangeRates {
    pub currency: String,
    pub rates: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub id: String,
    pub message: String,
}

pub struct CoinbaseSource {
    client: VenueClient,
}

impl CoinbaseSource {
    pub const NAME: &'static str = "Coinbase";
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
impl RateSource for CoinbaseSource {
    fn display_name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        let fetched = self.client.get_json::<ExchangeRatesResponse>(RATES_PATH).await?;
        let response = fetched.payload;

        if let Some(error) = response.errors.first() {
            return Err(self.client.rejected(format!("{}: {}", error.id, error.message)));
        }
        let rates = response
            .data
            .filter(|data| data.currency.eq_ignore_ascii_case(Self::PAIR.base()))
            .ok_or_else(|| self.client.unavailable(Self::PAIR))?;
        let quoted = rates
            .rates
            .get(Self::PAIR.quote())
            .ok_or_else(|| self.client.unavailable(Self::PAIR))?;
        let price = self.client.normalized(decimal("rates.USD", quoted))?;

        self.client.rate(Self::PAIR, price, 0.0, fetched.received_at)
    }
}
