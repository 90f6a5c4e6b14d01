//! Liquid product detail. Product 116 is DASH/BTC.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::client::VenueClient;
use super::normalize::{decimal, integer};
use crate::domain::pair::CurrencyPair;
use crate::domain::rate::CanonicalRate;
use crate::error::{FetchError, NormalizeError};
use crate::port::outbound::rate::RateSource;
use crate::port::outbound::transport::HttpTransport;

const BASE_URL: &str = "https://api.liquid.com";
const PRODUCT_PATH: &str = "/products/116";

#[derive(Debug, Deserialize)]
pub struct ProductResponse {
    pub id: String,
    pub last_traded_price: String,
    pub volume_24h: String,
    #[serde(default)]
    pub base_currency: Option<String>,
    #[serde(default)]
    pub quoted_currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub last_traded_price: f64,
    pub volume_24h: f64,
}

impl ProductResponse {
    pub fn normalize(&self) -> Result<Product, NormalizeError> {
        Ok(Product {
            id: integer("id", &self.id)?,
            last_traded_price: decimal("last_traded_price", &self.last_traded_price)?,
            volume_24h: decimal("volume_24h", &self.volume_24h)?,
        })
    }

    /// `false` only when the product names a different pair.
    fn lists(&self, pair: CurrencyPair) -> bool {
        match (&self.base_currency, &self.quoted_currency) {
            (Some(base), Some(quote)) => pair.matches(base, quote),
            _ => true,
        }
    }
}

pub struct LiquidSource {
    client: VenueClient,
}

impl LiquidSource {
    pub const NAME: &'static str = "Liquid";
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
impl RateSource for LiquidSource {
    fn display_name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        let fetched = self.client.get_json::<ProductResponse>(PRODUCT_PATH).await?;
        if !fetched.payload.lists(Self::PAIR) {
            return Err(self.client.unavailable(Self::PAIR));
        }
        let product = self.client.normalized(fetched.payload.normalize())?;

        debug!(venue = Self::NAME, product_id = product.id, "Product normalized");

        self.client.rate(
            Self::PAIR,
            product.last_traded_price,
            product.volume_24h,
            fetched.received_at,
        )
    }
}
