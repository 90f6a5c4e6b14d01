//! Bittrex v1.1 market summary.
//!
//! Bittrex labels its volumes from the quote side: the wire `Volume` is
//! denominated in DASH and the wire `BaseVolume` in BTC. The summary type
//! below names them by what they hold.

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

const BASE_URL: &str = "https://api.bittrex.com";
const SUMMARY_PATH: &str = "/api/v1.1/public/getmarketsummary?market=btc-dash";
const MARKET_NAME: &str = "BTC-DASH";

#[derive(Debug, Deserialize)]
pub struct SummaryResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub result: Option<Vec<MarketSummary>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarketSummary {
    #[serde(rename = "MarketName")]
    pub market_name: String,
    #[serde(rename = "High")]
    pub high: f64,
    #[serde(rename = "Low")]
    pub low: f64,
    /// Wire `Volume`: base-denominated.
    #[serde(rename = "Volume")]
    pub base_volume: f64,
    /// Wire `BaseVolume`: quote-denominated.
    #[serde(rename = "BaseVolume")]
    pub quote_volume: f64,
    #[serde(rename = "Last")]
    pub last: f64,
    #[serde(rename = "Bid")]
    pub bid: f64,
    #[serde(rename = "Ask")]
    pub ask: f64,
    #[serde(rename = "OpenBuyOrders")]
    pub open_buy_orders: i64,
    #[serde(rename = "OpenSellOrders")]
    pub open_sell_orders: i64,
    #[serde(rename = "PrevDay")]
    pub prev_day: f64,
}

pub struct BittrexSource {
    client: VenueClient,
}

impl BittrexSource {
    pub const NAME: &'static str = "Bittrex";
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
impl RateSource for BittrexSource {
    fn display_name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        let fetched = self.client.get_json::<SummaryResponse>(SUMMARY_PATH).await?;
        let response = fetched.payload;

        if !response.success {
            return Err(self.client.rejected(response.message));
        }
        let summary = response
            .result
            .unwrap_or_default()
            .into_iter()
            .find(|s| s.market_name.eq_ignore_ascii_case(MARKET_NAME))
            .ok_or_else(|| self.client.unavailable(Self::PAIR))?;

        debug!(
            venue = Self::NAME,
            quote_volume = summary.quote_volume,
            open_buy_orders = summary.open_buy_orders,
            open_sell_orders = summary.open_sell_orders,
            "Summary selected"
        );

        self.client
            .rate(Self::PAIR, summary.last, summary.base_volume, fetched.received_at)
    }
}
