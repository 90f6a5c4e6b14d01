//! Coinbase Pro product ticker.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use super::client::VenueClient;
use super::normalize::{decimal, rfc3339};
use crate::domain::pair::CurrencyPair;
use crate::domain::rate::CanonicalRate;
use crate::error::{FetchError, NormalizeError};
use crate::port::outbound::rate::RateSource;
use crate::port::outbound::transport::HttpTransport;

const BASE_URL: &str = "https://api.pro.coinbase.com";
const TICKER_PATH: &str = "/products/DASH-USD/ticker";

#[derive(Debug, Deserialize)]
pub struct TickerResponse {
    pub trade_id: i64,
    pub price: String,
    pub size: String,
    pub time: String,
    pub bid: String,
    pub ask: String,
    pub volume: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    pub trade_id: i64,
    pub price: f64,
    pub size: f64,
    pub time: DateTime<Utc>,
    pub bid: f64,
    pub ask: f64,
    pub volume: f64,
}

impl TickerResponse {
    pub fn normalize(&self) -> Result<Ticker, NormalizeError> {
        Ok(Ticker {
            trade_id: self.trade_id,
            price: decimal("price", &self.price)?,
            size: decimal("size", &self.size)?,
            time: rfc3339("time", &self.time)?,
            bid: decimal("bid", &self.bid)?,
            ask: decimal("ask", &self.ask)?,
            volume: decimal("volume", &self.volume)?,
        })
    }
}

pub struct CoinbaseProSource {
    client: VenueClient,
}

impl CoinbaseProSource {
    pub const NAME: &'static str = "Coinbase Pro";
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
impl RateSource for CoinbaseProSource {
    fn display_name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        let fetched = self.client.get_json::<TickerResponse>(TICKER_PATH).await?;
        let ticker = self.client.normalized(fetched.payload.normalize())?;

        debug!(venue = Self::NAME, trade_id = ticker.trade_id, venue_time = %ticker.time, "Ticker normalized");

        self.client
            .rate(Self::PAIR, ticker.price, ticker.volume, fetched.received_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::transport::FixtureTransport;

    const FIXTURE: &str = r#"{
        "trade_id": 2618215, "price": "71.96000000", "size": "1.04212813",
        "time": "2019-11-20T21:56:51.547Z", "bid": "71.94", "ask": "71.99", "volume": "3412.81263722"
    }"#;

    async fn fetch(body: &str) -> Result<CanonicalRate, FetchError> {
        CoinbaseProSource::new(Arc::new(FixtureTransport::serving(body)))
            .fetch_rate()
            .await
    }

    #[tokio::test]
    async fn normalizes_ticker() {
        let rate = fetch(FIXTURE).await.unwrap();
        assert_eq!(rate.last_price(), 71.96);
        assert_eq!(rate.base_asset_volume(), 3412.812_637_22);
    }

    #[tokio::test]
    async fn non_rfc3339_time_fails_fetch() {
        let body = FIXTURE.replace("2019-11-20T21:56:51.547Z", "20/11/2019");
        assert!(matches!(
            fetch(&body).await,
            Err(FetchError::Normalize {
                venue: "Coinbase Pro",
                source: NormalizeError::InvalidTimestamp { field: "time", .. }
            })
        ));
    }
}
