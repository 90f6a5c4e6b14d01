//! Cointrade public ticker.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use super::client::VenueClient;
use super::normalize::decimal;
use crate::domain::pair::CurrencyPair;
use crate::domain::rate::CanonicalRate;
use crate::error::{FetchError, NormalizeError};
use crate::port::outbound::rate::RateSource;
use crate::port::outbound::transport::HttpTransport;

const BASE_URL: &str = "https://api.cointradecx.com";
const TICKER_PATH: &str = "/public/ticker?market=DASH_BTC";

/// The envelope keys arrive in either case.
#[derive(Debug, Deserialize)]
pub struct TickerResponse {
    #[serde(alias = "Success")]
    pub success: bool,
    #[serde(alias = "Message", default)]
    pub message: String,
    #[serde(alias = "Result", default)]
    pub result: Vec<MarketTicker>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketTicker {
    pub timestamp: i64,
    pub market: String,
    pub ask: String,
    pub bid: String,
    pub last: String,
    pub spread: String,
    pub low24h: String,
    pub high24h: String,
    pub vol24h: String,
    pub quote_volume: String,
    pub is_frozen: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    pub timestamp: i64,
    pub market: String,
    pub ask: f64,
    pub bid: f64,
    pub last: f64,
    pub spread: f64,
    pub low_24h: f64,
    pub high_24h: f64,
    pub vol_24h: f64,
    pub quote_volume: f64,
    pub frozen: bool,
}

impl MarketTicker {
    pub fn normalize(&self) -> Result<Ticker, NormalizeError> {
        Ok(Ticker {
            timestamp: self.timestamp,
            market: self.market.clone(),
            ask: decimal("ask", &self.ask)?,
            bid: decimal("bid", &self.bid)?,
            last: decimal("last", &self.last)?,
            spread: decimal("spread", &self.spread)?,
            low_24h: decimal("low24h", &self.low24h)?,
            high_24h: decimal("high24h", &self.high24h)?,
            vol_24h: decimal("vol24h", &self.vol24h)?,
            quote_volume: decimal("quoteVolume", &self.quote_volume)?,
            frozen: self.is_frozen != 0,
        })
    }
}

pub struct CointradeSource {
    client: VenueClient,
}

impl CointradeSource {
    pub const NAME: &'static str = "Cointrade";
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
impl RateSource for CointradeSource {
    fn display_name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        let fetched = self.client.get_json::<TickerResponse>(TICKER_PATH).await?;
        let response = fetched.payload;

        if !response.success {
            return Err(self.client.rejected(response.message));
        }
        let entry = response
            .result
            .first()
            .ok_or_else(|| self.client.unavailable(Self::PAIR))?;
        let ticker = self.client.normalized(entry.normalize())?;

        if ticker.frozen {
            warn!(venue = Self::NAME, market = %ticker.market, "Market is frozen");
        }
        debug!(venue = Self::NAME, venue_time = ticker.timestamp, spread = ticker.spread, "Ticker normalized");

        self.client
            .rate(Self::PAIR, ticker.last, ticker.vol_24h, fetched.received_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::transport::FixtureTransport;

    const FIXTURE: &str = r#"{
        "Success": true, "Message": "",
        "Result": [{
            "timestamp": 1574286574, "market": "DASH_BTC", "ask": "0.01030", "bid": "0.01012",
            "last": "0.01021", "spread": "0.00018", "low24h": "0.01001", "high24h": "0.01044",
            "vol24h": "52.1", "quoteVolume": "0.532", "isFrozen": 0
        }]
    }"#;

    async fn fetch(body: &str) -> Result<CanonicalRate, FetchError> {
        CointradeSource::new(Arc::new(FixtureTransport::serving(body)))
            .fetch_rate()
            .await
    }

    #[test]
    fn nonzero_flag_means_frozen() {
        let response: TickerResponse =
            serde_json::from_str(&FIXTURE.replace(r#""isFrozen": 0"#, r#""isFrozen": 1"#)).unwrap();
        assert!(response.result[0].normalize().unwrap().frozen);

        let response: TickerResponse = serde_json::from_str(FIXTURE).unwrap();
        assert!(!response.result[0].normalize().unwrap().frozen);
    }

    #[tokio::test]
    async fn normalizes_first_entry() {
        let rate = fetch(FIXTURE).await.unwrap();
        assert_eq!(rate.last_price(), 0.01021);
        assert_eq!(rate.base_asset_volume(), 52.1);
    }

    #[tokio::test]
    async fn lowercase_envelope_keys_decode() {
        let body = FIXTURE
            .replace(r#""Success""#, r#""success""#)
            .replace(r#""Message""#, r#""message""#)
            .replace(r#""Result""#, r#""result""#);
        assert!(fetch(&body).await.is_ok());
    }

    #[tokio::test]
    async fn empty_result_is_pair_unavailable() {
        let err = fetch(r#"{"Success": true, "Message": "", "Result": []}"#).await.unwrap_err();
        assert!(err.is_pair_unavailable());
    }

    #[tokio::test]
    async fn unsuccessful_envelope_is_rejected() {
        let err = fetch(r#"{"Success": false, "Message": "Market not found", "Result": []}"#)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "rejected");
    }
}
