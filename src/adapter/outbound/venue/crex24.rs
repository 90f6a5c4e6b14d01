//! CREX24 v2 tickers. The response is a bare array of instruments.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::client::VenueClient;
use super::normalize::rfc3339;
use crate::domain::pair::CurrencyPair;
use crate::domain::rate::CanonicalRate;
use crate::error::FetchError;
use crate::port::outbound::rate::RateSource;
use crate::port::outbound::transport::HttpTransport;

const BASE_URL: &str = "https://api.crex24.com/v2/public";
const TICKER_PATH: &str = "/tickers?instrument=DASH-BTC";
const INSTRUMENT: &str = "DASH-BTC";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentTicker {
    pub instrument: String,
    pub last: f64,
    pub percent_change: f64,
    pub low: f64,
    pub high: f64,
    pub base_volume: f64,
    pub quote_volume: f64,
    pub volume_in_btc: f64,
    pub volume_in_usd: f64,
    pub ask: f64,
    pub bid: f64,
    pub timestamp: String,
}

pub struct Crex24Source {
    client: VenueClient,
}

impl Crex24Source {
    pub const NAME: &'static str = "CREX24";
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
impl RateSource for Crex24Source {
    fn display_name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        let fetched = self.client.get_json::<Vec<InstrumentTicker>>(TICKER_PATH).await?;
        let ticker = fetched
            .payload
            .iter()
            .find(|t| t.instrument.eq_ignore_ascii_case(INSTRUMENT))
            .ok_or_else(|| self.client.unavailable(Self::PAIR))?;
        let venue_time = self.client.normalized(rfc3339("timestamp", &ticker.timestamp))?;

        debug!(
            venue = Self::NAME,
            venue_time = %venue_time,
            volume_in_usd = ticker.volume_in_usd,
            "Ticker selected"
        );

        self.client
            .rate(Self::PAIR, ticker.last, ticker.base_volume, fetched.received_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NormalizeError;
    use crate::testkit::transport::FixtureTransport;

    const FIXTURE: &str = r#"[{
        "instrument": "DASH-BTC", "last": 0.010231, "percentChange": -1.04, "low": 0.0101,
        "high": 0.0104, "baseVolume": 17.28, "quoteVolume": 0.1766, "volumeInBtc": 0.1766,
        "volumeInUsd": 1321.4, "ask": 0.01029, "bid": 0.01018, "timestamp": "2019-11-20T21:56:51Z"
    }]"#;

    async fn fetch(body: &str) -> Result<CanonicalRate, FetchError> {
        Crex24Source::new(Arc::new(FixtureTransport::serving(body)))
            .fetch_rate()
            .await
    }

    #[tokio::test]
    async fn selects_instrument_from_array() {
        let rate = fetch(FIXTURE).await.unwrap();
        assert_eq!(rate.last_price(), 0.010231);
        assert_eq!(rate.base_asset_volume(), 17.28);
    }

    #[tokio::test]
    async fn empty_array_is_pair_unavailable() {
        assert!(fetch("[]").await.unwrap_err().is_pair_unavailable());
    }

    #[tokio::test]
    async fn bad_timestamp_fails_fetch() {
        let body = FIXTURE.replace("2019-11-20T21:56:51Z", "yesterday");
        assert!(matches!(
            fetch(&body).await,
            Err(FetchError::Normalize {
                source: NormalizeError::InvalidTimestamp { .. },
                ..
            })
        ));
    }
}
