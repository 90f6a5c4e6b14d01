//! Bitbns ticker map. One response lists every market, keyed by symbol.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::client::VenueClient;
use crate::domain::pair::CurrencyPair;
use crate::domain::rate::CanonicalRate;
use crate::error::FetchError;
use crate::port::outbound::rate::RateSource;
use crate::port::outbound::transport::HttpTransport;

const BASE_URL: &str = "https://bitbns.com";
const TICKER_PATH: &str = "/order/getTickerWithVolume/";
const MARKET_KEY: &str = "DASHUSDT";

/// One market entry. Prices are JSON numbers; the volume object is not used.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketTicker {
    pub highest_buy_bid: f64,
    pub lowest_sell_bid: f64,
    pub last_traded_price: f64,
    #[serde(default)]
    pub yes_price: Option<f64>,
}

/// Every market, left undecoded until the DASH entry is selected.
pub type TickerMap = HashMap<String, Value>;

pub struct BitbnsSource {
    client: VenueClient,
}

impl BitbnsSource {
    pub const NAME: &'static str = "Bitbns";
    pub const PAIR: CurrencyPair = CurrencyPair::DASH_USDT;

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
impl RateSource for BitbnsSource {
    fn display_name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        let mut fetched = self.client.get_json::<TickerMap>(TICKER_PATH).await?;
        let ticker: MarketTicker = self
            .client
            .select(&mut fetched.payload, MARKET_KEY, Self::PAIR)?;

        debug!(
            venue = Self::NAME,
            bid = ticker.highest_buy_bid,
            ask = ticker.lowest_sell_bid,
            "Ticker selected"
        );

        self.client
            .rate(Self::PAIR, ticker.last_traded_price, 0.0, fetched.received_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::transport::FixtureTransport;

    const FIXTURE: &str = r#"{
        "BTCUSDT": {"highest_buy_bid": 7480.1, "lowest_sell_bid": 7502.0, "last_traded_price": 7490.0, "yes_price": 7489.2, "volume": {"max": 7600, "min": 7400, "volume": 3.1}},
        "DASHUSDT": {"highest_buy_bid": 72.01, "lowest_sell_bid": 73.4, "last_traded_price": 72.55, "yes_price": 72.6, "volume": {"max": 74, "min": 70, "volume": 88.2}}
    }"#;

    async fn fetch(body: &str) -> Result<CanonicalRate, FetchError> {
        BitbnsSource::new(Arc::new(FixtureTransport::serving(body)))
            .fetch_rate()
            .await
    }

    #[tokio::test]
    async fn selects_dash_usdt_entry() {
        let rate = fetch(FIXTURE).await.unwrap();
        assert_eq!(rate.pair_label(), "DASH/USDT");
        assert_eq!(rate.last_price(), 72.55);
        assert_eq!(rate.base_asset_volume(), 0.0);
    }

    #[tokio::test]
    async fn null_prices_in_another_market_do_not_fail_dash() {
        let body = FIXTURE.replacen(
            '{',
            r#"{"NEWCOIN": {"highest_buy_bid": null, "lowest_sell_bid": null, "last_traded_price": null},"#,
            1,
        );
        let rate = fetch(&body).await.unwrap();
        assert_eq!(rate.last_price(), 72.55);
    }

    #[tokio::test]
    async fn missing_market_key_is_pair_unavailable() {
        let err = fetch(r#"{"BTCUSDT": {"highest_buy_bid": 1.0, "lowest_sell_bid": 2.0, "last_traded_price": 1.5}}"#)
            .await
            .unwrap_err();
        assert!(
            matches!(err, FetchError::PairUnavailable { venue: "Bitbns", pair } if pair == CurrencyPair::DASH_USDT),
            "{err:?}"
        );
    }
}
