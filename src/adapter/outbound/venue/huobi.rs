//! Huobi market data.
//!
//! Huobi has no single ticker with both a last trade and a volume, so one
//! fetch makes two requests: the latest trade for the price, then the merged
//! 24h detail for the volume. The rate is stamped with the first response.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use super::client::VenueClient;
use super::normalize::{epoch_millis, fixed};
use crate::domain::pair::CurrencyPair;
use crate::domain::rate::CanonicalRate;
use crate::error::{FetchError, NormalizeError};
use crate::port::outbound::rate::RateSource;
use crate::port::outbound::transport::HttpTransport;

const BASE_URL: &str = "https://api.huobi.pro";
const LAST_TRADE_PATH: &str = "/market/trade?symbol=dashbtc";
const MARKET_DETAIL_PATH: &str = "/market/detail/merged?symbol=dashbtc";
const STATUS_OK: &str = "ok";

/// Shared envelope of both endpoints.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    #[serde(default)]
    pub ch: String,
    /// Millisecond epoch.
    #[serde(default)]
    pub ts: Option<i64>,
    #[serde(rename = "err-code", default)]
    pub err_code: Option<String>,
    #[serde(rename = "err-msg", default)]
    pub err_msg: Option<String>,
    /// Absent on error responses.
    pub tick: Option<T>,
}

#[derive(Debug, Deserialize)]
pub struct TradeTick {
    pub ts: i64,
    #[serde(default)]
    pub data: Vec<Trade>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Trade {
    pub amount: f64,
    pub ts: i64,
    pub price: f64,
    pub direction: String,
}

#[derive(Debug, Deserialize)]
pub struct DetailTick {
    pub id: i64,
    pub close: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    /// Base-denominated 24h volume.
    pub amount: f64,
    pub count: i64,
    pub version: i64,
    /// Quote-denominated 24h volume.
    pub vol: f64,
    /// `[price, size]`.
    pub ask: Vec<f64>,
    /// `[price, size]`.
    pub bid: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarketDetail {
    pub close: f64,
    pub base_volume: f64,
    pub quote_volume: f64,
    pub ask_price: f64,
    pub bid_price: f64,
    pub trade_count: i64,
}

impl DetailTick {
    pub fn normalize(&self) -> Result<MarketDetail, NormalizeError> {
        let [ask_price, _] = fixed::<_, 2>("tick.ask", &self.ask)?;
        let [bid_price, _] = fixed::<_, 2>("tick.bid", &self.bid)?;
        Ok(MarketDetail {
            close: self.close,
            base_volume: self.amount,
            quote_volume: self.vol,
            ask_price: *ask_price,
            bid_price: *bid_price,
            trade_count: self.count,
        })
    }
}

pub struct HuobiSource {
    client: VenueClient,
}

impl HuobiSource {
    pub const NAME: &'static str = "Huobi";
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

    fn accepted<T>(&self, envelope: Envelope<T>) -> Result<T, FetchError> {
        if envelope.status != STATUS_OK {
            let code = envelope.err_code.unwrap_or_else(|| envelope.status.clone());
            let message = envelope.err_msg.unwrap_or_default();
            return Err(self.client.rejected(format!("{code}: {message}")));
        }
        envelope.tick.ok_or_else(|| self.client.unavailable(Self::PAIR))
    }

    async fn last_trade(&self) -> Result<(Trade, DateTime<Utc>), FetchError> {
        let fetched = self.client.get_json::<Envelope<TradeTick>>(LAST_TRADE_PATH).await?;
        let tick = self.accepted(fetched.payload)?;
        let trade = tick
            .data
            .into_iter()
            .next()
            .ok_or_else(|| self.client.unavailable(Self::PAIR))?;
        Ok((trade, fetched.received_at))
    }

    async fn market_detail(&self) -> Result<MarketDetail, FetchError> {
        let fetched = self
            .client
            .get_json::<Envelope<DetailTick>>(MARKET_DETAIL_PATH)
            .await?;
        let tick = self.accepted(fetched.payload)?;
        self.client.normalized(tick.normalize())
    }
}

#[async_trait]
impl RateSource for HuobiSource {
    fn display_name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        let (trade, received_at) = self.last_trade().await?;
        let trade_time = self.client.normalized(epoch_millis("tick.data.ts", trade.ts))?;
        let detail = self.market_detail().await?;

        debug!(
            venue = Self::NAME,
            trade_time = %trade_time,
            direction = %trade.direction,
            ask = detail.ask_price,
            bid = detail.bid_price,
            "Trade and detail normalized"
        );

        self.client
            .rate(Self::PAIR, trade.price, detail.base_volume, received_at)
    }
}
