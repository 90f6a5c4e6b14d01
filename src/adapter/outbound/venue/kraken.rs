//! Kraken public ticker.
//!
//! Kraken packs each statistic into a short positional array, e.g.
//! `"c": ["<price>", "<lot volume>"]` and `"v": ["<today>", "<last 24h>"]`.
//! Array lengths are checked before any element is read.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::client::VenueClient;
use super::normalize::{decimal, fixed};
use crate::domain::pair::CurrencyPair;
use crate::domain::rate::CanonicalRate;
use crate::error::{FetchError, NormalizeError};
use crate::port::outbound::rate::RateSource;
use crate::port::outbound::transport::HttpTransport;

const BASE_URL: &str = "https://api.kraken.com";
const TICKER_PATH: &str = "/0/public/Ticker?pair=DASHUSD";
const PAIR_KEY: &str = "DASHUSD";

#[derive(Debug, Deserialize)]
pub struct TickerResponse {
    #[serde(default)]
    pub error: Vec<String>,
    /// Keyed by pair; entries are decoded only once selected.
    #[serde(default)]
    pub result: HashMap<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct PairTicker {
    /// Ask `[price, whole lot volume, lot volume]`.
    pub a: Vec<String>,
    /// Bid `[price, whole lot volume, lot volume]`.
    pub b: Vec<String>,
    /// Last trade closed `[price, lot volume]`.
    pub c: Vec<String>,
    /// Volume `[today, last 24 hours]`.
    pub v: Vec<String>,
    /// VWAP `[today, last 24 hours]`.
    pub p: Vec<String>,
    /// Trade count `[today, last 24 hours]`.
    pub t: Vec<i64>,
    /// Low `[today, last 24 hours]`.
    pub l: Vec<String>,
    /// High `[today, last 24 hours]`.
    pub h: Vec<String>,
    /// Today's opening price.
    pub o: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookTop {
    pub price: f64,
    pub whole_lot_volume: f64,
    pub lot_volume: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LastTrade {
    pub price: f64,
    pub lot_volume: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Daily<T> {
    pub today: T,
    pub last_24h: T,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    pub ask: BookTop,
    pub bid: BookTop,
    pub last_trade: LastTrade,
    pub volume: Daily<f64>,
    pub vwap: Daily<f64>,
    pub trades: Daily<i64>,
    pub low: Daily<f64>,
    pub high: Daily<f64>,
    pub open: f64,
}

fn book_top(field: &'static str, values: &[String]) -> Result<BookTop, NormalizeError> {
    let [price, whole_lot_volume, lot_volume] = fixed::<_, 3>(field, values)?;
    Ok(BookTop {
        price: decimal(field, price)?,
        whole_lot_volume: decimal(field, whole_lot_volume)?,
        lot_volume: decimal(field, lot_volume)?,
    })
}

fn daily(field: &'static str, values: &[String]) -> Result<Daily<f64>, NormalizeError> {
    let [today, last_24h] = fixed::<_, 2>(field, values)?;
    Ok(Daily {
        today: decimal(field, today)?,
        last_24h: decimal(field, last_24h)?,
    })
}

impl PairTicker {
    pub fn normalize(&self) -> Result<Ticker, NormalizeError> {
        let [last_price, last_lot] = fixed::<_, 2>("c", &self.c)?;
        let [trades_today, trades_24h] = fixed::<_, 2>("t", &self.t)?;
        Ok(Ticker {
            ask: book_top("a", &self.a)?,
            bid: book_top("b", &self.b)?,
            last_trade: LastTrade {
                price: decimal("c", last_price)?,
                lot_volume: decimal("c", last_lot)?,
            },
            volume: daily("v", &self.v)?,
            vwap: daily("p", &self.p)?,
            trades: Daily {
                today: *trades_today,
                last_24h: *trades_24h,
            },
            low: daily("l", &self.l)?,
            high: daily("h", &self.h)?,
            open: decimal("o", &self.o)?,
        })
    }
}

pub struct KrakenSource {
    client: VenueClient,
}

impl KrakenSource {
    pub const NAME: &'static str = "Kraken";
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
impl RateSource for KrakenSource {
    fn display_name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError> {
        let fetched = self.client.get_json::<TickerResponse>(TICKER_PATH).await?;
        let mut response = fetched.payload;

        if !response.error.is_empty() && !response.result.contains_key(PAIR_KEY) {
            return Err(self.client.rejected(response.error.join("; ")));
        }
        let entry: PairTicker = self
            .client
            .select(&mut response.result, PAIR_KEY, Self::PAIR)?;
        let ticker = self.client.normalized(entry.normalize())?;

        debug!(
            venue = Self::NAME,
            trades_today = ticker.trades.today,
            vwap_today = ticker.vwap.today,
            "Ticker normalized"
        );

        self.client.rate(
            Self::PAIR,
            ticker.last_trade.price,
            ticker.volume.today,
            fetched.received_at,
        )
    }
}
