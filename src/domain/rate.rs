//! The canonical, venue-independent rate record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::pair::CurrencyPair;

/// Normalized spot rate produced by exactly one successful venue fetch.
///
/// Fields are private so a rate cannot change after construction. The record
/// carries no venue identity; the adapter that produced it owns the name.
///
/// `fetch_time` is the moment the caller received the venue's response. It is
/// never a timestamp taken from the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RateRecord")]
pub struct CanonicalRate {
    base_currency: String,
    quote_currency: String,
    last_price: f64,
    base_asset_volume: f64,
    fetch_time: DateTime<Utc>,
}

impl CanonicalRate {
    /// Build a rate, validating price and volume.
    ///
    /// A `base_asset_volume` of `0.0` means the venue does not report volume.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPrice`] or [`DomainError::InvalidVolume`]
    /// when either value is NaN, infinite or negative.
    pub fn try_new(
        pair: CurrencyPair,
        last_price: f64,
        base_asset_volume: f64,
        fetch_time: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        Self::validated(
            pair.base().to_string(),
            pair.quote().to_string(),
            last_price,
            base_asset_volume,
            fetch_time,
        )
    }

    fn validated(
        base_currency: String,
        quote_currency: String,
        last_price: f64,
        base_asset_volume: f64,
        fetch_time: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if base_currency.trim().is_empty() || quote_currency.trim().is_empty() {
            return Err(DomainError::EmptyCurrency);
        }
        if !last_price.is_finite() || last_price < 0.0 {
            return Err(DomainError::InvalidPrice { price: last_price });
        }
        if !base_asset_volume.is_finite() || base_asset_volume < 0.0 {
            return Err(DomainError::InvalidVolume {
                volume: base_asset_volume,
            });
        }

        Ok(Self {
            base_currency,
            quote_currency,
            last_price,
            base_asset_volume,
            fetch_time,
        })
    }

    /// Ticker of the asset being priced.
    #[must_use]
    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    /// Ticker of the currency the price is denominated in.
    #[must_use]
    pub fn quote_currency(&self) -> &str {
        &self.quote_currency
    }

    /// Last traded price of one unit of base, in quote currency.
    #[must_use]
    pub const fn last_price(&self) -> f64 {
        self.last_price
    }

    /// Volume in base currency over the venue's reporting window.
    #[must_use]
    pub const fn base_asset_volume(&self) -> f64 {
        self.base_asset_volume
    }

    /// Whether the venue reported a volume at all.
    #[must_use]
    pub fn has_volume(&self) -> bool {
        self.base_asset_volume > 0.0
    }

    /// Client-side time the venue response was received.
    #[must_use]
    pub const fn fetch_time(&self) -> DateTime<Utc> {
        self.fetch_time
    }

    /// `BASE/QUOTE` label.
    #[must_use]
    pub fn pair_label(&self) -> String {
        format!("{}/{}", self.base_currency, self.quote_currency)
    }
}

/// Wire shape used when deserializing a [`CanonicalRate`]; re-validated on the
/// way in.
#[derive(Deserialize)]
struct RateRecord {
    base_currency: String,
    quote_currency: String,
    last_price: f64,
    base_asset_volume: f64,
    fetch_time: DateTime<Utc>,
}

impl TryFrom<RateRecord> for CanonicalRate {
    type Error = DomainError;

    fn try_from(record: RateRecord) -> Result<Self, Self::Error> {
        Self::validated(
            record.base_currency,
            record.quote_currency,
            record.last_price,
            record.base_asset_volume,
            record.fetch_time,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2019, 8, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn try_new_keeps_values() {
        let rate = CanonicalRate::try_new(CurrencyPair::DASH_BTC, 0.0123, 4567.5, at()).unwrap();

        assert_eq!(rate.base_currency(), "DASH");
        assert_eq!(rate.quote_currency(), "BTC");
        assert_eq!(rate.last_price(), 0.0123);
        assert_eq!(rate.base_asset_volume(), 4567.5);
        assert_eq!(rate.fetch_time(), at());
        assert_eq!(rate.pair_label(), "DASH/BTC");
        assert!(rate.has_volume());
    }

    #[test]
    fn zero_volume_means_not_reported() {
        let rate = CanonicalRate::try_new(CurrencyPair::DASH_USD, 95.1, 0.0, at()).unwrap();
        assert!(!rate.has_volume());
    }

    #[test]
    fn try_new_rejects_negative_price() {
        let result = CanonicalRate::try_new(CurrencyPair::DASH_USD, -0.5, 0.0, at());
        assert_eq!(result, Err(DomainError::InvalidPrice { price: -0.5 }));
    }

    #[test]
    fn try_new_rejects_non_finite_values() {
        assert!(matches!(
            CanonicalRate::try_new(CurrencyPair::DASH_USD, f64::NAN, 0.0, at()),
            Err(DomainError::InvalidPrice { .. })
        ));
        assert!(matches!(
            CanonicalRate::try_new(CurrencyPair::DASH_USD, f64::INFINITY, 0.0, at()),
            Err(DomainError::InvalidPrice { .. })
        ));
        assert!(matches!(
            CanonicalRate::try_new(CurrencyPair::DASH_USD, 1.0, f64::NEG_INFINITY, at()),
            Err(DomainError::InvalidVolume { .. })
        ));
    }

    #[test]
    fn serializes_with_snake_case_fields() {
        let rate = CanonicalRate::try_new(CurrencyPair::DASH_USD, 95.25, 10.0, at()).unwrap();
        let json = serde_json::to_value(&rate).unwrap();

        assert_eq!(json["base_currency"], "DASH");
        assert_eq!(json["quote_currency"], "USD");
        assert_eq!(json["last_price"], 95.25);
        assert_eq!(json["base_asset_volume"], 10.0);
        assert_eq!(json["fetch_time"], "2019-08-15T12:00:00Z");
    }

    #[test]
    fn deserialize_revalidates() {
        let json = r#"{
            "base_currency": "DASH",
            "quote_currency": "BTC",
            "last_price": -1.0,
            "base_asset_volume": 0.0,
            "fetch_time": "2019-08-15T12:00:00Z"
        }"#;
        assert!(serde_json::from_str::<CanonicalRate>(json).is_err());

        let json = r#"{
            "base_currency": "",
            "quote_currency": "BTC",
            "last_price": 1.0,
            "base_asset_volume": 0.0,
            "fetch_time": "2019-08-15T12:00:00Z"
        }"#;
        assert!(serde_json::from_str::<CanonicalRate>(json).is_err());
    }

    #[test]
    fn deserialize_accepts_serialized_rate() {
        let rate = CanonicalRate::try_new(CurrencyPair::DASH_BTC, 0.01, 3.0, at()).unwrap();
        let json = serde_json::to_string(&rate).unwrap();
        let back: CanonicalRate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rate);
    }
}
