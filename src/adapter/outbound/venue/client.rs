//! Request plumbing shared by every venue adapter.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::domain::pair::CurrencyPair;
use crate::domain::rate::CanonicalRate;
use crate::error::{FetchError, NormalizeError};
use crate::port::outbound::transport::HttpTransport;

/// A decoded payload and the time its response arrived.
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub payload: T,
    pub received_at: DateTime<Utc>,
}

/// One venue's base URL and transport, with errors tagged by venue name.
#[derive(Clone)]
pub struct VenueClient {
    venue: &'static str,
    base_url: String,
    transport: Arc<dyn HttpTransport>,
}

impl VenueClient {
    #[must_use]
    pub fn new(
        venue: &'static str,
        base_url: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            venue,
            base_url: base_url.into(),
            transport,
        }
    }

    #[must_use]
    pub const fn venue(&self) -> &'static str {
        self.venue
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL for an endpoint path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and decode the body as `T`.
    ///
    /// # Errors
    ///
    /// [`FetchError::Transport`] when no body arrives, [`FetchError::Decode`]
    /// when it does not match `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<Fetched<T>, FetchError> {
        let url = self.url(path);
        debug!(venue = self.venue, url = %url, "Requesting ticker");

        let response = self
            .transport
            .get(&url)
            .await
            .map_err(|source| FetchError::Transport {
                venue: self.venue,
                source,
            })?;

        let payload = serde_json::from_slice(&response.body).map_err(|source| FetchError::Decode {
            venue: self.venue,
            source,
        })?;

        Ok(Fetched {
            payload,
            received_at: response.received_at,
        })
    }

    /// Decode one already-parsed JSON value as `T`.
    ///
    /// # Errors
    ///
    /// [`FetchError::Decode`] when the value does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self, value: Value) -> Result<T, FetchError> {
        serde_json::from_value(value).map_err(|source| FetchError::Decode {
            venue: self.venue,
            source,
        })
    }

    /// Take the `key` entry out of a keyed market map and decode only that
    /// entry. Other markets are never decoded.
    ///
    /// # Errors
    ///
    /// [`FetchError::PairUnavailable`] when `key` is absent,
    /// [`FetchError::Decode`] when the entry does not match `T`.
    pub fn select<T: DeserializeOwned>(
        &self,
        markets: &mut HashMap<String, Value>,
        key: &str,
        pair: CurrencyPair,
    ) -> Result<T, FetchError> {
        let entry = markets.remove(key).ok_or_else(|| self.unavailable(pair))?;
        self.decode(entry)
    }

    /// Tag a normalization result with this venue.
    pub fn normalized<T>(&self, result: Result<T, NormalizeError>) -> Result<T, FetchError> {
        result.map_err(|source| FetchError::Normalize {
            venue: self.venue,
            source,
        })
    }

    #[must_use]
    pub const fn unavailable(&self, pair: CurrencyPair) -> FetchError {
        FetchError::PairUnavailable {
            venue: self.venue,
            pair,
        }
    }

    #[must_use]
    pub fn rejected(&self, message: impl Into<String>) -> FetchError {
        FetchError::Rejected {
            venue: self.venue,
            message: message.into(),
        }
    }

    /// Build the canonical rate for `pair`.
    ///
    /// # Errors
    ///
    /// [`FetchError::Normalize`] when the price or volume is not a valid rate.
    pub fn rate(
        &self,
        pair: CurrencyPair,
        last_price: f64,
        base_asset_volume: f64,
        fetch_time: DateTime<Utc>,
    ) -> Result<CanonicalRate, FetchError> {
        self.normalized(
            CanonicalRate::try_new(pair, last_price, base_asset_volume, fetch_time)
                .map_err(NormalizeError::from),
        )
    }
}

impl std::fmt::Debug for VenueClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VenueClient")
            .field("venue", &self.venue)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;
    use crate::error::TransportError;
    use crate::testkit::transport::FixtureTransport;

    #[derive(Debug, Deserialize)]
    struct Price {
        price: String,
    }

    fn client(transport: FixtureTransport) -> VenueClient {
        VenueClient::new("Fixture", "https://fixture.test", Arc::new(transport))
    }

    #[test]
    fn url_concatenates_base_and_path() {
        let client = client(FixtureTransport::new());
        assert_eq!(client.url("/ticker?pair=DASH"), "https://fixture.test/ticker?pair=DASH");
        assert_eq!(client.base_url(), "https://fixture.test");
    }

    #[tokio::test]
    async fn get_json_decodes_payload() {
        let transport = FixtureTransport::new().with_route("https://fixture.test/p", r#"{"price":"1.5"}"#);
        let fetched = client(transport).get_json::<Price>("/p").await.unwrap();
        assert_eq!(fetched.payload.price, "1.5");
    }

    #[tokio::test]
    async fn missing_route_is_transport_error() {
        let err = client(FixtureTransport::new())
            .get_json::<Price>("/p")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            FetchError::Transport {
                venue: "Fixture",
                source: TransportError::Unreachable { .. }
            }
        ));
    }

    #[tokio::test]
    async fn schema_mismatch_is_decode_error() {
        let transport = FixtureTransport::serving(r#"{"price": 1.5}"#);
        let err = client(transport).get_json::<Price>("/p").await.unwrap_err();
        assert!(matches!(err, FetchError::Decode { venue: "Fixture", .. }));
    }

    #[test]
    fn invalid_rate_is_normalize_error() {
        let client = client(FixtureTransport::new());
        let err = client
            .rate(CurrencyPair::DASH_USD, f64::NAN, 0.0, Utc::now())
            .unwrap_err();
        assert!(matches!(
            err,
            FetchError::Normalize {
                source: NormalizeError::InvalidRate(_),
                ..
            }
        ));
    }
}
