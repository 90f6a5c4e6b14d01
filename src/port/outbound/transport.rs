//! HTTP transport port.
//!
//! Venue adapters do not talk to the network directly. They hand a URL to an
//! [`HttpTransport`] and receive the body plus the time it arrived, which
//! keeps connection lifecycle out of the adapters and lets tests serve
//! fixture bodies.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::TransportError;

/// A response body as received from a venue.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Undecoded response body.
    pub body: Vec<u8>,
    /// Client-side time the response arrived, taken before the body was read.
    pub received_at: DateTime<Utc>,
}

impl RawResponse {
    /// Wrap a body received at `received_at`.
    #[must_use]
    pub fn new(body: impl Into<Vec<u8>>, received_at: DateTime<Utc>) -> Self {
        Self {
            body: body.into(),
            received_at,
        }
    }
}

/// Unauthenticated GET requests against public venue endpoints.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Fetch `url` and return its body.
    ///
    /// Non-success statuses are reported as [`TransportError::Status`].
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError>;
}
