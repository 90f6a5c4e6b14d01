//! In-memory [`HttpTransport`] serving canned response bodies.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::error::TransportError;
use crate::port::outbound::transport::{HttpTransport, RawResponse};

// ---------------------------------------------------------------------------
// FixtureTransport
// ---------------------------------------------------------------------------

/// Serves fixed bodies keyed by full URL, with an optional fallback body.
///
/// Every request is recorded so tests can assert which endpoint an adapter
/// hit. Unknown URLs without a fallback fail with
/// [`TransportError::Unreachable`]. `received_at` is the time of the call.
#[derive(Debug, Default)]
pub struct FixtureTransport {
    routes: HashMap<String, Vec<u8>>,
    statuses: HashMap<String, u16>,
    fallback: Option<Vec<u8>>,
    requests: Mutex<Vec<String>>,
}

impl FixtureTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for every URL.
    pub fn serving(body: impl Into<Vec<u8>>) -> Self {
        Self {
            fallback: Some(body.into()),
            ..Self::default()
        }
    }

    pub fn with_route(mut self, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.routes.insert(url.into(), body.into());
        self
    }

    /// Answer `url` with a non-success HTTP status.
    pub fn with_status(mut self, url: impl Into<String>, status: u16) -> Self {
        self.statuses.insert(url.into(), status);
        self
    }

    /// URLs requested so far, in call order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    pub fn request_count(&self) -> usize {
        self.requests().len()
    }
}

#[async_trait]
impl HttpTransport for FixtureTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }

        if let Some(&status) = self.statuses.get(url) {
            return Err(TransportError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = self
            .routes
            .get(url)
            .or(self.fallback.as_ref())
            .ok_or_else(|| TransportError::Unreachable {
                url: url.to_string(),
                reason: "no fixture registered".to_string(),
            })?;

        Ok(RawResponse::new(body.clone(), Utc::now()))
    }
}
