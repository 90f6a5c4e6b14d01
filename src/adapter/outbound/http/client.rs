//! `reqwest`-backed [`HttpTransport`].

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client as HttpClient;
use tracing::debug;
use url::Url;

use super::settings::HttpConfig;
use crate::error::{Result, TransportError};
use crate::port::outbound::transport::{HttpTransport, RawResponse};

/// Production transport: one pooled `reqwest::Client` shared by all adapters.
///
/// Dropping an in-flight `get` future cancels the request and returns its
/// connection to the pool (or closes it); adapters never manage connections.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: HttpClient,
}

impl ReqwestTransport {
    /// Wrap an already configured client.
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Build a client with the configured timeouts and user agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn from_config(config: &HttpConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { http })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> std::result::Result<RawResponse, TransportError> {
        let target = Url::parse(url).map_err(|source| TransportError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        let host = target.host_str().unwrap_or_default().to_string();

        let response = self
            .http
            .get(target)
            .send()
            .await
            .map_err(|source| TransportError::Request {
                url: url.to_string(),
                source,
            })?;
        let received_at = Utc::now();

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| TransportError::Request {
                url: url.to_string(),
                source,
            })?;

        debug!(host = %host, status = status.as_u16(), bytes = body.len(), "Response received");

        Ok(RawResponse::new(body.to_vec(), received_at))
    }
}
