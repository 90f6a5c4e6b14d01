//! HTTP transport factory.

use std::sync::Arc;

use crate::adapter::outbound::http::client::ReqwestTransport;
use crate::adapter::outbound::http::settings::HttpConfig;
use crate::error::Result;
use crate::port::outbound::transport::HttpTransport;

/// Build the shared production transport.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn build_transport(config: &HttpConfig) -> Result<Arc<dyn HttpTransport>> {
    Ok(Arc::new(ReqwestTransport::from_config(config)?))
}
