//! Rate source port.
//!
//! Every venue integration is a variant of this one capability set. The
//! aggregator only ever sees `dyn RateSource`.

use async_trait::async_trait;

use crate::domain::rate::CanonicalRate;
use crate::error::FetchError;

/// A venue that can report the current spot rate of its fixed pair.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Constant, human-readable venue label.
    fn display_name(&self) -> &'static str;

    /// Perform one request/response cycle and normalize the result.
    ///
    /// Either the whole [`CanonicalRate`] is produced or an error is returned;
    /// there is no partially populated record. Implementations never retry.
    async fn fetch_rate(&self) -> Result<CanonicalRate, FetchError>;
}
