//! Rate aggregator factory.

use std::sync::Arc;

use tracing::info;

use super::source::{build_sources, select_sources};
use crate::application::aggregator::RateAggregator;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::transport::HttpTransport;

/// Build the aggregator over the selected venues.
///
/// # Errors
///
/// Returns an error if a requested source name is unknown.
pub fn build_aggregator(
    config: &Config,
    transport: &Arc<dyn HttpTransport>,
    requested: &[String],
) -> Result<RateAggregator> {
    let specs = select_sources(&config.sources, requested)?;
    let sources = build_sources(&specs, transport);

    info!(
        sources = sources.len(),
        mode = %config.aggregator.mode,
        "Aggregator configured"
    );

    Ok(RateAggregator::new(sources)
        .with_mode(config.aggregator.mode)
        .with_source_timeout(config.aggregator.source_timeout()))
}
