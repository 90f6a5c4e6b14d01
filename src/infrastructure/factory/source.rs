//! Venue selection factory.
//!
//! Turns the `[sources]` section, or names given on the command line, into
//! catalog entries and then into adapters sharing one transport.

use std::sync::Arc;

use tracing::debug;

use crate::adapter::outbound::venue::catalog::{catalog, find, SourceSpec};
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::sources::SourcesConfig;
use crate::port::outbound::rate::RateSource;
use crate::port::outbound::transport::HttpTransport;

/// Pick the catalog entries to run.
///
/// Names in `requested` select exactly those venues, in the order given,
/// ignoring `config` entirely. Otherwise `config` filters the catalog.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownSource`] for a requested name that is not
/// in the catalog.
pub fn select_sources(config: &SourcesConfig, requested: &[String]) -> Result<Vec<SourceSpec>> {
    if requested.is_empty() {
        return Ok(catalog().into_iter().filter(|s| config.enables(s)).collect());
    }

    let mut selected: Vec<SourceSpec> = Vec::with_capacity(requested.len());
    for name in requested {
        let spec = find(name).ok_or_else(|| ConfigError::UnknownSource {
            field: "--source",
            name: name.clone(),
        })?;
        if !selected.iter().any(|s| s.name == spec.name) {
            selected.push(spec);
        }
    }
    Ok(selected)
}

/// Build one adapter per entry on top of a shared transport.
pub fn build_sources(
    specs: &[SourceSpec],
    transport: &Arc<dyn HttpTransport>,
) -> Vec<Arc<dyn RateSource>> {
    specs
        .iter()
        .map(|spec| {
            debug!(source = spec.name, pair = %spec.pair, "Building source");
            spec.build(Arc::clone(transport))
        })
        .collect()
}
