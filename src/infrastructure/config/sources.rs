//! Source selection.

use serde::Deserialize;

use crate::adapter::outbound::venue::catalog::SourceSpec;

/// Venues skipped unless named explicitly: both have shut down their public
/// APIs.
pub const DEFAULT_EXCLUDED: &[&str] = &["Cointrade", "Livecoin"];

/// Which catalog entries run.
///
/// An empty `include` means every catalog source. `exclude` is applied after
/// `include`. Names match case-insensitively, ignoring punctuation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl SourcesConfig {
    /// Whether the catalog entry runs under this selection.
    #[must_use]
    pub fn enables(&self, spec: &SourceSpec) -> bool {
        let included = self.include.is_empty() || self.include.iter().any(|n| spec.matches(n));
        included && !self.exclude.iter().any(|n| spec.matches(n))
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            exclude: DEFAULT_EXCLUDED.iter().map(ToString::to_string).collect(),
        }
    }
}
