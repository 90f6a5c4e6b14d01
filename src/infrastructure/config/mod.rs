//! Infrastructure configuration modules.

pub mod aggregator;
pub mod logging;
pub mod settings;
pub mod sources;
