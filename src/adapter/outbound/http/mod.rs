//! HTTP transport adapter.

pub mod client;
pub mod settings;
