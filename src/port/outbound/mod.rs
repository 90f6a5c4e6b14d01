//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe infrastructure dependencies: venue rate sources
//! and the HTTP transport they are built on.

pub mod rate;
pub mod transport;
