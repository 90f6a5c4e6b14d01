//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`transport`] — `FixtureTransport`, an in-memory
//!   [`HttpTransport`](crate::port::outbound::transport::HttpTransport) that
//!   serves canned venue bodies.
//! - [`source`] — Scripted [`RateSource`](crate::port::outbound::rate::RateSource)
//!   implementations: succeeding, failing, panicking and never-completing.
//! - [`config`] — Canonical test configurations.

pub mod config;
pub mod source;
pub mod transport;
