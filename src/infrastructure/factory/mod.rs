//! Factory modules for building infrastructure components.
//!
//! Provides factory functions that construct fully-configured components
//! from application configuration. These factories handle dependency
//! injection and wiring.
//!
//! # Submodules
//!
//! - [`aggregator`] - Rate aggregator construction
//! - [`source`] - Venue selection and adapter construction
//! - [`transport`] - HTTP transport construction

pub mod aggregator;
pub mod source;
pub mod transport;
