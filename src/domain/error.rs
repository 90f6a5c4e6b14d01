//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated.
//! These errors are returned by `try_new` constructors that validate inputs.
//!
//! # Examples
//!
//! Handling validation errors:
//!
//! ```
//! use chrono::Utc;
//! use dashrates::domain::error::DomainError;
//! use dashrates::domain::pair::CurrencyPair;
//! use dashrates::domain::rate::CanonicalRate;
//!
//! // A negative price will fail validation
//! let result = CanonicalRate::try_new(CurrencyPair::DASH_BTC, -1.0, 0.0, Utc::now());
//!
//! assert!(matches!(result, Err(DomainError::InvalidPrice { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Last price must be a finite, non-negative number.
    #[error("last price must be finite and non-negative, got {price}")]
    InvalidPrice {
        /// The rejected price.
        price: f64,
    },

    /// Base asset volume must be a finite, non-negative number.
    #[error("base asset volume must be finite and non-negative, got {volume}")]
    InvalidVolume {
        /// The rejected volume.
        volume: f64,
    },

    /// Currency tickers cannot be blank.
    #[error("currency ticker cannot be empty")]
    EmptyCurrency,
}
