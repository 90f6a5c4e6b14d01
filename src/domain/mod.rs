//! Venue-agnostic domain types.

pub mod error;
pub mod pair;
pub mod rate;
