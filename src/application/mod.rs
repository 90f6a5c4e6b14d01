//! Application services (use cases).
//!
//! These services coordinate adapters through ports to implement the
//! application's use cases.

pub mod aggregator;
