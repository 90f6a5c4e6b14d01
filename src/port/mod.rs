//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! They are traits that adapters implement to integrate with external
//! systems.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!                    │   (RateAggregator)      │
//!                    └────────────┬────────────┘
//!                                 │ RateSource
//!                                 ▼
//!                    ┌─────────────────────────┐
//!                    │  Venue adapters (x29)   │
//!                    └────────────┬────────────┘
//!                                 │ HttpTransport
//!                                 ▼
//!                    ┌─────────────────────────┐
//!                    │   reqwest / fixtures    │
//!                    └─────────────────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`RateSource`](outbound::rate::RateSource) - One venue's fetch + normalize contract
//! - [`HttpTransport`](outbound::transport::HttpTransport) - GET a URL and hand back the raw body

pub mod outbound;
