//! Dashrates - DASH spot rates from many exchanges, normalized.
//!
//! Every supported venue publishes a public ticker in its own shape: numbers
//! as strings, base and quote volume swapped, five different timestamp
//! encodings, keyed maps, positional arrays. Each venue adapter decodes its
//! own wire format and reduces it to one [`CanonicalRate`](domain::rate::CanonicalRate).
//!
//! # Architecture
//!
//! - **`domain`** - The canonical rate record and currency pairs
//! - **`port`** - `RateSource` and `HttpTransport` traits
//! - **`adapter::outbound::venue`** - One adapter per venue plus the catalog
//! - **`adapter::outbound::http`** - `reqwest` transport
//! - **`application`** - The rate aggregator
//! - **`infrastructure`** - Configuration and factories
//! - **`adapter::inbound::cli`** - The `dashrates` command line
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use dashrates::adapter::outbound::http::client::ReqwestTransport;
//! use dashrates::adapter::outbound::http::settings::HttpConfig;
//! use dashrates::adapter::outbound::venue::kraken::KrakenSource;
//! use dashrates::port::outbound::rate::RateSource;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = Arc::new(ReqwestTransport::from_config(&HttpConfig::default())?);
//! let rate = KrakenSource::new(transport).fetch_rate().await?;
//! println!("{} {}", rate.pair_label(), rate.last_price());
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
