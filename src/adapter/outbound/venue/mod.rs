//! Venue adapters.
//!
//! One module per venue. Each owns its wire DTOs, a normalizer that turns
//! them into a typed ticker, and a [`RateSource`](crate::port::outbound::rate::RateSource)
//! implementation that produces a [`CanonicalRate`](crate::domain::rate::CanonicalRate).
//!
//! [`catalog`] lists them all; [`client`] and [`normalize`] hold the pieces
//! they share.

pub mod catalog;
pub mod client;
pub mod normalize;

pub mod bibox;
pub mod bigone;
pub mod binance;
pub mod bitbns;
pub mod bitfinex;
pub mod bittrex;
pub mod bvnex;
pub mod cex;
pub mod coinbase;
pub mod coinbasepro;
pub mod coincap;
pub mod cointrade;
pub mod crex24;
pub mod digifinex;
pub mod exmo;
pub mod hitbtc;
pub mod huobi;
pub mod indodax;
pub mod kraken;
pub mod kucoin;
pub mod liquid;
pub mod livecoin;
pub mod okex;
pub mod poloniex;
pub mod southxchange;
pub mod triv;
pub mod uphold;
pub mod whitebit;
pub mod yobit;
