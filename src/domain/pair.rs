//! Base/quote currency pairs.

use std::fmt;

/// A fixed trading pair: the asset being priced and the currency it is
/// denominated in.
///
/// Pairs are a construction detail of each venue adapter, so the tickers are
/// static strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    base: &'static str,
    quote: &'static str,
}

impl CurrencyPair {
    /// DASH priced in bitcoin.
    pub const DASH_BTC: Self = Self::new("DASH", "BTC");
    /// DASH priced in US dollars.
    pub const DASH_USD: Self = Self::new("DASH", "USD");
    /// DASH priced in Tether.
    pub const DASH_USDT: Self = Self::new("DASH", "USDT");

    /// Create a pair from two tickers.
    #[must_use]
    pub const fn new(base: &'static str, quote: &'static str) -> Self {
        Self { base, quote }
    }

    /// The asset being priced.
    #[must_use]
    pub const fn base(&self) -> &'static str {
        self.base
    }

    /// The currency the price is denominated in.
    #[must_use]
    pub const fn quote(&self) -> &'static str {
        self.quote
    }

    /// Case-insensitive match against a `(base, quote)` label reported by a venue.
    #[must_use]
    pub fn matches(&self, base: &str, quote: &str) -> bool {
        self.base.eq_ignore_ascii_case(base) && self.quote.eq_ignore_ascii_case(quote)
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_base_slash_quote() {
        assert_eq!(CurrencyPair::DASH_BTC.to_string(), "DASH/BTC");
        assert_eq!(CurrencyPair::new("DASH", "IDR").to_string(), "DASH/IDR");
    }

    #[test]
    fn matches_ignores_ascii_case() {
        assert!(CurrencyPair::DASH_USD.matches("dash", "usd"));
        assert!(CurrencyPair::DASH_USD.matches("DASH", "USD"));
        assert!(!CurrencyPair::DASH_USD.matches("DASH", "USDT"));
        assert!(!CurrencyPair::DASH_USD.matches("BTC", "USD"));
    }
}
