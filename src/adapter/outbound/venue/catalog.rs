//! The statically constructed list of every shipped venue adapter.

use std::sync::Arc;

use crate::domain::pair::CurrencyPair;
use crate::port::outbound::rate::RateSource;
use crate::port::outbound::transport::HttpTransport;

use super::{
    bibox::BiboxSource, bigone::BigOneSource, binance::BinanceSource, bitbns::BitbnsSource,
    bitfinex::BitfinexSource, bittrex::BittrexSource, bvnex::BvnexSource, cex::CexSource,
    coinbase::CoinbaseSource, coinbasepro::CoinbaseProSource, coincap::CoinCapSource,
    cointrade::CointradeSource, crex24::Crex24Source, digifinex::DigifinexSource,
    exmo::ExmoSource, hitbtc::HitBtcSource, huobi::HuobiSource, indodax::IndodaxSource,
    kraken::KrakenSource, kucoin::KuCoinSource, liquid::LiquidSource, livecoin::LivecoinSource,
    okex::OkexSource, poloniex::PoloniexSource, southxchange::SouthXchangeSource,
    triv::TrivSource, uphold::UpholdSource, whitebit::WhiteBitSource, yobit::YobitSource,
};

type Constructor = fn(Arc<dyn HttpTransport>) -> Arc<dyn RateSource>;

/// Catalog entry: a venue's identity and how to build its adapter.
#[derive(Debug, Clone, Copy)]
pub struct SourceSpec {
    pub name: &'static str,
    pub pair: CurrencyPair,
    constructor: Constructor,
}

impl SourceSpec {
    /// Build the adapter on top of `transport`.
    #[must_use]
    pub fn build(&self, transport: Arc<dyn HttpTransport>) -> Arc<dyn RateSource> {
        (self.constructor)(transport)
    }

    /// Whether a user-supplied name refers to this venue.
    ///
    /// Case and punctuation are ignored, so `coinbase-pro`, `CoinbasePro`
    /// and `Coinbase Pro` all match.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        fold(self.name) == fold(name)
    }
}

fn fold(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

macro_rules! spec {
    ($source:ty) => {
        SourceSpec {
            name: <$source>::NAME,
            pair: <$source>::PAIR,
            constructor: |transport: Arc<dyn HttpTransport>| -> Arc<dyn RateSource> {
                Arc::new(<$source>::new(transport))
            },
        }
    };
}

/// Every venue adapter, in display order.
#[must_use]
pub fn catalog() -> Vec<SourceSpec> {
    vec![
        spec!(BiboxSource),
        spec!(BigOneSource),
        spec!(BinanceSource),
        spec!(BitbnsSource),
        spec!(BitfinexSource),
        spec!(BittrexSource),
        spec!(BvnexSource),
        spec!(CexSource),
        spec!(CoinCapSource),
        spec!(CoinbaseSource),
        spec!(CoinbaseProSource),
        spec!(CointradeSource),
        spec!(Crex24Source),
        spec!(DigifinexSource),
        spec!(ExmoSource),
        spec!(HitBtcSource),
        spec!(HuobiSource),
        spec!(IndodaxSource),
        spec!(KrakenSource),
        spec!(KuCoinSource),
        spec!(LiquidSource),
        spec!(LivecoinSource),
        spec!(OkexSource),
        spec!(PoloniexSource),
        spec!(SouthXchangeSource),
        spec!(TrivSource),
        spec!(UpholdSource),
        spec!(WhiteBitSource),
        spec!(YobitSource),
    ]
}

/// Look up a catalog entry by user-supplied name.
#[must_use]
pub fn find(name: &str) -> Option<SourceSpec> {
    catalog().into_iter().find(|spec| spec.matches(name))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::testkit::transport::FixtureTransport;

    #[test]
    fn lists_every_venue_once() {
        let specs = catalog();
        assert_eq!(specs.len(), 29);

        let folded: HashSet<String> = specs.iter().map(|s| fold(s.name)).collect();
        assert_eq!(folded.len(), specs.len(), "two venues fold to the same name");
    }

    #[test]
    fn every_adapter_reports_its_catalog_name() {
        let transport: Arc<dyn HttpTransport> = Arc::new(FixtureTransport::new());
        for spec in catalog() {
            assert_eq!(spec.build(transport.clone()).display_name(), spec.name);
        }
    }

    #[test]
    fn every_pair_is_priced_in_dash() {
        for spec in catalog() {
            assert_eq!(spec.pair.base(), "DASH", "{}", spec.name);
        }
    }

    #[test]
    fn find_ignores_case_and_punctuation() {
        assert_eq!(find("coinbase-pro").map(|s| s.name), Some("Coinbase Pro"));
        assert_eq!(find("CEXIO").map(|s| s.name), Some("CEX.IO"));
        assert_eq!(find("whitebit").map(|s| s.name), Some("WhiteBIT"));
        assert_eq!(find("Coinbase").map(|s| s.name), Some("Coinbase"));
        assert!(find("mtgox").is_none());
    }
}
