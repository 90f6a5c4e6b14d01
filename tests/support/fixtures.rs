//! One canned, well-formed response per catalog venue.

use dashrates::testkit::transport::FixtureTransport;

pub struct VenueFixture {
    pub venue: &'static str,
    pub routes: &'static [(&'static str, &'static str)],
    pub price: f64,
    pub volume: f64,
}

pub const VENUES: &[VenueFixture] = &[
    VenueFixture {
        venue: "Bibox",
        routes: &[(
            "https://api.bibox.com/v1/mdata?cmd=market&pair=DASH_BTC",
            r#"{"result": {"is_hide": 0, "coin_symbol": "DASH", "currency_symbol": "BTC", "last": "0.010213", "high": "0.010374", "low": "0.010090", "change": "-0.000052", "percent": "-0.51%", "vol24H": "1267", "amount": "12.94", "last_usd": "6.99"}, "cmd": "market"}"#,
        )],
        price: 0.010213,
        volume: 1267.0,
    },
    VenueFixture {
        venue: "BigONE",
        routes: &[(
            "https://big.one/api/v3/asset_pairs/DASH-BTC/ticker",
            r#"{"code": 0, "data": {"asset_pair_name": "DASH-BTC", "bid": {"price": "0.010171", "order_count": 3, "quantity": "13.51"}, "ask": {"price": "0.010257", "order_count": 2, "quantity": "4.2"}, "open": "0.010318", "high": "0.010355", "low": "0.010102", "close": "0.010213", "volume": "387.44", "daily_change": "-0.000105"}}"#,
        )],
        price: 0.010213,
        volume: 387.44,
    },
    VenueFixture {
        venue: "Binance",
        routes: &[(
            "https://api.binance.com/api/v3/ticker/price?symbol=DASHBTC",
            r#"{"symbol": "DASHBTC", "price": "0.01021400"}"#,
        )],
        price: 0.010214,
        volume: 0.0,
    },
    VenueFixture {
        venue: "Bitbns",
        routes: &[(
            "https://bitbns.com/order/getTickerWithVolume/",
            r#"{"DASHUSDT": {"highest_buy_bid": 72.01, "lowest_sell_bid": 73.4, "last_traded_price": 72.55, "yes_price": 72.6, "volume": {"max": 74, "min": 70, "volume": 88.2}}}"#,
        )],
        price: 72.55,
        volume: 0.0,
    },
    VenueFixture {
        venue: "Bitfinex",
        routes: &[(
            "https://api.bitfinex.com/v1/pubticker/dshusd",
            r#"{"mid": "71.9775", "bid": "71.955", "ask": "72.0", "last_price": "71.96", "low": "70.5", "high": "73.12", "volume": "2150.83", "timestamp": "1574286574.8762016"}"#,
        )],
        price: 71.96,
        volume: 2150.83,
    },
    VenueFixture {
        venue: "Bittrex",
        routes: &[(
            "https://api.bittrex.com/api/v1.1/public/getmarketsummary?market=btc-dash",
            r#"{"success": true, "message": "", "result": [{"MarketName": "BTC-DASH", "High": 0.0104, "Low": 0.0101, "Volume": 1532.77, "Last": 0.01021, "BaseVolume": 15.74, "TimeStamp": "2019-11-20T21:56:51.53", "Bid": 0.0102, "Ask": 0.01022, "OpenBuyOrders": 161, "OpenSellOrders": 1210, "PrevDay": 0.01032, "Created": "2014-02-13T00:00:00"}]}"#,
        )],
        price: 0.01021,
        volume: 1532.77,
    },
    VenueFixture {
        venue: "Bvnex",
        routes: &[(
            "https://api.bvnex.com/api/ticker/get?symbol=dash_usdt",
            r#"{"code": 0, "msg": "success", "data": {"last": "71.88", "lowestAsk": "72.10", "highestBid": "71.70", "percentChange": "-1.12", "baseVolume": "310.5", "quoteVolume": "22318.7", "high24hr": "73.0", "low24hr": "70.9"}}"#,
        )],
        price: 71.88,
        volume: 310.5,
    },
    VenueFixture {
        venue: "CEX.IO",
        routes: &[(
            "https://cex.io/api/ticker/DASH/USD",
            r#"{"timestamp": "1574286574", "low": "70.51", "high": "73.2", "last": "71.93", "volume": "118.62", "volume30d": "4015.3", "bid": 71.8, "ask": 72.04, "priceChange": "-0.82", "priceChangePercentage": "-1.13", "pair": "DASH:USD"}"#,
        )],
        price: 71.93,
        volume: 118.62,
    },
    VenueFixture {
        venue: "CoinCap",
        routes: &[(
            "https://api.coincap.io/v2/rates/dash",
            r#"{"data": {"id": "dash", "symbol": "DASH", "currencySymbol": null, "type": "crypto", "rateUsd": "71.95"}, "timestamp": 1574286574102}"#,
        )],
        price: 71.95,
        volume: 0.0,
    },
    VenueFixture {
        venue: "Coinbase",
        routes: &[(
            "https://api.coinbase.com/v2/exchange-rates?currency=DASH",
            r#"{"data": {"currency": "DASH", "rates": {"BTC": "0.00984", "EUR": "65.11", "USD": "71.93"}}}"#,
        )],
        price: 71.93,
        volume: 0.0,
    },
    VenueFixture {
        venue: "Coinbase Pro",
        routes: &[(
            "https://api.pro.coinbase.com/products/DASH-USD/ticker",
            r#"{"trade_id": 2618215, "price": "71.96000000", "size": "1.04212813", "time": "2019-11-20T21:56:51.547Z", "bid": "71.94", "ask": "71.99", "volume": "3412.5"}"#,
        )],
        price: 71.96,
        volume: 3412.5,
    },
    VenueFixture {
        venue: "Cointrade",
        routes: &[(
            "https://api.cointradecx.com/public/ticker?market=DASH_BTC",
            r#"{"Success": true, "Message": "", "Result": [{"timestamp": 1574286574, "market": "DASH_BTC", "ask": "0.01030", "bid": "0.01012", "last": "0.01021", "spread": "0.00018", "low24h": "0.01001", "high24h": "0.01044", "vol24h": "52.1", "quoteVolume": "0.532", "isFrozen": 0}]}"#,
        )],
        price: 0.01021,
        volume: 52.1,
    },
    VenueFixture {
        venue: "CREX24",
        routes: &[(
            "https://api.crex24.com/v2/public/tickers?instrument=DASH-BTC",
            r#"[{"instrument": "DASH-BTC", "last": 0.010231, "percentChange": -1.04, "low": 0.0101, "high": 0.0104, "baseVolume": 17.28, "quoteVolume": 0.1766, "volumeInBtc": 0.1766, "volumeInUsd": 1321.4, "ask": 0.01029, "bid": 0.01018, "timestamp": "2019-11-20T21:56:51Z"}]"#,
        )],
        price: 0.010231,
        volume: 17.28,
    },
    VenueFixture {
        venue: "Digifinex",
        routes: &[(
            "https://openapi.digifinex.com/v3/ticker?symbol=dash_usdt",
            r#"{"ticker": [{"vol": 40.56, "change": -1.72, "base_vol": 2891.33, "sell": 71.99, "last": 71.93, "symbol": "dash_usdt", "low": 70.6, "buy": 71.87, "high": 73.21}], "date": 1574286574, "code": 0}"#,
        )],
        price: 71.93,
        volume: 2891.33,
    },
    VenueFixture {
        venue: "Exmo",
        routes: &[(
            "https://api.exmo.com/v1/ticker/",
            r#"{"DASH_USD": {"buy_price": "71.6", "sell_price": "72.3", "last_trade": "71.94", "high": "73.5", "low": "70.2", "avg": "71.8", "vol": "845.31", "vol_curr": "60812.6", "updated": 1574286574}}"#,
        )],
        price: 71.94,
        volume: 845.31,
    },
    VenueFixture {
        venue: "HitBTC",
        routes: &[(
            "https://api.hitbtc.com/api/2/public/ticker/DASHUSD",
            r#"{"symbol": "DASHUSD", "ask": "72.021", "bid": "71.902", "last": "71.955", "high": "73.410", "low": "70.330", "open": "72.812", "volume": "1893.442", "volumeQuote": "136270.5", "timestamp": "2019-11-20T21:56:51.547Z"}"#,
        )],
        price: 71.955,
        volume: 1893.442,
    },
    VenueFixture {
        venue: "Huobi",
        routes: &[
            (
                "https://api.huobi.pro/market/trade?symbol=dashbtc",
                r#"{"status": "ok", "ch": "market.dashbtc.trade.detail", "ts": 1574286574300, "tick": {"id": 102451, "ts": 1574286574102, "data": [{"id": 1, "amount": 0.42, "ts": 1574286574102, "trade-id": 7, "price": 0.010219, "direction": "buy"}]}}"#,
            ),
            (
                "https://api.huobi.pro/market/detail/merged?symbol=dashbtc",
                r#"{"status": "ok", "ch": "market.dashbtc.detail.merged", "ts": 1574286574401, "tick": {"id": 102452, "close": 0.01022, "open": 0.01031, "high": 0.01045, "low": 0.01008, "amount": 2231.7, "count": 5120, "version": 102452, "vol": 22.81, "ask": [0.010225, 3.1], "bid": [0.010212, 0.8]}}"#,
            ),
        ],
        price: 0.010219,
        volume: 2231.7,
    },
    VenueFixture {
        venue: "Indodax",
        routes: &[(
            "https://indodax.com/api/drk_btc/ticker",
            r#"{"ticker": {"high": "0.01049", "low": "0.01005", "vol_drk": "96.42", "vol_btc": "0.9854", "last": "0.01022", "buy": "0.01018", "sell": "0.01025", "server_time": 1574286574}}"#,
        )],
        price: 0.01022,
        volume: 96.42,
    },
    VenueFixture {
        venue: "Kraken",
        routes: &[(
            "https://api.kraken.com/0/public/Ticker?pair=DASHUSD",
            r#"{"error": [], "result": {"DASHUSD": {"a": ["72.06000", "3", "3.000"], "b": ["71.91000", "12", "12.000"], "c": ["71.97000", "0.48811400"], "v": ["641.32101443", "1877.90612281"], "p": ["71.94582", "72.18843"], "t": [231, 716], "l": ["70.53000", "70.53000"], "h": ["72.99000", "73.50000"], "o": "72.49000"}}}"#,
        )],
        price: 71.97,
        volume: 641.32101443,
    },
    VenueFixture {
        venue: "KuCoin",
        routes: &[(
            "https://api.kucoin.com/api/v1/market/orderbook/level1?symbol=DASH-BTC",
            r#"{"code": "200000", "data": {"sequence": "1550467636704", "bestAsk": "0.010245", "size": "0.5126", "price": "0.010219", "bestBidSize": "1.2", "time": 1574286574102, "bestBid": "0.010201", "bestAskSize": "3.77"}}"#,
        )],
        price: 0.010219,
        volume: 0.0,
    },
    VenueFixture {
        venue: "Liquid",
        routes: &[(
            "https://api.liquid.com/products/116",
            r#"{"id": "116", "product_type": "CurrencyPair", "code": "CASH", "currency_pair_code": "DASHBTC", "base_currency": "DASH", "quoted_currency": "BTC", "last_traded_price": "0.01022", "volume_24h": "12.80431"}"#,
        )],
        price: 0.01022,
        volume: 12.80431,
    },
    VenueFixture {
        venue: "Livecoin",
        routes: &[(
            "https://api.livecoin.net/exchange/ticker?currencyPair=DASH/USD",
            r#"{"cur": "DASH", "symbol": "DASH/USD", "last": 71.9, "high": 73.5, "low": 70.1, "volume": 42.8811, "vwap": 71.77, "max_bid": 73.4, "min_ask": 70.2, "best_bid": 71.82, "best_ask": 72.05}"#,
        )],
        price: 71.9,
        volume: 42.8811,
    },
    VenueFixture {
        venue: "OKEx",
        routes: &[(
            "https://www.okex.com/api/spot/v3/instruments/DASH-BTC/ticker",
            r#"{"best_ask": "0.01024", "best_bid": "0.01021", "instrument_id": "DASH-BTC", "product_id": "DASH-BTC", "last": "0.01022", "last_qty": "1.3", "ask": "0.01024", "best_ask_size": "20.1", "bid": "0.01021", "best_bid_size": "4.4", "open_24h": "0.01031", "high_24h": "0.01045", "low_24h": "0.01008", "base_volume_24h": "28.91", "timestamp": "2019-11-20T21:56:51.547Z", "quote_volume_24h": "2830.6"}"#,
        )],
        price: 0.01022,
        volume: 2830.6,
    },
    VenueFixture {
        venue: "Poloniex",
        routes: &[(
            "https://poloniex.com/public?command=returnTicker",
            r#"{"BTC_DASH": {"id": 24, "last": "0.01021", "lowestAsk": "0.01024", "highestBid": "0.01019", "percentChange": "-0.012", "baseVolume": "4.418", "quoteVolume": "432.77", "isFrozen": "0", "high24hr": "0.01045", "low24hr": "0.01008"}}"#,
        )],
        price: 0.01021,
        volume: 432.77,
    },
    VenueFixture {
        venue: "SouthXchange",
        routes: &[(
            "https://www.southxchange.com/api/price/DASH/BTC",
            r#"{"Bid": 0.01018, "Ask": 0.01029, "Last": 0.01022, "Variation24Hr": -1.2, "Volume24Hr": 35.71}"#,
        )],
        price: 0.01022,
        volume: 35.71,
    },
    VenueFixture {
        venue: "Triv",
        routes: &[(
            "https://triv.id/api/v1/config/ticker?pair=USD",
            r#"[{"code": "BTC", "name": "Bitcoin", "sell": 8120.5, "buy": 8080.1}, {"code": "DASH", "name": "Dash", "sell": 72.4, "buy": 71.6}]"#,
        )],
        price: 71.6,
        volume: 0.0,
    },
    VenueFixture {
        venue: "Uphold",
        routes: &[(
            "https://api.uphold.com/v0/ticker/DASHUSD",
            r#"{"ask": "72.41", "bid": "71.22", "currency": "USD"}"#,
        )],
        price: 72.41,
        volume: 0.0,
    },
    VenueFixture {
        venue: "WhiteBIT",
        routes: &[(
            "https://whitebit.com/api/v1/public/ticker?market=DASH_USD",
            r#"{"success": true, "message": null, "result": {"bid": "71.88", "ask": "72.03", "open": "72.9", "high": "73.41", "low": "70.62", "last": "71.95", "volume": "618.224", "deal": "44411.9", "change": "-1.3"}}"#,
        )],
        price: 71.95,
        volume: 618.224,
    },
    VenueFixture {
        venue: "Yobit",
        routes: &[(
            "https://yobit.net/api/3/ticker/dash_usd",
            r#"{"dash_usd": {"high": 74.1, "low": 70.02, "avg": 72.06, "vol": 3190.12, "vol_cur": 44.21, "last": 71.98, "buy": 71.9, "sell": 72.2, "updated": 1574286574}}"#,
        )],
        price: 71.98,
        volume: 44.21,
    },
];

/// Fixture for a catalog venue by display name.
pub fn venue(name: &str) -> &'static VenueFixture {
    VENUES
        .iter()
        .find(|f| f.venue == name)
        .unwrap_or_else(|| panic!("no fixture for {name}"))
}

/// A transport answering every route of every venue fixture.
pub fn all_venues_transport() -> FixtureTransport {
    VENUES
        .iter()
        .flat_map(|f| f.routes.iter())
        .fold(FixtureTransport::new(), |transport, (url, body)| {
            transport.with_route(*url, *body)
        })
}
