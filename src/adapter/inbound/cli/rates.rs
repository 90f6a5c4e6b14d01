//! Handler for the `rates` command.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::SelectionArgs;
use crate::adapter::inbound::cli::output;
use crate::application::aggregator::AggregateReport;
use crate::domain::rate::CanonicalRate;
use crate::error::Result;

#[derive(Tabled)]
struct RateRow {
    #[tabled(rename = "Venue")]
    venue: &'static str,
    #[tabled(rename = "Pair")]
    pair: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Volume")]
    volume: String,
    #[tabled(rename = "Fetched")]
    fetched: String,
}

impl RateRow {
    fn new(venue: &'static str, rate: &CanonicalRate) -> Self {
        Self {
            venue,
            pair: rate.pair_label(),
            price: rate.last_price().to_string(),
            volume: output::volume_label(rate),
            fetched: rate.fetch_time().format("%H:%M:%S%.3f").to_string(),
        }
    }
}

/// Execute `rates`.
pub async fn execute(args: &SelectionArgs) -> Result<()> {
    let report = super::run::collect(args).await?;

    if output::is_json() {
        output::json_output(to_json(&report));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Rates");
    let rows: Vec<RateRow> = report
        .successes()
        .map(|(venue, rate)| RateRow::new(venue, rate))
        .collect();
    if rows.is_empty() {
        output::note("(no source answered)");
    } else {
        output::lines(&Table::new(rows).to_string());
    }

    if report.failed() > 0 {
        output::section("Failures");
        for (_, err) in report.failures() {
            output::warning(&err.to_string());
        }
    }
    Ok(())
}

fn to_json(report: &AggregateReport) -> serde_json::Value {
    let rates: Vec<_> = report
        .successes()
        .map(|(venue, rate)| json!({ "source": venue, "rate": rate }))
        .collect();
    let failures: Vec<_> = report
        .failures()
        .map(|(venue, err)| {
            json!({
                "source": venue,
                "kind": err.kind(),
                "message": err.to_string(),
            })
        })
        .collect();

    json!({
        "command": "rates",
        "rates": rates,
        "failures": failures,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::application::aggregator::RateAggregator;
    use crate::port::outbound::rate::RateSource;
    use crate::testkit::source::{FailingSource, StaticSource};

    #[tokio::test]
    async fn json_lists_rates_and_failures_separately() {
        let sources: Vec<Arc<dyn RateSource>> = vec![
            Arc::new(StaticSource::new("Exmo", 71.2).with_volume(3.5)),
            Arc::new(FailingSource::new("Bittrex", "INVALID_MARKET")),
        ];
        let report = RateAggregator::new(sources).collect().await;
        let value = to_json(&report);

        assert_eq!(value["rates"][0]["source"], "Exmo");
        assert_eq!(value["rates"][0]["rate"]["last_price"], 71.2);
        assert_eq!(value["rates"][0]["rate"]["base_asset_volume"], 3.5);
        assert_eq!(value["failures"][0]["source"], "Bittrex");
        assert_eq!(value["failures"][0]["kind"], "rejected");
    }

    #[test]
    fn row_shows_missing_volume_as_na() {
        let rate = CanonicalRate::try_new(
            crate::domain::pair::CurrencyPair::DASH_BTC,
            0.0104,
            0.0,
            chrono::Utc::now(),
        )
        .unwrap();
        let row = RateRow::new("Binance", &rate);
        assert_eq!(row.pair, "DASH/BTC");
        assert_eq!(row.volume, "n/a");
    }
}
