//! Handler for the `check` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::CheckArgs;
use crate::adapter::inbound::cli::output;
use crate::application::aggregator::AggregateReport;
use crate::error::Result;

/// Execute `check`.
///
/// Returns `false` only in strict mode with at least one failing source.
pub async fn execute(args: &CheckArgs) -> Result<bool> {
    let report = super::run::collect(&args.selection).await?;
    print_report(&report);
    Ok(passed(&report, args.strict))
}

fn passed(report: &AggregateReport, strict: bool) -> bool {
    !strict || report.failed() == 0
}

fn print_report(report: &AggregateReport) {
    for outcome in report.outcomes() {
        match &outcome.result {
            Ok(rate) => output::source_ok(outcome.source, rate),
            Err(err) => output::source_error(outcome.source, err),
        }
    }

    if output::is_json() {
        output::json_output(json!({
            "type": "summary",
            "payload": {
                "sources": report.len(),
                "succeeded": report.succeeded(),
                "failed": report.failed(),
            },
        }));
    } else if !output::is_quiet() {
        output::section("Summary");
        output::field("Succeeded", format!("{}/{}", report.succeeded(), report.len()));
        if report.failed() > 0 {
            output::field("Failed", report.failed());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::application::aggregator::RateAggregator;
    use crate::port::outbound::rate::RateSource;
    use crate::testkit::source::{FailingSource, StaticSource};

    async fn report(fail: bool) -> AggregateReport {
        let mut sources: Vec<Arc<dyn RateSource>> = vec![Arc::new(StaticSource::new("A", 1.0))];
        if fail {
            sources.push(Arc::new(FailingSource::new("B", "down")));
        }
        RateAggregator::new(sources).collect().await
    }

    #[tokio::test]
    async fn failures_only_matter_in_strict_mode() {
        let failing = report(true).await;
        assert!(passed(&failing, false));
        assert!(!passed(&failing, true));

        let clean = report(false).await;
        assert!(passed(&clean, true));
    }
}
