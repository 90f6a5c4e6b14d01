//! Handler for the `sources` command.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::ConfigPathArg;
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::venue::catalog::catalog;
use crate::error::Result;

#[derive(Tabled)]
struct SourceRow {
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Pair")]
    pair: String,
    #[tabled(rename = "Enabled")]
    enabled: &'static str,
}

/// List catalog venues and whether the configuration enables them.
pub fn execute(args: &ConfigPathArg) -> Result<()> {
    let config = super::run::load_config(args)?;
    let specs = catalog();

    if output::is_json() {
        let sources: Vec<_> = specs
            .iter()
            .map(|spec| {
                json!({
                    "name": spec.name,
                    "pair": spec.pair.to_string(),
                    "enabled": config.sources.enables(spec),
                })
            })
            .collect();
        output::json_output(json!({
            "command": "sources",
            "sources": sources,
        }));
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Sources");

    let rows: Vec<SourceRow> = specs
        .iter()
        .map(|spec| SourceRow {
            name: spec.name,
            pair: spec.pair.to_string(),
            enabled: if config.sources.enables(spec) { "yes" } else { "no" },
        })
        .collect();
    let enabled = rows.iter().filter(|r| r.enabled == "yes").count();

    output::lines(&Table::new(rows).to_string());
    output::note(&format!("{enabled} of {} enabled", specs.len()));
    Ok(())
}
