//! Handler for the `config` command group.

use crate::adapter::inbound::cli::command::ConfigPathArg;
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::venue::catalog::catalog;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

fn display_path(args: &ConfigPathArg) -> String {
    match &args.config {
        Some(path) => path.display().to_string(),
        None => {
            let path = Config::default_path();
            if path.exists() {
                path.display().to_string()
            } else {
                format!("{} (not found, defaults)", path.display())
            }
        }
    }
}

/// Execute `config show`.
pub fn execute_show(args: &ConfigPathArg) -> Result<()> {
    let config = super::run::load_config(args)?;

    output::section("Effective Configuration");
    output::field("File", display_path(args));

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("HTTP");
    output::field("Timeout", format!("{}ms", config.http.timeout_ms));
    output::field("Connect", format!("{}ms", config.http.connect_timeout_ms));
    output::field("User agent", &config.http.user_agent);

    output::section("Aggregator");
    output::field("Mode", config.aggregator.mode);
    output::field(
        "Source timeout",
        config
            .aggregator
            .source_timeout()
            .map_or_else(|| "disabled".to_string(), |t| format!("{}ms", t.as_millis())),
    );

    output::section("Sources");
    let enabled: Vec<&str> = catalog()
        .into_iter()
        .filter(|spec| config.sources.enables(spec))
        .map(|spec| spec.name)
        .collect();
    output::field("Enabled", enabled.len());
    if output::verbosity() > 0 {
        for name in &enabled {
            output::note(&format!("- {name}"));
        }
    }
    if !config.sources.exclude.is_empty() {
        output::field("Excluded", config.sources.exclude.join(", "));
    }
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(args: &ConfigPathArg) -> Result<()> {
    super::run::load_config(args)?;
    output::success("Configuration valid");
    output::field("File", display_path(args));
    Ok(())
}
