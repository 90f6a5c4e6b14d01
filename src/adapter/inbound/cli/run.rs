//! Command dispatch and the steps shared by several handlers.

use crate::application::aggregator::AggregateReport;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::aggregator::build_aggregator;
use crate::infrastructure::factory::transport::build_transport;

use super::command::{Cli, Commands, ConfigCommand, ConfigPathArg, SelectionArgs};
use super::output::{self, OutputConfig};
use super::{check, config, rates, sources};

/// Run the parsed command line.
///
/// Returns `Ok(false)` when the command ran but its outcome should map to a
/// failing exit status.
///
/// # Errors
///
/// Returns configuration, I/O and client-construction errors.
pub async fn execute(cli: Cli) -> Result<bool> {
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));
    output::configure_color(cli.color);

    match cli.command {
        Commands::Check(args) => check::execute(&args).await,
        Commands::Rates(args) => rates::execute(&args).await.map(|()| true),
        Commands::Sources(args) => sources::execute(&args).map(|()| true),
        Commands::Config(ConfigCommand::Show(args)) => config::execute_show(&args).map(|()| true),
        Commands::Config(ConfigCommand::Validate(args)) => {
            config::execute_validate(&args).map(|()| true)
        }
    }
}

/// Load the config named by `arg`, falling back to the default location.
pub(super) fn load_config(arg: &ConfigPathArg) -> Result<Config> {
    Config::resolve(arg.config.as_deref())
}

/// Load config, start logging, and collect one report over the selection.
pub(super) async fn collect(selection: &SelectionArgs) -> Result<AggregateReport> {
    let mut config = load_config(&selection.config)?;
    if output::is_quiet() {
        config.logging.level = "error".into();
    } else if output::verbosity() >= 2 {
        config.logging.level = "debug".into();
    }
    config.init_logging();

    let transport = build_transport(&config.http)?;
    let aggregator = build_aggregator(&config, &transport, &selection.sources)?;
    Ok(aggregator.collect().await)
}
