//! Argument grammar for the `dashrates` binary.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Fetch the DASH spot rate from many exchanges and normalize the results
#[derive(Parser, Debug)]
#[command(name = "dashrates")]
#[command(version)]
pub struct Cli {
    /// When to use terminal colors: auto, always or never
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Only print per-source results and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Show more detail; repeat for debug logs
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch every selected source once and print a pass/fail line per venue
    Check(CheckArgs),

    /// Fetch every selected source once and print a table of rates
    Rates(SelectionArgs),

    /// List the venues this build knows about
    Sources(ConfigPathArg),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the settings in effect after defaults are filled in
    Show(ConfigPathArg),
    /// Load a config file and report the first problem, if any
    Validate(ConfigPathArg),
}

/// `-c/--config`, shared by every subcommand.
#[derive(Args, Debug, Default)]
pub struct ConfigPathArg {
    /// Path to the configuration file [default: $DASHRATES_CONFIG or dashrates.toml]
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Configuration path plus an optional explicit source list.
#[derive(Args, Debug, Default)]
pub struct SelectionArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Only query this venue (repeatable); ignores [sources] in the config
    #[arg(short, long = "source", value_name = "NAME")]
    pub sources: Vec<String>,
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Exit with a failure status if any source fails
    #[arg(long)]
    pub strict: bool,
}
