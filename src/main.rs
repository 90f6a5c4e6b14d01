use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use dashrates::adapter::inbound::cli::command::Cli;
use dashrates::adapter::inbound::cli::{output, run};

fn main() -> anyhow::Result<ExitCode> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    let code = match runtime.block_on(run::execute(cli)) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    };
    Ok(code)
}
