use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use tradetail::adapter::inbound::cli::{self, command::Cli, output};

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    cli::configure_output(&cli);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli::load_config(&cli).context("failed to load configuration")?;
    config.init_logging();
    debug!(
        exchange = %config.exchange.name,
        pair = %config.exchange.pair,
        "tradetail starting"
    );

    cli::execute(cli.command, config).await?;
    Ok(())
}
