//! `tradetail` command-line interface.

pub mod command;
pub mod output;

mod account;
mod exchanges;
mod market;
mod watch;

use std::path::Path;
use std::time::Duration;

use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::exchange::Registry;

use self::command::{Cli, ColorChoice, Commands, DEFAULT_CONFIG};
use self::output::OutputConfig;

/// Apply `--json`, `--quiet` and `--color`.
pub fn configure_output(cli: &Cli) {
    output::configure(OutputConfig {
        json: cli.json,
        quiet: cli.quiet,
    });
    match cli.color {
        ColorChoice::Auto => {}
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
    }
}

/// Effective configuration: the config file (explicit, or the default one
/// when present, or built-in defaults) with command-line overrides applied.
///
/// # Errors
///
/// Unreadable or invalid configuration, including invalid overrides.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => Config::load(DEFAULT_CONFIG)?,
        None => Config::from_env(),
    };

    if let Some(exchange) = &cli.exchange {
        config.exchange.name.clone_from(exchange);
    }
    if let Some(pair) = &cli.pair {
        config.exchange.pair = pair.clone();
    }
    if let Some(secs) = cli.timeout {
        let timeout = Duration::from_secs(secs);
        config.transport.timeout_ms = secs.saturating_mul(1_000);
        config.transport.connect_timeout_ms = config
            .transport
            .connect_timeout()
            .min(timeout)
            .as_millis()
            .try_into()
            .unwrap_or(u64::MAX);
    }

    config.validate()?;
    Ok(config)
}

/// Run `command` against the configured exchange.
///
/// # Errors
///
/// Unknown exchange, client construction failures, and errors of the
/// operation itself.
pub async fn execute(command: Commands, config: Config) -> Result<()> {
    let registry = Registry::with_builtin();
    if let Commands::Exchanges = command {
        exchanges::execute(&registry, &config.exchange.name);
        return Ok(());
    }

    let client = registry.create(&config.exchange.name, &config.credentials, &config.transport)?;
    let pair = config.exchange.pair.clone();

    match command {
        Commands::Exchanges => Ok(()),
        Commands::History(args) => market::history(client.as_ref(), &pair, args.since).await,
        Commands::Ticker => market::ticker(client.as_ref(), &pair).await,
        Commands::Orderbook(args) => market::orderbook(client.as_ref(), &pair, args.limit).await,
        Commands::Balance => account::balance(client.as_ref()).await,
        Commands::Watch(args) => {
            let mut tail = config.tail;
            if let Some(interval_ms) = args.interval_ms {
                tail.interval_ms = interval_ms;
            }
            if let Some(since) = args.since {
                tail.since = since;
            }
            watch::execute(client, pair, tail.options()).await
        }
    }
}
