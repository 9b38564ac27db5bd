//! Command-line interface definitions.
//!
//! Global flags pick the configuration file and override the exchange,
//! market and request timeout it names; each subcommand is one operation
//! against the selected exchange.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::Pair;
use crate::infrastructure::exchange::tail::Since;

/// Configuration file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG: &str = "tradetail.toml";

/// Follow cryptocurrency exchange trades as a live feed
#[derive(Parser, Debug)]
#[command(name = "tradetail")]
#[command(version, about)]
pub struct Cli {
    /// Configuration file [default: tradetail.toml when present]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Exchange to talk to, overriding the configuration
    #[arg(short, long, global = true)]
    pub exchange: Option<String>,

    /// Market such as btc_usd or BTC/CNY, overriding the configuration
    #[arg(short, long, global = true)]
    pub pair: Option<Pair>,

    /// Per-request timeout in seconds, overriding the configuration
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registered exchanges
    Exchanges,

    /// Print one page of trade history
    History(HistoryArgs),

    /// Print the current ticker
    Ticker,

    /// Print the order book
    Orderbook(OrderbookArgs),

    /// Print account balances (requires API credentials)
    Balance,

    /// Follow new trades until interrupted
    Watch(WatchArgs),
}

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Page start: recent, id:<n> or ts:<unix seconds>
    #[arg(long)]
    pub since: Option<Since>,
}

#[derive(Args, Debug)]
pub struct OrderbookArgs {
    /// Levels per side
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Poll interval in milliseconds, overriding the configuration
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Feed start: now, recent, id:<n> or ts:<unix seconds>
    #[arg(long)]
    pub since: Option<Since>,
}
