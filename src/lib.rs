//! tradetail - live trade feeds from polling-only exchange APIs.
//!
//! Many cryptocurrency exchanges only offer a "trades since X" endpoint.
//! This crate turns such endpoints into an ordered, deduplicated stream of
//! new trades, with adaptive backoff while the exchange misbehaves.
//!
//! # Architecture
//!
//! - **`domain`** - Exchange-agnostic types: symbols, pairs, trades, cursors
//! - **`port`** - The [`Client`](port::Client) capability every exchange adapter implements
//! - **`adapter`** - Exchange adapters (`btce`, `btcchina`) and the CLI
//! - **`infrastructure`** - Configuration, client registry, backoff and the
//!   polling-to-streaming engine
//!
//! # Features
//!
//! - `testkit` - Expose scripted test doubles to integration tests
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use tradetail::domain::Pair;
//! use tradetail::infrastructure::config::transport::TransportConfig;
//! use tradetail::infrastructure::exchange::{tail, Credentials, Registry, TailOptions};
//!
//! # async fn run() -> tradetail::error::Result<()> {
//! let registry = Registry::with_builtin();
//! let client = registry.create("btce", &Credentials::anonymous(), &TransportConfig::default())?;
//!
//! let mut trades = tail(client, Pair::btc_usd(), TailOptions::new(Duration::from_secs(2)))?;
//! while let Some(trade) = trades.next().await {
//!     println!("{trade}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
