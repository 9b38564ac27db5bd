//! Exchange port for market data and account operations.
//!
//! [`Client`] is the integration point every exchange adapter implements.
//! The tail engine only consumes [`Client::history`]; the rest of the surface
//! serves the CLI and other consumers.

use async_trait::async_trait;

use crate::domain::{
    Balances, Cursor, CursorKind, Order, Orderbook, Pair, Side, Ticker, Trade, Transaction,
};
use crate::error::Error;

/// One page of trade history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryPage {
    /// Trades in no particular order; may overlap earlier pages.
    pub trades: Vec<Trade>,
    /// Cursor to pass to the next call to request only newer trades.
    pub next: Cursor,
}

impl HistoryPage {
    pub fn new(trades: Vec<Trade>, next: Cursor) -> Self {
        Self { trades, next }
    }
}

/// Public market data of a single exchange.
///
/// Implementations may return unordered or overlapping history; callers
/// that need a clean feed go through the tail engine, which deduplicates.
/// Calls are never issued concurrently by the tail engine, but
/// implementations must still be `Send + Sync` so one client can be shared
/// by several feeds.
#[async_trait]
pub trait Client: Send + Sync {
    /// Registry name of the exchange, used for logging.
    fn name(&self) -> &'static str;

    /// How the exchange pages its trade history.
    fn cursor_kind(&self) -> CursorKind;

    /// Fetch trades of `pair` after `since`, plus the cursor for the next call.
    ///
    /// # Errors
    ///
    /// Any network, HTTP or payload failure. Errors are transient from the
    /// caller's point of view.
    async fn history(&self, pair: &Pair, since: Cursor) -> Result<HistoryPage, Error>;

    /// Current ticker of `pair`.
    async fn ticker(&self, pair: &Pair) -> Result<Ticker, Error>;

    /// Order book of `pair`, at most `limit` levels per side.
    async fn orderbook(&self, pair: &Pair, limit: usize) -> Result<Orderbook, Error>;

    /// Authenticated operations, when the exchange adapter supports them.
    fn account(&self) -> Option<&dyn Account> {
        None
    }
}

/// Authenticated account operations.
///
/// Use with caution: [`Account::trade`] places real orders.
#[async_trait]
pub trait Account: Send + Sync {
    /// Balance of every currency on the account.
    async fn balance(&self) -> Result<Balances, Error>;

    /// Place a limit order and return its id.
    async fn trade(&self, side: Side, pair: &Pair, price: f64, amount: f64)
        -> Result<i64, Error>;

    /// Cancel an open order; `false` if the exchange refused.
    async fn cancel(&self, order_id: i64) -> Result<bool, Error>;

    /// Currently open orders.
    async fn orders(&self) -> Result<Vec<Order>, Error>;

    /// Most recent balance-changing operations, newest first.
    async fn transactions(&self, limit: usize) -> Result<Vec<Transaction>, Error>;
}
