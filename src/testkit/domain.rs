//! Builders for domain primitives used across tests.
//!
//! Keeps tests focused on ids and cursors rather than on prices and pairs.

use crate::domain::{Cursor, Pair, Side, Trade};
use crate::port::HistoryPage;

/// Timestamp of trade `0`; trade `n` happens `n` seconds later.
pub const EPOCH: i64 = 1_400_000_000;

/// A BTC/USD buy with the given id.
pub fn trade(id: i64) -> Trade {
    Trade::new(id, EPOCH + id, Side::Buy, 100.0, 0.5, Pair::btc_usd())
}

/// Trades with the given ids, in the given order.
pub fn trades(ids: &[i64]) -> Vec<Trade> {
    ids.iter().copied().map(trade).collect()
}

/// A page of trades with the given ids and an explicit next cursor.
pub fn page(ids: &[i64], next: Cursor) -> HistoryPage {
    HistoryPage::new(trades(ids), next)
}

/// A page whose next cursor is the highest id in it, as id-paged
/// exchanges answer.
pub fn id_page(ids: &[i64]) -> HistoryPage {
    let next = ids.iter().copied().max().map_or(Cursor::Latest, Cursor::Id);
    page(ids, next)
}

/// Ids of `trades`, in order.
pub fn ids(trades: &[Trade]) -> Vec<i64> {
    trades.iter().map(|t| t.id).collect()
}
