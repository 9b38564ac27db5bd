//! Exchange-agnostic domain types.

mod account;
mod cursor;
mod market;
mod symbol;
mod trade;

pub mod error;

pub use account::{Balances, Order, Transaction};
pub use cursor::{Cursor, CursorKind};
pub use market::{Level, Orderbook, Ticker};
pub use symbol::{Pair, Symbol};
pub use trade::{Side, Trade};
