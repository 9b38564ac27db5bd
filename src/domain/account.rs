//! Account-side records returned by authenticated exchange APIs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::symbol::{Pair, Symbol};
use super::trade::Side;

/// Balances per currency.
pub type Balances = HashMap<Symbol, f64>;

/// An open order on the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub timestamp: i64,
    pub side: Side,
    pub price: f64,
    /// Amount still open.
    pub remain: f64,
    /// Original amount.
    pub amount: f64,
    pub pair: Pair,
}

/// A change to the account balance: a fill, deposit, withdrawal or fee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub timestamp: i64,
    pub amounts: HashMap<Symbol, f64>,
    pub description: String,
}
