//! In-memory [`Account`] for testing account consumers.
//!
//! Orders never fill. Placing one reserves its funds, cancelling it
//! releases them, and both show up as transactions.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{Balances, Order, Pair, Side, Symbol, Transaction};
use crate::error::{ExchangeError, Result};
use crate::port::Account;

use super::domain::EPOCH;

const NAME: &str = "paper";

#[derive(Default)]
struct Book {
    balances: Balances,
    orders: Vec<Order>,
    transactions: Vec<Transaction>,
    next_id: i64,
}

impl Book {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn record(&mut self, amounts: HashMap<Symbol, f64>, description: String) {
        let id = self.next_id();
        self.transactions.push(Transaction {
            id,
            timestamp: EPOCH + id,
            amounts,
            description,
        });
    }
}

/// Funds reserved by an order: the currency and the amount.
fn reservation(side: Side, pair: &Pair, price: f64, amount: f64) -> (Symbol, f64) {
    match side {
        Side::Buy => (pair.base().clone(), price * amount),
        Side::Sell => (pair.target().clone(), amount),
    }
}

#[derive(Default)]
pub struct PaperAccount {
    book: Mutex<Book>,
}

impl PaperAccount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `amount` of `symbol` available.
    pub fn with_balance(self, symbol: &str, amount: f64) -> Self {
        if let Ok(symbol) = Symbol::new(symbol) {
            self.book.lock().balances.insert(symbol, amount);
        }
        self
    }
}

#[async_trait]
impl Account for PaperAccount {
    async fn balance(&self) -> Result<Balances> {
        Ok(self.book.lock().balances.clone())
    }

    async fn trade(&self, side: Side, pair: &Pair, price: f64, amount: f64) -> Result<i64> {
        let mut book = self.book.lock();
        let (symbol, needed) = reservation(side, pair, price, amount);
        let available = book.balances.get(&symbol).copied().unwrap_or_default();
        if available < needed {
            return Err(ExchangeError::Api {
                exchange: NAME,
                message: format!("insufficient {symbol}: {available} < {needed}"),
            }
            .into());
        }

        book.balances.insert(symbol.clone(), available - needed);
        let id = book.next_id();
        book.orders.push(Order {
            id,
            timestamp: EPOCH + id,
            side,
            price,
            remain: amount,
            amount,
            pair: pair.clone(),
        });
        book.record(
            HashMap::from([(symbol, -needed)]),
            format!("{side} {amount} {pair} @ {price}"),
        );
        Ok(id)
    }

    async fn cancel(&self, order_id: i64) -> Result<bool> {
        let mut book = self.book.lock();
        let Some(index) = book.orders.iter().position(|o| o.id == order_id) else {
            return Ok(false);
        };
        let order = book.orders.remove(index);
        let (symbol, reserved) = reservation(order.side, &order.pair, order.price, order.remain);
        *book.balances.entry(symbol.clone()).or_default() += reserved;
        book.record(
            HashMap::from([(symbol, reserved)]),
            format!("cancel order {order_id}"),
        );
        Ok(true)
    }

    async fn orders(&self) -> Result<Vec<Order>> {
        Ok(self.book.lock().orders.clone())
    }

    async fn transactions(&self, limit: usize) -> Result<Vec<Transaction>> {
        Ok(self
            .book
            .lock()
            .transactions
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect())
    }
}
