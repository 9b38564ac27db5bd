//! Public market data: tickers and order books.

use serde::{Deserialize, Serialize};

/// Snapshot of a market's best prices and daily range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    pub buy: f64,
    pub sell: f64,
    pub high: f64,
    pub low: f64,
    pub last: f64,
    pub volume: f64,
}

/// A single price level of an order book.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub price: f64,
    pub amount: f64,
}

/// Market depth, best levels first on each side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Orderbook {
    pub asks: Vec<Level>,
    pub bids: Vec<Level>,
}

impl Orderbook {
    /// Lowest ask, if any.
    pub fn best_ask(&self) -> Option<&Level> {
        self.asks.first()
    }

    /// Highest bid, if any.
    pub fn best_bid(&self) -> Option<&Level> {
        self.bids.first()
    }

    /// Difference between best ask and best bid.
    pub fn spread(&self) -> Option<f64> {
        Some(self.best_ask()?.price - self.best_bid()?.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spread_requires_both_sides() {
        let mut book = Orderbook::default();
        assert_eq!(book.spread(), None);

        book.asks.push(Level {
            price: 101.0,
            amount: 1.0,
        });
        assert_eq!(book.spread(), None);

        book.bids.push(Level {
            price: 99.5,
            amount: 2.0,
        });
        assert_eq!(book.spread(), Some(1.5));
    }
}
