//! Executed trades.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, TimeZone};
use serde::{Deserialize, Deserializer, Serialize};

use super::error::DomainError;
use super::symbol::Pair;

/// Direction of a trade, seen from the taker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => f.write_str("Buy"),
            Self::Sell => f.write_str("Sell"),
        }
    }
}

impl FromStr for Side {
    type Err = DomainError;

    /// Exchanges disagree on naming; `bid`/`ask` are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" | "bid" => Ok(Self::Buy),
            "sell" | "ask" => Ok(Self::Sell),
            _ => Err(DomainError::UnknownSide {
                input: s.to_owned(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for Side {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A single executed trade on an exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Exchange-assigned id, non-decreasing over time for a pair.
    pub id: i64,
    /// Unix time in seconds.
    pub timestamp: i64,
    pub side: Side,
    pub price: f64,
    pub amount: f64,
    pub pair: Pair,
}

impl Trade {
    pub fn new(id: i64, timestamp: i64, side: Side, price: f64, amount: f64, pair: Pair) -> Self {
        Self {
            id,
            timestamp,
            side,
            price,
            amount,
            pair,
        }
    }
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let time = Local
            .timestamp_opt(self.timestamp, 0)
            .single()
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| self.timestamp.to_string());
        write!(
            f,
            "{} {}\t{}\t{:.3}@{:.3}\t!{}",
            self.pair, self.id, self.side, self.amount, self.price, time
        )
    }
}
