//! BTC-E response payloads.
//!
//! Every public v3 endpoint wraps its answer in an object keyed by the
//! lower-case pair name, e.g. `{"btc_usd": [...]}`.

use serde::Deserialize;
use serde_json::Value;

use super::NAME;
use crate::adapter::outbound::http::{api_error, decode_each};
use crate::domain::{Cursor, Level, Orderbook, Pair, Side, Ticker, Trade};
use crate::error::{ExchangeError, Result};
use crate::port::HistoryPage;

#[derive(Debug, Deserialize)]
struct BtceTrade {
    tid: i64,
    price: f64,
    amount: f64,
    #[serde(rename = "type")]
    side: Side,
    timestamp: i64,
}

#[derive(Debug, Deserialize)]
struct BtceTicker {
    #[serde(default)]
    high: f64,
    #[serde(default)]
    low: f64,
    #[serde(default)]
    last: f64,
    #[serde(default)]
    buy: f64,
    #[serde(default)]
    sell: f64,
    /// Volume in the base currency.
    #[serde(default)]
    vol_cur: f64,
}

#[derive(Debug, Default, Deserialize)]
struct BtceDepth {
    #[serde(default)]
    asks: Vec<[f64; 2]>,
    #[serde(default)]
    bids: Vec<[f64; 2]>,
}

/// Take the section of `body` belonging to `pair`.
fn section(mut body: Value, pair: &Pair) -> Result<Value> {
    if let Some(error) = api_error(NAME, &body) {
        return Err(error.into());
    }
    body.get_mut(pair.lower())
        .map(Value::take)
        .ok_or_else(|| {
            ExchangeError::Api {
                exchange: NAME,
                message: format!("response has no {} section", pair.lower()),
            }
            .into()
        })
}

/// Parse a `/3/trades/{pair}` answer.
///
/// Trades come back oldest first. `next` is the newest timestamp in the
/// page, or `prior` when the page is empty.
pub(super) fn history(body: Value, pair: &Pair, prior: Cursor) -> Result<HistoryPage> {
    let items = match section(body, pair)? {
        Value::Array(items) => items,
        other => {
            return Err(ExchangeError::Api {
                exchange: NAME,
                message: format!("expected a trade list, got {other}"),
            }
            .into())
        }
    };

    let mut raw: Vec<BtceTrade> = decode_each(NAME, items);
    raw.reverse();

    let next = raw
        .iter()
        .map(|t| t.timestamp)
        .max()
        .map_or(prior, Cursor::Timestamp);
    let trades = raw
        .into_iter()
        .map(|t| Trade::new(t.tid, t.timestamp, t.side, t.price, t.amount, pair.clone()))
        .collect();
    Ok(HistoryPage::new(trades, next))
}

/// Parse a `/3/ticker/{pair}` answer.
pub(super) fn ticker(body: Value, pair: &Pair) -> Result<Ticker> {
    let raw: BtceTicker = serde_json::from_value(section(body, pair)?)?;
    Ok(Ticker {
        buy: raw.buy,
        sell: raw.sell,
        high: raw.high,
        low: raw.low,
        last: raw.last,
        volume: raw.vol_cur,
    })
}

/// Parse a `/3/depth/{pair}` answer, keeping at most `limit` levels a side.
pub(super) fn orderbook(body: Value, pair: &Pair, limit: usize) -> Result<Orderbook> {
    let raw: BtceDepth = serde_json::from_value(section(body, pair)?)?;
    let levels = |side: Vec<[f64; 2]>| {
        side.into_iter()
            .take(limit)
            .map(|[price, amount]| Level { price, amount })
            .collect()
    };
    Ok(Orderbook {
        asks: levels(raw.asks),
        bids: levels(raw.bids),
    })
}
