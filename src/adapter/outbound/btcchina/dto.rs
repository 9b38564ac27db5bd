//! BTCChina response payloads. Numbers often arrive as strings.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::NAME;
use crate::adapter::outbound::http::{api_error, decode_each};
use crate::domain::{Cursor, Level, Orderbook, Pair, Side, Ticker, Trade};
use crate::error::{ExchangeError, Result};
use crate::port::HistoryPage;

#[derive(Deserialize)]
#[serde(untagged)]
enum Number {
    Int(i64),
    Float(f64),
    Text(String),
}

fn parse_i64<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<i64, D::Error> {
    match Number::deserialize(deserializer)? {
        Number::Int(v) => Ok(v),
        Number::Float(v) => Err(serde::de::Error::custom(format!("expected integer, got {v}"))),
        Number::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn parse_f64<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<f64, D::Error> {
    match Number::deserialize(deserializer)? {
        #[allow(clippy::cast_precision_loss)]
        Number::Int(v) => Ok(v as f64),
        Number::Float(v) => Ok(v),
        Number::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Deserialize)]
struct BtcchinaTrade {
    #[serde(deserialize_with = "parse_i64")]
    tid: i64,
    #[serde(deserialize_with = "parse_i64")]
    date: i64,
    #[serde(deserialize_with = "parse_f64")]
    price: f64,
    #[serde(deserialize_with = "parse_f64")]
    amount: f64,
    #[serde(rename = "type")]
    side: Side,
}

#[derive(Debug, Deserialize)]
struct TickerEnvelope {
    ticker: BtcchinaTicker,
}

#[derive(Debug, Deserialize)]
struct BtcchinaTicker {
    #[serde(deserialize_with = "parse_f64")]
    buy: f64,
    #[serde(deserialize_with = "parse_f64")]
    sell: f64,
    #[serde(deserialize_with = "parse_f64")]
    last: f64,
    #[serde(deserialize_with = "parse_f64")]
    vol: f64,
    #[serde(deserialize_with = "parse_f64")]
    high: f64,
    #[serde(deserialize_with = "parse_f64")]
    low: f64,
}

#[derive(Debug, Deserialize)]
struct BtcchinaDepth {
    #[serde(default)]
    asks: Vec<[f64; 2]>,
    #[serde(default)]
    bids: Vec<[f64; 2]>,
}

/// Parse a `/historydata` answer, a bare list of trades.
///
/// `next` is the largest id in the page, or `prior` when it is empty.
pub(super) fn history(body: Value, pair: &Pair, prior: Cursor) -> Result<HistoryPage> {
    let items = match body {
        Value::Array(items) => items,
        other => {
            return Err(api_error(NAME, &other)
                .unwrap_or_else(|| ExchangeError::Api {
                    exchange: NAME,
                    message: format!("expected a trade list, got {other}"),
                })
                .into())
        }
    };

    let raw: Vec<BtcchinaTrade> = decode_each(NAME, items);
    let next = raw.iter().map(|t| t.tid).max().map_or(prior, Cursor::Id);
    let trades = raw
        .into_iter()
        .map(|t| Trade::new(t.tid, t.date, t.side, t.price, t.amount, pair.clone()))
        .collect();
    Ok(HistoryPage::new(trades, next))
}

pub(super) fn ticker(body: Value) -> Result<Ticker> {
    let TickerEnvelope { ticker: raw } = serde_json::from_value(body)?;
    Ok(Ticker {
        buy: raw.buy,
        sell: raw.sell,
        high: raw.high,
        low: raw.low,
        last: raw.last,
        volume: raw.vol,
    })
}

/// Parse an `/orderbook` answer: asks cheapest first, bids dearest first,
/// at most `limit` levels each.
pub(super) fn orderbook(body: Value, limit: usize) -> Result<Orderbook> {
    let raw: BtcchinaDepth = serde_json::from_value(body)?;
    let levels = |side: Vec<[f64; 2]>| -> Vec<Level> {
        side.into_iter()
            .map(|[price, amount]| Level { price, amount })
            .collect()
    };

    let mut asks = levels(raw.asks);
    let mut bids = levels(raw.bids);
    asks.sort_by(|a, b| a.price.total_cmp(&b.price));
    bids.sort_by(|a, b| b.price.total_cmp(&a.price));
    asks.truncate(limit);
    bids.truncate(limit);
    Ok(Orderbook { asks, bids })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn history_parses_string_fields() {
        let body = json!([
            {"date": "1400000001", "price": 3100.5, "amount": 0.1, "tid": "101", "type": "buy"},
            {"date": "1400000002", "price": "3101", "amount": "0.25", "tid": "102", "type": "sell"}
        ]);
        let page = history(body, &Pair::btc_cny(), Cursor::Latest).unwrap();
        assert_eq!(page.trades.len(), 2);
        assert_eq!(page.trades[1].id, 102);
        assert_eq!(page.trades[1].timestamp, 1_400_000_002);
        assert_eq!(page.trades[1].price, 3101.0);
        assert_eq!(page.trades[1].side, Side::Sell);
        assert_eq!(page.next, Cursor::Id(102));
    }

    #[test]
    fn empty_history_keeps_prior_cursor() {
        let page = history(json!([]), &Pair::btc_cny(), Cursor::Id(99)).unwrap();
        assert_eq!(page.next, Cursor::Id(99));
    }

    #[test]
    fn malformed_trade_dropped() {
        let body = json!([
            {"date": "1", "price": 1.0, "amount": 1.0, "tid": "abc", "type": "buy"},
            {"date": "2", "price": 1.0, "amount": 1.0, "tid": "7", "type": "buy"}
        ]);
        let page = history(body, &Pair::btc_cny(), Cursor::Latest).unwrap();
        assert_eq!(page.trades.len(), 1);
        assert_eq!(page.next, Cursor::Id(7));
    }

    #[test]
    fn non_list_history_is_error() {
        assert!(history(json!({"error": "busy"}), &Pair::btc_cny(), Cursor::Latest).is_err());
        assert!(history(json!("oops"), &Pair::btc_cny(), Cursor::Latest).is_err());
    }

    #[test]
    fn ticker_parses_strings() {
        let body = json!({
            "ticker": {
                "high": "3200.00", "low": "3000.00", "buy": "3100.10",
                "sell": "3100.90", "last": "3100.50", "vol": "12345.6"
            }
        });
        let ticker = ticker(body).unwrap();
        assert_eq!(ticker.last, 3100.5);
        assert_eq!(ticker.volume, 12345.6);
    }

    #[test]
    fn orderbook_sorted_and_truncated() {
        let body = json!({
            "asks": [[3103.0, 1.0], [3101.0, 1.0], [3102.0, 1.0]],
            "bids": [[3098.0, 1.0], [3100.0, 1.0], [3099.0, 1.0]],
            "date": 1400000000
        });
        let book = orderbook(body, 2).unwrap();
        let asks: Vec<f64> = book.asks.iter().map(|l| l.price).collect();
        let bids: Vec<f64> = book.bids.iter().map(|l| l.price).collect();
        assert_eq!(asks, vec![3101.0, 3102.0]);
        assert_eq!(bids, vec![3100.0, 3099.0]);
    }
}
