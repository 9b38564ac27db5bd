//! Handlers for the public market data commands.

use tabled::{Table, Tabled};

use super::output;
use crate::domain::{Cursor, Level, Pair};
use crate::error::Result;
use crate::infrastructure::exchange::tail::Since;
use crate::port::Client;

#[derive(Tabled)]
struct LevelRow {
    #[tabled(rename = "Side")]
    side: &'static str,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl LevelRow {
    fn new(side: &'static str, level: &Level) -> Self {
        Self {
            side,
            price: format!("{:.3}", level.price),
            amount: format!("{:.3}", level.amount),
        }
    }
}

/// Print one page of history, oldest first, then the cursor for the next.
pub(super) async fn history(client: &dyn Client, pair: &Pair, since: Option<Since>) -> Result<()> {
    let cursor = match since {
        Some(Since::Cursor(cursor)) => cursor,
        _ => Cursor::Latest,
    };
    let mut page = client.history(pair, cursor).await?;
    page.trades.sort_by_key(|t| t.id);

    output::section(&format!("{} {pair} trades", client.name()));
    for trade in &page.trades {
        output::trade(trade);
    }
    output::field("Count", page.trades.len());
    output::field("Next", page.next);
    Ok(())
}

pub(super) async fn ticker(client: &dyn Client, pair: &Pair) -> Result<()> {
    let ticker = client.ticker(pair).await?;

    output::section(&format!("{} {pair} ticker", client.name()));
    output::field("Last", format!("{:.3}", ticker.last));
    output::field("Buy", format!("{:.3}", ticker.buy));
    output::field("Sell", format!("{:.3}", ticker.sell));
    output::field("High", format!("{:.3}", ticker.high));
    output::field("Low", format!("{:.3}", ticker.low));
    output::field("Volume", format!("{:.3}", ticker.volume));
    Ok(())
}

/// Print asks (highest first) above bids (highest first).
pub(super) async fn orderbook(client: &dyn Client, pair: &Pair, limit: usize) -> Result<()> {
    let book = client.orderbook(pair, limit).await?;

    output::section(&format!("{} {pair} order book", client.name()));
    if output::is_json() {
        for level in &book.asks {
            output::field("ask", format!("{} {}", level.price, level.amount));
        }
        for level in &book.bids {
            output::field("bid", format!("{} {}", level.price, level.amount));
        }
        return Ok(());
    }

    let rows: Vec<LevelRow> = book
        .asks
        .iter()
        .rev()
        .map(|l| LevelRow::new("ask", l))
        .chain(book.bids.iter().map(|l| LevelRow::new("bid", l)))
        .collect();
    println!();
    output::table(&Table::new(rows).to_string());
    if let Some(spread) = book.spread() {
        output::field("Spread", format!("{spread:.3}"));
    }
    Ok(())
}
