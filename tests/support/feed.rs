use std::time::Duration;

use tradetail::infrastructure::exchange::Streamer;

/// Ids of the next `n` trades, or fewer if the feed ends or stalls for
/// `patience`.
pub async fn next_ids(streamer: &mut Streamer, n: usize, patience: Duration) -> Vec<i64> {
    let mut ids = Vec::with_capacity(n);
    while ids.len() < n {
        match tokio::time::timeout(patience, streamer.next()).await {
            Ok(Some(trade)) => ids.push(trade.id),
            Ok(None) | Err(_) => break,
        }
    }
    ids
}
