//! Polling-to-streaming engine.
//!
//! [`tail`] turns a client's pull-style [`Client::history`] into a push feed
//! of new trades. One background task per feed owns all poller state:
//!
//! ```text
//!        ┌───────────── cancel ─────────────┐
//!        ▼                                  │
//!   ┌─────────┐  history   ┌─────────┐  trades   ┌──────────┐
//!   │  timer  ├───────────►│  fetch  ├──────────►│ pending  ├──► Streamer
//!   └────▲────┘            └────┬────┘  dedup    └──────────┘
//!        └── wait - elapsed ────┘
//! ```
//!
//! Fetching and delivery run concurrently inside one `select!` loop: a slow
//! consumer never delays the next fetch, and a slow fetch never delays the
//! delivery of trades already queued. Only the delivery order is serialized.

mod options;
mod state;


use std::sync::Arc;
use std::time::Duration;

use futures_util::future::{BoxFuture, OptionFuture};
use tokio::sync::{mpsc, watch};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::domain::{Pair, Trade};
use crate::error::{ConfigError, Result};
use crate::port::{Client, HistoryPage};

use self::state::PollerState;
use super::streamer::{cancelled_signal, CancelHandle, Streamer};

pub use options::{Since, TailOptions};

type Fetch = BoxFuture<'static, (Result<HistoryPage>, Duration)>;

/// Follow the trade history of `pair` on `client`.
///
/// Spawns the poller on the current tokio runtime and returns the consumer
/// handle. The first fetch is issued immediately.
///
/// # Errors
///
/// Configuration errors only: invalid options, or a start cursor whose kind
/// does not match [`Client::cursor_kind`]. Once running, the feed never
/// fails; fetch errors are logged and retried with backoff.
///
/// # Panics
///
/// When called outside a tokio runtime.
pub fn tail(client: Arc<dyn Client>, pair: Pair, options: TailOptions) -> Result<Streamer> {
    options.validate()?;
    if let Since::Cursor(cursor) = options.since {
        let expected = client.cursor_kind();
        if !cursor.fits(expected) {
            return Err(ConfigError::CursorMismatch {
                exchange: client.name(),
                expected,
                cursor,
            }
            .into());
        }
    }

    let (trades_tx, trades_rx) = mpsc::channel(options.buffer);
    let (cancel, cancel_rx) = CancelHandle::new();

    let poller = Poller {
        state: PollerState::new(options.since, options.policy()),
        client,
        pair,
        trades: trades_tx,
        cancel: cancel_rx,
    };
    tokio::spawn(poller.run());

    Ok(Streamer::new(trades_rx, cancel))
}

/// Background half of a feed.
struct Poller {
    client: Arc<dyn Client>,
    pair: Pair,
    state: PollerState,
    trades: mpsc::Sender<Trade>,
    cancel: watch::Receiver<bool>,
}

impl Poller {
    async fn run(mut self) {
        let exchange = self.client.name();
        info!(
            exchange,
            pair = %self.pair,
            cursor = %self.state.cursor(),
            "Tail started"
        );

        let timer = tokio::time::sleep(Duration::ZERO);
        tokio::pin!(timer);
        let mut timer_armed = true;
        let mut inflight: Option<Fetch> = None;

        loop {
            if *self.cancel.borrow() {
                break;
            }

            tokio::select! {
                biased;

                () = cancelled_signal(&mut self.cancel) => break,

                () = self.trades.closed() => {
                    debug!(exchange, pair = %self.pair, "Consumer gone");
                    break;
                }

                Some((result, elapsed)) = OptionFuture::from(inflight.as_mut()), if inflight.is_some() => {
                    inflight = None;
                    absorb(&mut self.state, exchange, &self.pair, result, elapsed);
                    timer.as_mut().reset(Instant::now() + self.state.delay_after(elapsed));
                    timer_armed = true;
                }

                permit = self.trades.reserve(), if self.state.has_pending() => {
                    let Ok(permit) = permit else {
                        debug!(exchange, pair = %self.pair, "Consumer gone");
                        break;
                    };
                    if let Some(trade) = self.state.pop() {
                        permit.send(trade);
                    }
                }

                () = &mut timer, if timer_armed && inflight.is_none() => {
                    timer_armed = false;
                    inflight = Some(self.fetch());
                }
            }
        }

        info!(
            exchange,
            pair = %self.pair,
            last_id = self.state.last_seen_id(),
            dropped = self.state.pending_len(),
            "Tail stopped"
        );
    }

    fn fetch(&self) -> Fetch {
        let client = Arc::clone(&self.client);
        let pair = self.pair.clone();
        let cursor = self.state.cursor();
        Box::pin(async move {
            let started = Instant::now();
            let result = client.history(&pair, cursor).await;
            (result, started.elapsed())
        })
    }
}

/// Fold one fetch result into `state`.
fn absorb(
    state: &mut PollerState,
    exchange: &'static str,
    pair: &Pair,
    result: Result<HistoryPage>,
    elapsed: Duration,
) {
    match result {
        Ok(page) => {
            let fetched = page.trades.len();
            let queued = state.on_success(page);
            debug!(
                exchange,
                pair = %pair,
                fetched,
                queued,
                cursor = %state.cursor(),
                elapsed_ms = elapsed.as_millis(),
                "History fetched"
            );
        }
        Err(e) => {
            state.on_failure();
            warn!(
                exchange,
                pair = %pair,
                error = %e,
                failures = state.consecutive_failures(),
                retry_in_ms = state.wait().as_millis(),
                "History fetch failed, backing off"
            );
        }
    }
}
