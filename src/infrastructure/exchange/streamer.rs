//! Consumer side of a trade feed.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::domain::Trade;

/// Level-triggered stop signal shared between a [`Streamer`] and its poller.
///
/// Cloning is cheap. Once cancelled, a handle stays cancelled. When every
/// handle (including the one inside the streamer) is dropped, the poller
/// stops as if cancelled.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl CancelHandle {
    pub(crate) fn new() -> (Self, watch::Receiver<bool>) {
        let (tx, rx) = watch::channel(false);
        (Self { tx: Arc::new(tx) }, rx)
    }

    /// Request shutdown of the feed.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}

/// Resolve once cancellation is requested or every handle is gone.
pub(crate) async fn cancelled_signal(rx: &mut watch::Receiver<bool>) {
    let _ = rx.wait_for(|cancelled| *cancelled).await;
}

/// Ongoing sequence of trades of one market, oldest first.
///
/// Every trade is yielded once, with strictly increasing ids. The sequence
/// ends only after [`cancel`](Self::cancel) (or a cancel through any cloned
/// [`CancelHandle`]); nothing is yielded after that, even if trades were
/// already buffered.
#[derive(Debug)]
pub struct Streamer {
    trades: mpsc::Receiver<Trade>,
    cancel: CancelHandle,
}

impl Streamer {
    pub(crate) fn new(trades: mpsc::Receiver<Trade>, cancel: CancelHandle) -> Self {
        Self { trades, cancel }
    }

    /// Wait for the next trade; `None` once the feed is cancelled.
    pub async fn next(&mut self) -> Option<Trade> {
        if self.cancel.is_cancelled() {
            return None;
        }
        let mut cancelled = self.cancel.subscribe();
        tokio::select! {
            biased;
            () = cancelled_signal(&mut cancelled) => None,
            trade = self.trades.recv() => trade,
        }
    }

    /// Request shutdown of the feed.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Handle that can cancel this feed from another task.
    #[must_use]
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }
}
