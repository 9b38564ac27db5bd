use std::collections::VecDeque;
use std::time::Duration;

use crate::domain::{Cursor, Trade};
use crate::infrastructure::exchange::backoff::{next_wait, BackoffPolicy, Outcome};
use crate::port::HistoryPage;

use super::options::Since;

/// Everything one poller knows about its feed.
///
/// Owned by the poller task alone; nothing here is shared.
#[derive(Debug)]
pub(super) struct PollerState {
    /// Highest trade id ever accepted; `-1` before the first trade.
    last_seen_id: i64,
    cursor: Cursor,
    consecutive_failures: u32,
    pending: VecDeque<Trade>,
    wait: Duration,
    /// Discard the first successful batch instead of delivering it.
    priming: bool,
    policy: BackoffPolicy,
}

impl PollerState {
    pub(super) fn new(since: Since, policy: BackoffPolicy) -> Self {
        let (cursor, priming) = match since {
            Since::Now => (Cursor::Latest, true),
            Since::Recent => (Cursor::Latest, false),
            Since::Cursor(cursor) => (cursor, false),
        };
        let last_seen_id = match cursor {
            Cursor::Id(id) => id,
            _ => -1,
        };
        Self {
            last_seen_id,
            cursor,
            consecutive_failures: 0,
            pending: VecDeque::new(),
            wait: policy.initial(),
            priming,
            policy,
        }
    }

    /// Absorb a successful page and return how many trades were queued.
    ///
    /// Trades at or below the highest id seen so far are dropped, the rest
    /// are queued in ascending id order with duplicates removed.
    pub(super) fn on_success(&mut self, page: HistoryPage) -> usize {
        let mut fresh: Vec<Trade> = page
            .trades
            .into_iter()
            .filter(|t| t.id > self.last_seen_id)
            .collect();
        fresh.sort_by_key(|t| t.id);
        fresh.dedup_by_key(|t| t.id);

        if let Some(newest) = fresh.last() {
            self.last_seen_id = newest.id;
        }
        self.cursor = self.cursor.advance(page.next);
        self.consecutive_failures = 0;
        self.wait = next_wait(self.wait, Outcome::Success, &self.policy);

        if std::mem::take(&mut self.priming) {
            return 0;
        }
        let queued = fresh.len();
        self.pending.extend(fresh);
        queued
    }

    /// Record a failed fetch. Cursor and dedup state stay untouched.
    pub(super) fn on_failure(&mut self) {
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
        self.wait = next_wait(self.wait, Outcome::Failure, &self.policy);
    }

    /// Sleep before the next fetch, net of the time the last one took.
    pub(super) fn delay_after(&self, elapsed: Duration) -> Duration {
        self.wait.saturating_sub(elapsed)
    }

    pub(super) fn pop(&mut self) -> Option<Trade> {
        self.pending.pop_front()
    }

    pub(super) fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub(super) fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub(super) const fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub(super) const fn last_seen_id(&self) -> i64 {
        self.last_seen_id
    }

    pub(super) const fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    pub(super) const fn wait(&self) -> Duration {
        self.wait
    }
}
