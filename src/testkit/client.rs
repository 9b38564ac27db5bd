//! Mock [`Client`] implementation for testing.
//!
//! [`ScriptedClient`] replays a queue of scripted history replies and
//! records every call, so tests can assert both what the poller delivered
//! and how it paged and paced its fetches.

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::time::Instant;

use crate::domain::{Cursor, CursorKind, Orderbook, Pair, Ticker};
use crate::error::{Error, ExchangeError, Result};
use crate::port::{Account, Client, HistoryPage};

use super::account::PaperAccount;

/// Name every scripted client reports.
pub const NAME: &str = "mock";

enum Step {
    Reply(Result<HistoryPage>),
    Hang,
}

/// One recorded `history` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Call {
    pub cursor: Cursor,
    pub at: Instant,
}

/// A client with scripted `history` replies.
///
/// Each `history` call pops the next scripted step. Once the script is
/// exhausted every call answers an empty page that keeps the cursor, unless
/// [`hang_when_exhausted`](Self::hang_when_exhausted) was requested.
pub struct ScriptedClient {
    kind: CursorKind,
    script: Mutex<VecDeque<Step>>,
    calls: Mutex<Vec<Call>>,
    latency: Duration,
    hang_when_exhausted: bool,
    ticker: Ticker,
    orderbook: Orderbook,
    account: Option<PaperAccount>,
}

impl ScriptedClient {
    pub fn new(kind: CursorKind) -> Self {
        Self {
            kind,
            script: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            latency: Duration::ZERO,
            hang_when_exhausted: false,
            ticker: Ticker::default(),
            orderbook: Orderbook::default(),
            account: None,
        }
    }

    pub fn with_pages(self, pages: impl IntoIterator<Item = HistoryPage>) -> Self {
        for page in pages {
            self.push_page(page);
        }
        self
    }

    /// Delay every `history` reply by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn hang_when_exhausted(mut self) -> Self {
        self.hang_when_exhausted = true;
        self
    }

    pub fn with_ticker(mut self, ticker: Ticker) -> Self {
        self.ticker = ticker;
        self
    }

    pub fn with_orderbook(mut self, orderbook: Orderbook) -> Self {
        self.orderbook = orderbook;
        self
    }

    pub fn with_account(mut self, account: PaperAccount) -> Self {
        self.account = Some(account);
        self
    }

    pub fn push_page(&self, page: HistoryPage) {
        self.script.lock().push_back(Step::Reply(Ok(page)));
    }

    /// Queue a transient exchange failure.
    pub fn push_error(&self, message: &str) {
        let error = ExchangeError::Api {
            exchange: NAME,
            message: message.to_string(),
        };
        self.script
            .lock()
            .push_back(Step::Reply(Err(Error::from(error))));
    }

    /// Queue a call that never answers.
    pub fn push_hang(&self) {
        self.script.lock().push_back(Step::Hang);
    }

    /// Number of `history` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    /// Cursor passed to each `history` call, in call order.
    pub fn cursors(&self) -> Vec<Cursor> {
        self.calls.lock().iter().map(|c| c.cursor).collect()
    }

    /// Gaps between consecutive `history` calls.
    pub fn gaps(&self) -> Vec<Duration> {
        self.calls
            .lock()
            .windows(2)
            .map(|w| w[1].at.duration_since(w[0].at))
            .collect()
    }

    /// Scripted steps not consumed yet.
    pub fn remaining(&self) -> usize {
        self.script.lock().len()
    }
}

#[async_trait]
impl Client for ScriptedClient {
    fn name(&self) -> &'static str {
        NAME
    }

    fn cursor_kind(&self) -> CursorKind {
        self.kind
    }

    async fn history(&self, _pair: &Pair, since: Cursor) -> Result<HistoryPage> {
        self.calls.lock().push(Call {
            cursor: since,
            at: Instant::now(),
        });
        let step = self.script.lock().pop_front();

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        match step {
            Some(Step::Reply(reply)) => reply,
            Some(Step::Hang) => std::future::pending().await,
            None if self.hang_when_exhausted => std::future::pending().await,
            None => Ok(HistoryPage::new(Vec::new(), since)),
        }
    }

    async fn ticker(&self, _pair: &Pair) -> Result<Ticker> {
        Ok(self.ticker)
    }

    async fn orderbook(&self, _pair: &Pair, limit: usize) -> Result<Orderbook> {
        let mut book = self.orderbook.clone();
        book.asks.truncate(limit);
        book.bids.truncate(limit);
        Ok(book)
    }

    fn account(&self) -> Option<&dyn Account> {
        self.account.as_ref().map(|a| a as &dyn Account)
    }
}
