use async_trait::async_trait;
use serde_json::Value;

use super::{dto, NAME, PUBLIC_API};
use crate::adapter::outbound::http::get_json;
use crate::domain::{Cursor, CursorKind, Orderbook, Pair, Ticker};
use crate::error::{ConfigError, Result};
use crate::port::{Client, HistoryPage};

/// Public-endpoint client for BTC-E.
pub struct BtceClient {
    http: reqwest::Client,
    base_url: String,
}

impl BtceClient {
    #[must_use]
    pub fn new(http: reqwest::Client) -> Self {
        Self::with_base_url(http, PUBLIC_API)
    }

    /// Client talking to a different API root, e.g. a mirror or a test
    /// server.
    #[must_use]
    pub fn with_base_url(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn history_url(&self, pair: &Pair, since: Cursor) -> Result<String> {
        let mut url = format!("{}/3/trades/{}", self.base_url, pair.lower());
        match since {
            Cursor::Latest => {}
            Cursor::Timestamp(ts) if ts > 0 => url.push_str(&format!("?since={ts}")),
            Cursor::Timestamp(_) => {}
            Cursor::Id(_) => {
                return Err(ConfigError::CursorMismatch {
                    exchange: NAME,
                    expected: CursorKind::ByTimestamp,
                    cursor: since,
                }
                .into())
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl Client for BtceClient {
    fn name(&self) -> &'static str {
        NAME
    }

    fn cursor_kind(&self) -> CursorKind {
        CursorKind::ByTimestamp
    }

    async fn history(&self, pair: &Pair, since: Cursor) -> Result<HistoryPage> {
        let url = self.history_url(pair, since)?;
        let body: Value = get_json(&self.http, NAME, &url).await?;
        dto::history(body, pair, since)
    }

    async fn ticker(&self, pair: &Pair) -> Result<Ticker> {
        let url = format!("{}/3/ticker/{}", self.base_url, pair.lower());
        let body: Value = get_json(&self.http, NAME, &url).await?;
        dto::ticker(body, pair)
    }

    async fn orderbook(&self, pair: &Pair, limit: usize) -> Result<Orderbook> {
        let url = format!("{}/3/depth/{}?limit={limit}", self.base_url, pair.lower());
        let body: Value = get_json(&self.http, NAME, &url).await?;
        dto::orderbook(body, pair, limit)
    }
}
