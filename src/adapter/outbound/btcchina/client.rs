use async_trait::async_trait;
use serde_json::Value;

use super::{dto, DATA_API, NAME};
use crate::adapter::outbound::http::get_json;
use crate::domain::{Cursor, CursorKind, Orderbook, Pair, Ticker};
use crate::error::{ConfigError, ExchangeError, Result};
use crate::port::{Client, HistoryPage};

/// Public-endpoint client for BTCChina.
pub struct BtcchinaClient {
    http: reqwest::Client,
    base_url: String,
}

impl BtcchinaClient {
    #[must_use]
    pub fn new(http: reqwest::Client) -> Self {
        Self::with_base_url(http, DATA_API)
    }

    #[must_use]
    pub fn with_base_url(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn check_pair(pair: &Pair) -> Result<()> {
        if *pair == Pair::btc_cny() {
            Ok(())
        } else {
            Err(ExchangeError::UnsupportedPair {
                exchange: NAME,
                pair: pair.clone(),
            }
            .into())
        }
    }

    fn history_url(&self, since: Cursor) -> Result<String> {
        let url = format!("{}/historydata", self.base_url);
        match since {
            Cursor::Latest => Ok(url),
            Cursor::Id(id) => Ok(format!("{url}?since={id}")),
            Cursor::Timestamp(_) => Err(ConfigError::CursorMismatch {
                exchange: NAME,
                expected: CursorKind::ById,
                cursor: since,
            }
            .into()),
        }
    }
}

#[async_trait]
impl Client for BtcchinaClient {
    fn name(&self) -> &'static str {
        NAME
    }

    fn cursor_kind(&self) -> CursorKind {
        CursorKind::ById
    }

    async fn history(&self, pair: &Pair, since: Cursor) -> Result<HistoryPage> {
        Self::check_pair(pair)?;
        let url = self.history_url(since)?;
        let body: Value = get_json(&self.http, NAME, &url).await?;
        dto::history(body, pair, since)
    }

    async fn ticker(&self, pair: &Pair) -> Result<Ticker> {
        Self::check_pair(pair)?;
        let url = format!("{}/ticker", self.base_url);
        let body: Value = get_json(&self.http, NAME, &url).await?;
        dto::ticker(body)
    }

    async fn orderbook(&self, pair: &Pair, limit: usize) -> Result<Orderbook> {
        Self::check_pair(pair)?;
        let url = format!("{}/orderbook?limit={limit}", self.base_url);
        let body: Value = get_json(&self.http, NAME, &url).await?;
        dto::orderbook(body, limit)
    }
}
