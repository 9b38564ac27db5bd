//! BTCChina public market data.
//!
//! Only the BTC/CNY market is served. Trade history pages by trade id.

mod client;
mod dto;

use std::sync::Arc;

pub use client::BtcchinaClient;

use crate::infrastructure::exchange::Registry;
use crate::port::Client;

/// Registry name.
pub const NAME: &str = "btcchina";

/// Public market data root.
pub const DATA_API: &str = "https://data.btcchina.com/data";

pub fn register(registry: &Registry) {
    registry.register(NAME, |_credentials, transport| {
        let http = transport.build_client()?;
        Ok(Arc::new(BtcchinaClient::new(http)) as Arc<dyn Client>)
    });
}
