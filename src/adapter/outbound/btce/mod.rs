//! BTC-E public market data.
//!
//! Trade history pages by timestamp: `since` is the Unix time of the newest
//! trade already seen, and the exchange answers with its recent window
//! starting there, newest first.

mod client;
mod dto;

use std::sync::Arc;

pub use client::BtceClient;

use crate::infrastructure::exchange::Registry;
use crate::port::Client;

/// Registry name.
pub const NAME: &str = "btce";

/// Public API root.
pub const PUBLIC_API: &str = "https://btc-e.com/api";

/// Add the BTC-E factory to `registry`.
pub fn register(registry: &Registry) {
    registry.register(NAME, |_credentials, transport| {
        let http = transport.build_client()?;
        Ok(Arc::new(BtceClient::new(http)) as Arc<dyn Client>)
    });
}
