//! Handler for the `watch` command.

use std::sync::Arc;

use tracing::info;

use super::output;
use crate::domain::Pair;
use crate::error::Result;
use crate::infrastructure::exchange::tail::{tail, TailOptions};
use crate::port::Client;

/// Print every new trade until Ctrl-C.
pub(super) async fn execute(client: Arc<dyn Client>, pair: Pair, options: TailOptions) -> Result<()> {
    let mut streamer = tail(client, pair, options)?;

    let cancel = streamer.cancel_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
            cancel.cancel();
        }
    });

    while let Some(trade) = streamer.next().await {
        output::trade(&trade);
    }
    Ok(())
}
