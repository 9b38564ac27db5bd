//! Handler for the `balance` command.

use super::output;
use crate::error::{ExchangeError, Result};
use crate::port::Client;

pub(super) async fn balance(client: &dyn Client) -> Result<()> {
    let Some(account) = client.account() else {
        return Err(ExchangeError::Unsupported {
            exchange: client.name(),
            operation: "account balance",
        }
        .into());
    };

    let balances = account.balance().await?;
    let mut rows: Vec<_> = balances.into_iter().collect();
    rows.sort_by(|a, b| a.0.cmp(&b.0));

    output::section(&format!("{} balance", client.name()));
    for (symbol, amount) in rows {
        output::field(symbol.as_str(), format!("{amount:.8}"));
    }
    Ok(())
}
