//! JSON-over-HTTP plumbing shared by the exchange adapters.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ExchangeError, Result};

/// GET `url` and decode the body as `T`.
///
/// Non-2xx statuses become [`ExchangeError::Status`]; an undecodable body
/// is a [`serde_json::Error`]. Both count as transient failures upstream.
pub(crate) async fn get_json<T: DeserializeOwned>(
    http: &reqwest::Client,
    exchange: &'static str,
    url: &str,
) -> Result<T> {
    debug!(exchange, url, "GET");
    let response = http.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ExchangeError::Status { exchange, status }.into());
    }
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Decode every element of `items`, skipping the ones that do not fit `T`.
///
/// One malformed record must not cost the whole page, so each skip is only
/// logged.
pub(crate) fn decode_each<T: DeserializeOwned>(exchange: &'static str, items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<T>(item.clone()) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                warn!(exchange, error = %e, record = %item, "Skipping malformed record");
                None
            }
        })
        .collect()
}

/// Extract `"error"` from an `{"success": 0, "error": ".."}` style envelope.
pub(crate) fn api_error(exchange: &'static str, body: &Value) -> Option<ExchangeError> {
    let message = body.get("error")?.as_str()?;
    Some(ExchangeError::Api {
        exchange,
        message: message.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
    }

    #[test]
    fn malformed_items_are_skipped() {
        let items = vec![json!({"id": 1}), json!({"id": "x"}), json!(null), json!({"id": 3})];
        let decoded: Vec<Item> = decode_each("test", items);
        assert_eq!(decoded, vec![Item { id: 1 }, Item { id: 3 }]);
    }

    #[test]
    fn error_envelope_detected() {
        let body = json!({"success": 0, "error": "Invalid pair name"});
        let error = api_error("test", &body).unwrap();
        assert_eq!(error.to_string(), "test API error: Invalid pair name");
        assert!(api_error("test", &json!({"btc_usd": []})).is_none());
    }
}
