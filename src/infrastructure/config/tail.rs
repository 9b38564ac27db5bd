//! Trade feed configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::error::Result;
use crate::infrastructure::exchange::tail::{Since, TailOptions};

/// `[tail]` section: how the `watch` command follows a market.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TailConfig {
    /// Desired poll period (milliseconds).
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Ceiling of the wait after repeated failures (milliseconds).
    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,
    /// Trades buffered between poller and consumer.
    #[serde(default = "default_buffer")]
    pub buffer: usize,
    /// `now`, `recent`, `id:<n>` or `ts:<n>`.
    #[serde(default)]
    pub since: Since,
}

const fn default_interval_ms() -> u64 {
    2_000
}

const fn default_max_backoff_ms() -> u64 {
    300_000 // 5 minutes
}

const fn default_buffer() -> usize {
    100
}

impl Default for TailConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            max_backoff_ms: default_max_backoff_ms(),
            buffer: default_buffer(),
            since: Since::default(),
        }
    }
}

impl TailConfig {
    /// Feed options described by this section.
    #[must_use]
    pub fn options(&self) -> TailOptions {
        TailOptions::new(Duration::from_millis(self.interval_ms))
            .max_backoff(Duration::from_millis(self.max_backoff_ms))
            .buffer(self.buffer)
            .since(self.since)
    }

    /// # Errors
    ///
    /// Whatever [`TailOptions::validate`] rejects.
    pub fn validate(&self) -> Result<()> {
        self.options().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cursor;

    #[test]
    fn defaults_match_feed_defaults() {
        assert_eq!(TailConfig::default().options(), TailOptions::default());
    }

    #[test]
    fn section_maps_to_options() {
        let config: TailConfig = toml::from_str(
            r#"
            interval_ms = 500
            max_backoff_ms = 8000
            since = "id:42"
            "#,
        )
        .unwrap();
        let options = config.options();
        assert_eq!(options.interval, Duration::from_millis(500));
        assert_eq!(options.max_backoff, Duration::from_secs(8));
        assert_eq!(options.buffer, 100);
        assert_eq!(options.since, Since::Cursor(Cursor::Id(42)));
    }

    #[test]
    fn bad_since_fails_to_parse() {
        assert!(toml::from_str::<TailConfig>(r#"since = "tomorrow""#).is_err());
    }
}
