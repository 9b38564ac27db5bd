//! Settings of one trade feed.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Deserializer};

use crate::domain::Cursor;
use crate::error::{ConfigError, Result};
use crate::infrastructure::exchange::backoff::BackoffPolicy;

/// Where a feed starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Since {
    /// Only trades executed after the feed starts; the exchange's current
    /// window is read once to find the starting point and then discarded.
    #[default]
    Now,
    /// Start with the exchange's most recent window of trades.
    Recent,
    /// Trades after an explicit cursor.
    Cursor(Cursor),
}

impl fmt::Display for Since {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Now => f.write_str("now"),
            Self::Recent => f.write_str("recent"),
            Self::Cursor(Cursor::Latest) => f.write_str("recent"),
            Self::Cursor(Cursor::Id(id)) => write!(f, "id:{id}"),
            Self::Cursor(Cursor::Timestamp(ts)) => write!(f, "ts:{ts}"),
        }
    }
}

impl FromStr for Since {
    type Err = ConfigError;

    /// Parses `now`, `recent`, `id:<n>` or `ts:<unix seconds>`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = |reason: &str| ConfigError::InvalidValue {
            field: "since",
            reason: format!("'{s}': {reason}"),
        };
        match s.trim().to_ascii_lowercase().as_str() {
            "now" => Ok(Self::Now),
            "recent" | "latest" => Ok(Self::Recent),
            other => {
                let (kind, value) = other
                    .split_once(':')
                    .ok_or_else(|| invalid("expected now, recent, id:<n> or ts:<n>"))?;
                let value: i64 = value
                    .parse()
                    .map_err(|_| invalid("bound is not an integer"))?;
                match kind {
                    "id" => Ok(Self::Cursor(Cursor::Id(value))),
                    "ts" | "timestamp" => Ok(Self::Cursor(Cursor::Timestamp(value))),
                    _ => Err(invalid("unknown cursor kind")),
                }
            }
        }
    }
}

impl<'de> Deserialize<'de> for Since {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Settings of one trade feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TailOptions {
    /// Desired steady-state poll period.
    pub interval: Duration,
    /// Ceiling of the wait after repeated failures.
    pub max_backoff: Duration,
    /// Trades buffered between the poller and the consumer.
    ///
    /// Bounds only the delivery channel. Trades fetched while the channel is
    /// full wait in the poller's own queue, which is unbounded so that
    /// fetching never stalls behind a slow consumer.
    pub buffer: usize,
    pub since: Since,
}

impl Default for TailOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            max_backoff: Duration::from_secs(300),
            buffer: 100,
            since: Since::Now,
        }
    }
}

impl TailOptions {
    /// Default options polling every `interval`.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn since(mut self, since: Since) -> Self {
        self.since = since;
        self
    }

    #[must_use]
    pub const fn max_backoff(mut self, max_backoff: Duration) -> Self {
        self.max_backoff = max_backoff;
        self
    }

    #[must_use]
    pub const fn buffer(mut self, buffer: usize) -> Self {
        self.buffer = buffer;
        self
    }

    #[must_use]
    pub fn policy(&self) -> BackoffPolicy {
        BackoffPolicy::new(self.interval, self.max_backoff)
    }

    /// # Errors
    ///
    /// Zero interval, zero buffer, or a ceiling below the interval.
    pub fn validate(&self) -> Result<()> {
        if self.interval.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "interval",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.max_backoff < self.interval {
            return Err(ConfigError::InvalidValue {
                field: "max_backoff",
                reason: "must not be shorter than the poll interval".to_string(),
            }
            .into());
        }
        if self.buffer == 0 {
            return Err(ConfigError::InvalidValue {
                field: "buffer",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn since_parses_every_form() {
        assert_eq!("now".parse::<Since>().unwrap(), Since::Now);
        assert_eq!("Recent".parse::<Since>().unwrap(), Since::Recent);
        assert_eq!(
            "id:42".parse::<Since>().unwrap(),
            Since::Cursor(Cursor::Id(42))
        );
        assert_eq!(
            "ts:1400000000".parse::<Since>().unwrap(),
            Since::Cursor(Cursor::Timestamp(1_400_000_000))
        );
    }

    #[test]
    fn since_rejects_garbage() {
        for input in ["yesterday", "id:", "id:abc", "block:5"] {
            assert!(input.parse::<Since>().is_err(), "{input:?} should be rejected");
        }
    }

    #[test]
    fn since_display_parses_back() {
        for since in [
            Since::Now,
            Since::Recent,
            Since::Cursor(Cursor::Id(7)),
            Since::Cursor(Cursor::Timestamp(9)),
        ] {
            assert_eq!(since.to_string().parse::<Since>().unwrap(), since);
        }
    }

    #[test]
    fn defaults_are_valid() {
        let options = TailOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.since, Since::Now);
        assert_eq!(options.policy().initial(), Duration::from_secs(2));
    }

    #[test]
    fn zero_interval_rejected() {
        let options = TailOptions::new(Duration::ZERO);
        assert!(matches!(
            options.validate(),
            Err(Error::Config(ConfigError::InvalidValue {
                field: "interval",
                ..
            }))
        ));
    }

    #[test]
    fn ceiling_below_interval_rejected() {
        let options = TailOptions::new(Duration::from_secs(10)).max_backoff(Duration::from_secs(1));
        assert!(matches!(
            options.validate(),
            Err(Error::Config(ConfigError::InvalidValue {
                field: "max_backoff",
                ..
            }))
        ));
    }

    #[test]
    fn zero_buffer_rejected() {
        let options = TailOptions::default().buffer(0);
        assert!(options.validate().is_err());
    }
}
