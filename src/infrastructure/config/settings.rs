//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings.
//! Configuration is loaded from a TOML file; API credentials come from the
//! environment only (`TRADETAIL_API_KEY`, `TRADETAIL_SECRET`).
//!
//! # Example
//!
//! ```no_run
//! use tradetail::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("tradetail.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::logging::LoggingConfig;
use super::tail::TailConfig;
use super::transport::TransportConfig;
use crate::domain::Pair;
use crate::error::{ConfigError, Result};
use crate::infrastructure::exchange::credentials::Credentials;

/// `[exchange]` section: which market to talk to.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeConfig {
    /// Registry name of the exchange.
    #[serde(default = "default_exchange")]
    pub name: String,
    /// Market to follow, e.g. `btc_usd` or `BTC/USD`.
    #[serde(default = "default_pair")]
    pub pair: Pair,
}

fn default_exchange() -> String {
    "btce".to_string()
}

fn default_pair() -> Pair {
    Pair::btc_usd()
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            name: default_exchange(),
            pair: default_pair(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub exchange: ExchangeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub transport: TransportConfig,

    #[serde(default)]
    pub tail: TailConfig,

    /// Never read from the file.
    #[serde(skip)]
    pub credentials: Credentials,
}

impl Config {
    /// Parse configuration from TOML and pick up credentials from the
    /// environment.
    ///
    /// # Errors
    ///
    /// Malformed TOML or any value [`Config::validate`] rejects.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.credentials = Credentials::from_env();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Unreadable file, malformed TOML, or invalid values.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Defaults plus credentials from the environment, for runs without a
    /// config file.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            credentials: Credentials::from_env(),
            ..Self::default()
        }
    }

    /// Check every section.
    ///
    /// # Errors
    ///
    /// The first invalid value found.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.exchange.name.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "exchange.name",
            }
            .into());
        }
        self.transport.validate()?;
        self.tail.validate()?;
        self.credentials.validate()?;
        Ok(())
    }

    /// Initialize the tracing subscriber described by `[logging]`.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.exchange.name, "btce");
        assert_eq!(config.exchange.pair, Pair::btc_usd());
        assert_eq!(config.tail.interval_ms, 2_000);
        assert_eq!(config.transport.timeout_ms, 10_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn full_file_parses() {
        let config: Config = toml::from_str(
            r#"
            [exchange]
            name = "btcchina"
            pair = "btc_cny"

            [logging]
            level = "debug"
            format = "json"

            [transport]
            timeout_ms = 3000
            proxy = "http://127.0.0.1:8080"

            [tail]
            interval_ms = 1000
            since = "recent"
            "#,
        )
        .unwrap();

        assert_eq!(config.exchange.name, "btcchina");
        assert_eq!(config.exchange.pair, Pair::btc_cny());
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.transport.timeout_ms, 3_000);
        assert_eq!(config.tail.interval_ms, 1_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_exchange_rejected() {
        let config: Config = toml::from_str("[exchange]\nname = \"  \"").unwrap();
        assert!(matches!(
            config.validate(),
            Err(Error::Config(ConfigError::MissingField { .. }))
        ));
    }

    #[test]
    fn zero_interval_rejected() {
        let config: Config = toml::from_str("[tail]\ninterval_ms = 0").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_log_format_fails_to_parse() {
        let result = toml::from_str::<Config>("[logging]\nformat = \"xml\"");
        assert!(result.is_err());
    }

    #[test]
    fn half_credentials_rejected() {
        let config = Config {
            credentials: Credentials::new("key", ""),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
