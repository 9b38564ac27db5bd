//! HTTP transport configuration.
//!
//! Per-request timeouts live here rather than in the tail engine: a request
//! that exceeds them fails like any other transient error.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::{ConfigError, Result};

/// Settings for the HTTP client shared by every request of one exchange client.
#[derive(Debug, Clone, Deserialize)]
pub struct TransportConfig {
    /// Time allowed to establish a TCP/TLS connection (milliseconds).
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Total time allowed for one request including the body (milliseconds).
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Optional proxy URL applied to every scheme.
    #[serde(default)]
    pub proxy: Option<String>,
    /// Skip TLS certificate verification.
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

const fn default_connect_timeout_ms() -> u64 {
    5_000
}

const fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: default_connect_timeout_ms(),
            timeout_ms: default_timeout_ms(),
            proxy: None,
            accept_invalid_certs: false,
        }
    }
}

impl TransportConfig {
    /// Transport with the same connect and total timeout.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        let ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        Self {
            connect_timeout_ms: ms,
            timeout_ms: ms,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Check values without building a client.
    ///
    /// # Errors
    ///
    /// Zero timeouts or an unparsable proxy URL.
    pub fn validate(&self) -> Result<()> {
        if self.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "connect_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if let Some(proxy) = &self.proxy {
            Url::parse(proxy).map_err(|e| ConfigError::InvalidValue {
                field: "proxy",
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }

    /// Build the pooled HTTP client described by this configuration.
    ///
    /// # Errors
    ///
    /// Invalid values (see [`validate`](Self::validate)) or a TLS backend
    /// that fails to initialise.
    pub fn build_client(&self) -> Result<reqwest::Client> {
        self.validate()?;

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("tradetail/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(self.connect_timeout())
            .timeout(self.timeout())
            .danger_accept_invalid_certs(self.accept_invalid_certs);

        if let Some(proxy) = &self.proxy {
            let proxy = reqwest::Proxy::all(proxy.as_str()).map_err(|e| {
                ConfigError::InvalidValue {
                    field: "proxy",
                    reason: e.to_string(),
                }
            })?;
            builder = builder.proxy(proxy);
        }

        Ok(builder.build()?)
    }
}
