use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
///
/// These only surface while building clients, pollers or loading config
/// files; a running trade feed never produces one.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("unknown exchange '{name}' (registered: {known})")]
    UnknownExchange { name: String, known: String },

    #[error("cursor {cursor} does not match the {expected} pagination of {exchange}")]
    CursorMismatch {
        exchange: &'static str,
        expected: crate::domain::CursorKind,
        cursor: crate::domain::Cursor,
    },
}

/// Errors reported by an exchange while serving a request.
///
/// Every variant is transient from the poller's point of view.
#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("{exchange} returned HTTP {status}")]
    Status {
        exchange: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("{exchange} API error: {message}")]
    Api {
        exchange: &'static str,
        message: String,
    },

    #[error("{exchange} does not trade {pair}")]
    UnsupportedPair {
        exchange: &'static str,
        pair: crate::domain::Pair,
    },

    #[error("{exchange} does not support {operation}")]
    Unsupported {
        exchange: &'static str,
        operation: &'static str,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Exchange(#[from] ExchangeError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for errors raised while constructing a client or poller.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
