//! API credentials handed to exchange client factories.

use std::fmt;

use crate::error::{ConfigError, Result};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "TRADETAIL_API_KEY";
/// Environment variable holding the API secret.
pub const SECRET_ENV: &str = "TRADETAIL_SECRET";

/// API key and secret for authenticated endpoints.
///
/// Both empty means anonymous access to public endpoints. The secret is
/// never printed by `Debug`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret: secret.into(),
        }
    }

    /// Credentials for public endpoints only.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Read credentials from [`API_KEY_ENV`] and [`SECRET_ENV`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(API_KEY_ENV).unwrap_or_default(),
            std::env::var(SECRET_ENV).unwrap_or_default(),
        )
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.api_key.is_empty() && self.secret.is_empty()
    }

    /// A key without a secret (or the reverse) cannot sign anything.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] when exactly one half is present.
    pub fn validate(&self) -> Result<()> {
        match (self.api_key.trim().is_empty(), self.secret.trim().is_empty()) {
            (false, true) => Err(ConfigError::InvalidValue {
                field: "secret",
                reason: "API key given without a secret".to_string(),
            }
            .into()),
            (true, false) => Err(ConfigError::InvalidValue {
                field: "api_key",
                reason: "secret given without an API key".to_string(),
            }
            .into()),
            _ => Ok(()),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret", &if self.secret.is_empty() { "" } else { "***" })
            .finish()
    }
}
