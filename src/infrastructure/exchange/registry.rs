//! Name-keyed table of exchange client factories.
//!
//! The registry is built once at startup, usually with
//! [`Registry::with_builtin`], and then shared read-only behind an `Arc`.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::adapter::outbound::{btcchina, btce};
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::transport::TransportConfig;
use crate::port::Client;

use super::credentials::Credentials;

/// Constructor of one exchange's [`Client`].
pub type ClientFactory =
    Arc<dyn Fn(&Credentials, &TransportConfig) -> Result<Arc<dyn Client>> + Send + Sync>;

/// Registry of exchange client factories.
#[derive(Default)]
pub struct Registry {
    factories: Mutex<HashMap<String, ClientFactory>>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every exchange adapter shipped in this crate.
    #[must_use]
    pub fn with_builtin() -> Self {
        let registry = Self::new();
        btce::register(&registry);
        btcchina::register(&registry);
        registry
    }

    /// Register `factory` under `name`.
    ///
    /// The first registration of a name wins; later ones are ignored and
    /// reported by returning `false`.
    pub fn register<F>(&self, name: impl Into<String>, factory: F) -> bool
    where
        F: Fn(&Credentials, &TransportConfig) -> Result<Arc<dyn Client>> + Send + Sync + 'static,
    {
        let name = name.into();
        let mut factories = self.factories.lock();
        if factories.contains_key(&name) {
            debug!(exchange = %name, "Exchange already registered, keeping first factory");
            return false;
        }
        debug!(exchange = %name, "Registered exchange");
        factories.insert(name, Arc::new(factory));
        true
    }

    /// Construct a client for the exchange registered as `name`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::UnknownExchange`] when `name` is not registered.
    /// - [`ConfigError::InvalidValue`] for half-set credentials.
    /// - Whatever the factory rejects, e.g. `InvalidValue` for a bad proxy URL.
    pub fn create(
        &self,
        name: &str,
        credentials: &Credentials,
        transport: &TransportConfig,
    ) -> Result<Arc<dyn Client>> {
        let factory = self.factories.lock().get(name).cloned();
        let Some(factory) = factory else {
            return Err(ConfigError::UnknownExchange {
                name: name.to_string(),
                known: self.list().join(", "),
            }
            .into());
        };

        credentials.validate()?;
        factory(credentials, transport)
    }

    /// Names of all registered exchanges, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.lock().keys().cloned().collect();
        names.sort();
        names
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.lock().contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CursorKind;
    use crate::error::Error;
    use crate::testkit::client::ScriptedClient;

    fn scripted(kind: CursorKind) -> impl Fn(&Credentials, &TransportConfig) -> Result<Arc<dyn Client>> {
        move |_, _| Ok(Arc::new(ScriptedClient::new(kind)) as Arc<dyn Client>)
    }

    #[test]
    fn new_registry_is_empty() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert!(registry.list().is_empty());
    }

    #[test]
    fn builtin_registers_shipped_exchanges() {
        let registry = Registry::with_builtin();
        assert_eq!(registry.list(), vec!["btcchina".to_string(), "btce".to_string()]);
    }

    #[test]
    fn first_registration_wins() {
        let registry = Registry::new();
        assert!(registry.register("mock", scripted(CursorKind::ById)));
        assert!(!registry.register("mock", scripted(CursorKind::ByTimestamp)));
        assert_eq!(registry.len(), 1);

        let client = registry
            .create("mock", &Credentials::anonymous(), &TransportConfig::default())
            .unwrap();
        assert_eq!(client.cursor_kind(), CursorKind::ById);
    }

    #[test]
    fn unknown_name_is_config_error() {
        let registry = Registry::with_builtin();
        let result = registry.create(
            "doesnotexist",
            &Credentials::anonymous(),
            &TransportConfig::default(),
        );
        match result {
            Err(Error::Config(ConfigError::UnknownExchange { name, known })) => {
                assert_eq!(name, "doesnotexist");
                assert_eq!(known, "btcchina, btce");
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("unknown exchange must not produce a client"),
        }
    }

    #[test]
    fn half_credentials_rejected_before_factory_runs() {
        let registry = Registry::new();
        registry.register("mock", |_: &Credentials, _: &TransportConfig| -> Result<Arc<dyn Client>> {
            panic!("factory must not run with invalid credentials")
        });
        let result = registry.create(
            "mock",
            &Credentials::new("key", ""),
            &TransportConfig::default(),
        );
        assert!(matches!(result, Err(Error::Config(ConfigError::InvalidValue { .. }))));
    }

    #[test]
    fn factory_errors_propagate() {
        let registry = Registry::with_builtin();
        let transport = TransportConfig {
            proxy: Some("::not-a-proxy::".into()),
            ..TransportConfig::default()
        };
        let result = registry.create("btce", &Credentials::anonymous(), &transport);
        assert!(matches!(result, Err(Error::Config(ConfigError::InvalidValue { field: "proxy", .. }))));
    }

    #[test]
    fn builtin_clients_report_their_name() {
        let registry = Registry::with_builtin();
        for name in registry.list() {
            let client = registry
                .create(&name, &Credentials::anonymous(), &TransportConfig::default())
                .unwrap();
            assert_eq!(client.name(), name);
        }
    }
}
