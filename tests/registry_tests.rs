use std::sync::Arc;

use tradetail::domain::CursorKind;
use tradetail::error::{ConfigError, Error, Result};
use tradetail::infrastructure::config::transport::TransportConfig;
use tradetail::infrastructure::exchange::{Credentials, Registry};
use tradetail::port::Client;
use tradetail::testkit::client::ScriptedClient;

fn scripted(kind: CursorKind) -> impl Fn(&Credentials, &TransportConfig) -> Result<Arc<dyn Client>> {
    move |_, _| Ok(Arc::new(ScriptedClient::new(kind)) as Arc<dyn Client>)
}

#[test]
fn builtin_exchanges_are_listed_sorted() {
    let registry = Registry::with_builtin();
    assert_eq!(registry.list(), ["btcchina", "btce"]);
    assert!(registry.contains("btce"));
    assert!(!registry.contains("mtgox"));
}

#[test]
fn builtin_clients_page_the_way_their_exchange_does() {
    let registry = Registry::with_builtin();
    let none = Credentials::anonymous();
    let transport = TransportConfig::default();

    let btce = registry.create("btce", &none, &transport).unwrap();
    let btcchina = registry.create("btcchina", &none, &transport).unwrap();
    assert_eq!(btce.cursor_kind(), CursorKind::ByTimestamp);
    assert_eq!(btcchina.cursor_kind(), CursorKind::ById);
    assert!(btce.account().is_none());
}

#[test]
fn custom_exchange_can_join_builtin_ones() {
    let registry = Registry::with_builtin();
    assert!(registry.register("mock", scripted(CursorKind::ById)));
    assert_eq!(registry.list(), ["btcchina", "btce", "mock"]);

    let client = registry
        .create("mock", &Credentials::anonymous(), &TransportConfig::default())
        .unwrap();
    assert_eq!(client.name(), "mock");
}

#[test]
fn builtin_name_cannot_be_taken_over() {
    let registry = Registry::with_builtin();
    assert!(!registry.register("btce", scripted(CursorKind::ById)));

    let client = registry
        .create("btce", &Credentials::anonymous(), &TransportConfig::default())
        .unwrap();
    assert_eq!(client.name(), "btce");
}

#[test]
fn unknown_exchange_lists_known_ones() {
    let registry = Registry::with_builtin();
    let error = registry
        .create("kraken", &Credentials::anonymous(), &TransportConfig::default())
        .err()
        .unwrap();
    assert!(matches!(error, Error::Config(ConfigError::UnknownExchange { .. })));
    assert_eq!(
        error.to_string(),
        "unknown exchange 'kraken' (registered: btcchina, btce)"
    );
}

#[test]
fn registry_shared_across_threads() {
    let registry = Arc::new(Registry::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                let kind = if i % 2 == 0 { CursorKind::ById } else { CursorKind::ByTimestamp };
                registry.register("shared", scripted(kind))
            })
        })
        .collect();
    let winners = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|won| *won)
        .count();
    assert_eq!(winners, 1);
    assert_eq!(registry.len(), 1);
}
