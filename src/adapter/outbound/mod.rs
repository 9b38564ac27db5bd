//! Outbound adapters (driven side): one module per exchange.

pub mod btce;
pub mod btcchina;

mod http;
