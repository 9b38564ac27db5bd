//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`client`]: [`ScriptedClient`](client::ScriptedClient), an in-memory
//!   [`Client`](crate::port::Client) replaying queued history pages.
//! - [`account`]: [`PaperAccount`](account::PaperAccount), an in-memory
//!   [`Account`](crate::port::Account).
//! - [`domain`]: builders for trades and pages.
//! - [`config`]: canonical fast feed options.

pub mod account;
pub mod client;
pub mod config;
pub mod domain;
