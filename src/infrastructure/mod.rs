//! Infrastructure layer.
//!
//! Technical concerns that support the domain without containing exchange
//! specifics.
//!
//! # Submodules
//!
//! - [`config`] - Configuration loading and validation
//! - [`exchange`] - Client registry, backoff and the polling-to-streaming engine

pub mod config;
pub mod exchange;
