//! Domain validation errors for core domain types.
//!
//! These errors are returned by the `FromStr` implementations of the value
//! types when user or exchange input does not describe a valid value.
//!
//! # Examples
//!
//! ```
//! use tradetail::domain::error::DomainError;
//! use tradetail::domain::Pair;
//!
//! let result = "btcusd".parse::<Pair>();
//! assert!(matches!(result, Err(DomainError::InvalidPair { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A currency code must not be empty.
    #[error("symbol cannot be empty")]
    EmptySymbol,

    /// Pairs are written as `target/base` or `target_base`.
    #[error("invalid pair '{input}', expected TARGET/BASE")]
    InvalidPair {
        /// The rejected input.
        input: String,
    },

    /// Trade direction was neither buy nor sell.
    #[error("unknown trade side '{input}'")]
    UnknownSide {
        /// The rejected input.
        input: String,
    },
}
