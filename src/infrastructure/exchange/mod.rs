//! Exchange plumbing shared by every adapter.
//!
//! ## Adding a New Exchange
//!
//! 1. Create a module under `adapter/outbound/<name>/`
//! 2. Implement [`crate::port::Client`] (and [`crate::port::Account`] if the
//!    exchange has authenticated endpoints)
//! 3. Expose a `register(&Registry)` function adding a factory under the
//!    exchange's name
//! 4. Call it from [`Registry::with_builtin`]

pub mod backoff;
pub mod credentials;
pub mod registry;
pub mod streamer;
pub mod tail;

pub use backoff::{next_wait, BackoffPolicy, Outcome};
pub use credentials::Credentials;
pub use registry::{ClientFactory, Registry};
pub use streamer::{CancelHandle, Streamer};
pub use tail::{tail, Since, TailOptions};
