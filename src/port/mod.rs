//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points adapters implement to integrate with
//! external systems.
//!
//! ```text
//!                 ┌──────────────────────────┐
//!                 │  Tail engine + Registry  │
//!                 │     (infrastructure)     │
//!                 └────────────┬─────────────┘
//!                              │ Client::history
//!                              ▼
//!        ┌────────────┐  ┌────────────┐  ┌────────────┐
//!        │   BTC-E    │  │  BTCChina  │  │  Scripted  │
//!        │  adapter   │  │  adapter   │  │ (testkit)  │
//!        └────────────┘  └────────────┘  └────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`Client`] - Public market data of one exchange
//! - [`Account`] - Authenticated account operations, optional per exchange

pub mod outbound;

pub use outbound::exchange::{Account, Client, HistoryPage};
