//! Canonical test configurations.

use std::time::Duration;

use crate::infrastructure::exchange::tail::{Since, TailOptions};

/// Poll interval used by feed tests; short enough to keep real-time tests
/// fast, long enough to tell consecutive polls apart.
pub const INTERVAL: Duration = Duration::from_millis(20);

/// Feed options polling every [`INTERVAL`] and delivering the first window.
pub fn tail() -> TailOptions {
    TailOptions::new(INTERVAL)
        .max_backoff(INTERVAL * 16)
        .since(Since::Recent)
}
