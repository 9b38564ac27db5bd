//! Poll pacing after successful and failed history fetches.
//!
//! The wait doubles on every failure up to a ceiling and halves on every
//! success down to the poll interval, so a single lucky response after an
//! outage does not snap the poller straight back to full speed.

use std::time::Duration;

/// Result of one fetch, as far as pacing is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// Bounds of the wait between two fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffPolicy {
    /// Steady-state poll period; the wait never drops below it.
    pub interval: Duration,
    /// Ceiling for the wait after repeated failures.
    pub max: Duration,
}

impl BackoffPolicy {
    /// Create a policy; a ceiling below `interval` is raised to `interval`.
    #[must_use]
    pub fn new(interval: Duration, max: Duration) -> Self {
        Self {
            interval,
            max: max.max(interval),
        }
    }

    /// Wait before the first fetch following a fresh start.
    #[must_use]
    pub const fn initial(&self) -> Duration {
        self.interval
    }
}

/// Wait to apply after a fetch that ended with `outcome`, given the wait
/// that preceded it.
#[must_use]
pub fn next_wait(prior: Duration, outcome: Outcome, policy: &BackoffPolicy) -> Duration {
    match outcome {
        Outcome::Success => (prior / 2).max(policy.interval),
        Outcome::Failure => prior
            .saturating_mul(2)
            .min(policy.max)
            .max(policy.interval),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> BackoffPolicy {
        BackoffPolicy::new(Duration::from_secs(1), Duration::from_secs(300))
    }

    #[test]
    fn failures_double_up_to_cap() {
        let policy = policy();
        let mut wait = policy.initial();
        for n in 1..=12u32 {
            wait = next_wait(wait, Outcome::Failure, &policy);
            let expected = Duration::from_secs(2u64.pow(n)).min(policy.max);
            assert_eq!(wait, expected, "after {n} failures");
        }
        assert_eq!(wait, Duration::from_secs(300));
    }

    #[test]
    fn success_halves_towards_interval() {
        let policy = policy();
        assert_eq!(
            next_wait(Duration::from_secs(16), Outcome::Success, &policy),
            Duration::from_secs(8)
        );
        assert_eq!(
            next_wait(Duration::from_secs(3), Outcome::Success, &policy),
            Duration::from_millis(1500)
        );
        assert_eq!(
            next_wait(Duration::from_millis(1500), Outcome::Success, &policy),
            Duration::from_secs(1)
        );
    }

    #[test]
    fn success_at_interval_stays_at_interval() {
        let policy = policy();
        assert_eq!(
            next_wait(policy.interval, Outcome::Success, &policy),
            policy.interval
        );
    }

    #[test]
    fn decay_is_gradual() {
        let policy = policy();
        let mut wait = policy.initial();
        for _ in 0..4 {
            wait = next_wait(wait, Outcome::Failure, &policy);
        }
        assert_eq!(wait, Duration::from_secs(16));

        let mut seen = Vec::new();
        for _ in 0..5 {
            wait = next_wait(wait, Outcome::Success, &policy);
            seen.push(wait.as_secs());
        }
        assert_eq!(seen, vec![8, 4, 2, 1, 1]);
    }

    #[test]
    fn ceiling_never_below_interval() {
        let policy = BackoffPolicy::new(Duration::from_secs(10), Duration::from_secs(1));
        assert_eq!(policy.max, Duration::from_secs(10));
        assert_eq!(
            next_wait(policy.initial(), Outcome::Failure, &policy),
            Duration::from_secs(10)
        );
    }

    #[test]
    fn huge_waits_saturate() {
        let policy = BackoffPolicy::new(Duration::from_secs(1), Duration::MAX);
        assert_eq!(
            next_wait(Duration::MAX, Outcome::Failure, &policy),
            Duration::MAX
        );
    }
}
