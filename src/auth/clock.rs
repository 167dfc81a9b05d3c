//! Time source for token lifetime checks.

use chrono::Utc;

/// Provides the current Unix time in whole seconds.
///
/// Any `Fn() -> i64` closure is a clock, which keeps tests deterministic
/// without touching process-wide state.
///
/// # Example
///
/// ```rust
/// use bigcommerce_app_auth::auth::clock::{Clock, FixedClock};
///
/// assert_eq!(FixedClock(1_700_000_000).now(), 1_700_000_000);
/// assert_eq!((|| 42_i64).now(), 42);
/// ```
pub trait Clock: Send + Sync {
    /// Returns the current Unix time in seconds, floored.
    fn now(&self) -> i64;
}

/// The system wall clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// A clock frozen at a given Unix time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> i64 + Send + Sync,
{
    fn now(&self) -> i64 {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_close_to_chrono_now() {
        let before = Utc::now().timestamp();
        let now = SystemClock.now();
        let after = Utc::now().timestamp();
        assert!(before <= now && now <= after);
    }

    #[test]
    fn test_fixed_clock_and_closure() {
        assert_eq!(FixedClock(5).now(), 5);
        let offset: i64 = 10;
        let clock = move || 1_000 + offset;
        assert_eq!(clock.now(), 1_010);
    }
}
