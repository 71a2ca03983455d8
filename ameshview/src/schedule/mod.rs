//! Auto-reload scheduling policy.
//!
//! A small elapsed-time gate: the host drives it with a periodic tick and
//! the current wall-clock time, and it answers whether another reload is
//! due. The reference timestamp resets whenever a reload is triggered,
//! not when it succeeds, so a failed cycle still consumes a full interval
//! instead of retrying in a tight loop.

use chrono::NaiveDateTime;
use std::time::Duration;

/// Default interval between reload attempts.
pub const DEFAULT_RELOAD_INTERVAL_SECS: u64 = 180;

/// Decides, from elapsed wall-clock time, when to trigger the next reload.
#[derive(Debug, Clone)]
pub struct ReloadScheduler {
    interval: Duration,
    reference: Option<NaiveDateTime>,
}

impl ReloadScheduler {
    /// Creates a scheduler firing every `interval`.
    ///
    /// The reference is primed by the first [`poll`](Self::poll), so the
    /// first trigger lands one full interval after that; the service
    /// performs its own startup reload.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            reference: None,
        }
    }

    /// Creates a scheduler with the default 3-minute interval.
    pub fn with_default_interval() -> Self {
        Self::new(Duration::from_secs(DEFAULT_RELOAD_INTERVAL_SECS))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Reports whether a reload is due at `now`, consuming the interval
    /// when it is.
    ///
    /// A clock that steps backwards never triggers: negative elapsed time
    /// counts as zero.
    pub fn poll(&mut self, now: NaiveDateTime) -> bool {
        let Some(reference) = self.reference else {
            self.reference = Some(now);
            return false;
        };

        let elapsed = now
            .signed_duration_since(reference)
            .to_std()
            .unwrap_or_default();
        if elapsed >= self.interval {
            self.reference = Some(now);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_first_poll_primes_without_triggering() {
        let mut scheduler = ReloadScheduler::with_default_interval();
        assert!(!scheduler.poll(at(9, 0, 0)));
    }

    #[test]
    fn test_below_threshold_is_not_due() {
        let mut scheduler = ReloadScheduler::with_default_interval();
        scheduler.poll(at(9, 0, 0));
        assert!(!scheduler.poll(at(9, 2, 59)));
    }

    #[test]
    fn test_at_threshold_is_due() {
        let mut scheduler = ReloadScheduler::with_default_interval();
        scheduler.poll(at(9, 0, 0));
        assert!(scheduler.poll(at(9, 3, 0)));
    }

    #[test]
    fn test_trigger_consumes_the_interval() {
        let mut scheduler = ReloadScheduler::new(Duration::from_secs(60));
        scheduler.poll(at(9, 0, 0));
        assert!(scheduler.poll(at(9, 1, 30)));
        // Reference moved to 9:01:30 whether or not the reload succeeded.
        assert!(!scheduler.poll(at(9, 2, 0)));
        assert!(scheduler.poll(at(9, 2, 30)));
    }

    #[test]
    fn test_backwards_clock_does_not_trigger() {
        let mut scheduler = ReloadScheduler::new(Duration::from_secs(60));
        scheduler.poll(at(9, 10, 0));
        assert!(!scheduler.poll(at(9, 0, 0)));
    }
}
