//! Cooldown window arithmetic.

use chrono::{DateTime, Utc};

/// Outcome of comparing a user's last accepted upload against the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownState {
    /// The user must wait `days_remaining` more days (always at least 1).
    Active {
        /// Whole days left in the window.
        days_remaining: i64,
    },
    /// The window has passed.
    Elapsed,
}

/// Rolling cooldown of a fixed number of whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooldownPolicy {
    window_days: i64,
}

impl CooldownPolicy {
    /// Creates a policy with the given window length in days.
    pub fn new(window_days: u32) -> Self {
        Self {
            window_days: i64::from(window_days),
        }
    }

    /// Length of the window in days.
    pub const fn window_days(&self) -> i64 {
        self.window_days
    }

    /// Whole days between `last` and `now`, truncated.
    ///
    /// A `last` later than `now` counts as zero days.
    pub fn elapsed_days(last: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
        (now - last).num_days().max(0)
    }

    /// Checks whether an upload accepted at `last` still blocks one at `now`.
    pub fn check(&self, last: DateTime<Utc>, now: DateTime<Utc>) -> CooldownState {
        let elapsed = Self::elapsed_days(last, now);
        if elapsed < self.window_days {
            CooldownState::Active {
                days_remaining: self.window_days - elapsed,
            }
        } else {
            CooldownState::Elapsed
        }
    }
}

impl Default for CooldownPolicy {
    fn default() -> Self {
        Self::new(30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use sc2clips_common::test_utils::mock_timestamp;

    #[test]
    fn test_same_instant_blocks_full_window() {
        let t0 = mock_timestamp(2024, 5, 1, 12, 0, 0);
        assert_eq!(
            CooldownPolicy::default().check(t0, t0),
            CooldownState::Active { days_remaining: 30 }
        );
    }

    #[test]
    fn test_just_under_thirty_days_is_still_blocked() {
        let t0 = mock_timestamp(2024, 5, 1, 12, 0, 0);
        let now = t0 + Duration::days(30) - Duration::seconds(1);
        assert_eq!(
            CooldownPolicy::default().check(t0, now),
            CooldownState::Active { days_remaining: 1 }
        );
    }

    #[test]
    fn test_exactly_thirty_days_is_elapsed() {
        let t0 = mock_timestamp(2024, 5, 1, 12, 0, 0);
        let now = t0 + Duration::days(30);
        assert_eq!(CooldownPolicy::default().check(t0, now), CooldownState::Elapsed);
    }

    #[test]
    fn test_future_record_counts_as_zero_days() {
        let t0 = mock_timestamp(2024, 5, 10, 12, 0, 0);
        let now = t0 - Duration::hours(36);
        assert_eq!(CooldownPolicy::elapsed_days(t0, now), 0);
        assert_eq!(
            CooldownPolicy::default().check(t0, now),
            CooldownState::Active { days_remaining: 30 }
        );
    }

    #[test]
    fn test_custom_window() {
        let policy = CooldownPolicy::new(7);
        let t0 = mock_timestamp(2024, 5, 1, 0, 0, 0);
        assert_eq!(policy.window_days(), 7);
        assert_eq!(
            policy.check(t0, t0 + Duration::days(3)),
            CooldownState::Active { days_remaining: 4 }
        );
        assert_eq!(policy.check(t0, t0 + Duration::days(7)), CooldownState::Elapsed);
    }
}
