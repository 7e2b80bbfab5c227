//! Daily play lock
//!
//! A completed session locks further starts until the calendar day changes.
//! The comparison is a plain year/month/day check in local time, matching
//! the original gate's behavior; this is not a scheduler and carries no
//! retry or backoff semantics.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Source of "now" for calendar-day decisions.
///
/// A trait seam so tests can pin the clock to fixed instants.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// The real local-time clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Persisted record of the most recent completed session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayLock {
    last_completed_at: DateTime<Local>,
}

impl PlayLock {
    /// Record a completion at `now`.
    #[must_use]
    pub const fn record_completion(now: DateTime<Local>) -> Self {
        Self {
            last_completed_at: now,
        }
    }

    /// When the recorded session completed.
    #[inline]
    #[must_use]
    pub const fn last_completed_at(&self) -> DateTime<Local> {
        self.last_completed_at
    }

    /// Whether a new session may start at `now`.
    ///
    /// True with no record at all, or when the recorded completion falls on
    /// a different calendar day than `now`.
    #[must_use]
    pub fn can_start(record: Option<&Self>, now: DateTime<Local>) -> bool {
        match record {
            None => true,
            Some(lock) => lock.last_completed_at.date_naive() != now.date_naive(),
        }
    }
}
