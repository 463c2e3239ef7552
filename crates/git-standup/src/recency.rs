//! Recency window and clock
//!
//! "Now" is always passed in explicitly so that the filter stays a pure
//! predicate. Production code reads it from [`SystemClock`], tests pin it
//! with [`FixedClock`].

use chrono::{DateTime, Duration, Utc};
use standup_git::Commit;

/// Default recency window, in days
pub const DEFAULT_WINDOW_DAYS: u32 = 50;

/// Maximum age a commit may have to be reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecencyWindow(Duration);

impl RecencyWindow {
    /// Window spanning the given number of days
    #[must_use]
    pub fn days(days: u32) -> Self {
        Self(Duration::days(i64::from(days)))
    }

    /// Window of an arbitrary duration
    #[must_use]
    pub fn from_duration(duration: Duration) -> Self {
        Self(duration)
    }

    /// The window length
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.0
    }

    /// Whether `commit` is strictly younger than the window at `now`
    #[must_use]
    pub fn contains(&self, commit: &Commit, now: DateTime<Utc>) -> bool {
        is_recent(commit, now, *self)
    }
}

impl Default for RecencyWindow {
    fn default() -> Self {
        Self::days(DEFAULT_WINDOW_DAYS)
    }
}

/// Keep a commit iff `now - timestamp < window`
///
/// Commits dated in the future have a negative age and always pass.
#[must_use]
pub fn is_recent(commit: &Commit, now: DateTime<Utc>, window: RecencyWindow) -> bool {
    commit.age_at(now) < window.duration()
}

/// Source of the current time
pub trait Clock {
    /// The current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
