//! Git commit types and operations

use chrono::{DateTime, FixedOffset, Utc};

/// A commit as read from a repository
///
/// The timestamp is the committer time and keeps the committer's UTC offset,
/// so it prints the way `git log` shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// The commit SHA (40 hex characters)
    pub sha: String,
    /// Commit message, untrimmed
    pub message: String,
    /// Committer name
    pub committer: String,
    /// Committer email
    pub committer_email: String,
    /// Committer timestamp
    pub timestamp: DateTime<FixedOffset>,
    /// Parent commit SHAs
    pub parents: Vec<String>,
}

impl Commit {
    /// The whole message with surrounding whitespace removed
    ///
    /// Inner newlines of multi-line messages are kept.
    #[must_use]
    pub fn summary_line(&self) -> &str {
        self.message.trim()
    }

    /// The commit time as a UTC instant
    #[must_use]
    pub fn timestamp_utc(&self) -> DateTime<Utc> {
        self.timestamp.with_timezone(&Utc)
    }

    /// Age of the commit relative to `now`
    ///
    /// Negative when the commit is dated in the future.
    #[must_use]
    pub fn age_at(&self, now: DateTime<Utc>) -> chrono::Duration {
        now.signed_duration_since(self.timestamp)
    }
}
