//! Plain-text report
//!
//! One line per commit: timestamp with offset, repository name, committer,
//! then the trimmed message. Multi-line messages are printed as they are.

use std::io::{self, Write};

use crate::feed::{CommitFeed, FeedEntry};

/// Minimum width of the repository and committer columns
pub const COLUMN_WIDTH: usize = 20;

/// Timestamp layout, e.g. `2026-10-14 09:30:00+02:00`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%:z";

/// Render a single feed entry, without the trailing newline
#[must_use]
pub fn format_entry(entry: &FeedEntry) -> String {
    format!(
        "{} {:<width$} {:<width$} {}",
        entry.commit.timestamp.format(TIMESTAMP_FORMAT),
        entry.repo,
        entry.commit.committer,
        entry.commit.summary_line(),
        width = COLUMN_WIDTH,
    )
}

/// Write the whole feed, oldest first
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_feed<W: Write>(out: &mut W, feed: &CommitFeed) -> io::Result<()> {
    for entry in feed {
        writeln!(out, "{}", format_entry(entry))?;
    }
    out.flush()
}
