// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit collection
//!
//! Opens each repository in turn, reads a bounded window of its newest
//! commits and keeps those inside the recency window. Failures are contained
//! per repository: a repository that cannot be opened or walked is recorded
//! as [`Skipped`] and the run carries on with the rest.

use chrono::{DateTime, Utc};
use standup_git::{CommitHistory, GitError, RepositoryReader};
use tracing::{debug, warn};

use crate::discover::RepoLocation;
use crate::feed::FeedEntry;
use crate::progress;
use crate::recency::{RecencyWindow, is_recent};

/// Default number of commits read per repository
pub const DEFAULT_MAX_COUNT: u32 = 50;

const PROGRESS_LABEL: &str = "gathering commits";

/// Parameters for one collection pass
#[derive(Debug, Clone, Copy)]
pub struct CollectOptions {
    /// Newest commits read per repository; older ones are never considered
    pub max_count: usize,
    /// Recency window applied to every commit
    pub window: RecencyWindow,
    /// The instant the window is measured from
    pub now: DateTime<Utc>,
}

impl CollectOptions {
    /// Default cap and window, measured from `now`
    #[must_use]
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            max_count: DEFAULT_MAX_COUNT as usize,
            window: RecencyWindow::default(),
            now,
        }
    }
}

/// A repository left out of the feed, with the reason
#[derive(Debug)]
pub struct Skipped {
    /// The repository that failed
    pub location: RepoLocation,
    /// Why it failed
    pub error: GitError,
}

/// Result of a collection pass
#[derive(Debug, Default)]
pub struct Collected {
    /// Recent commits from every readable repository, unordered
    pub entries: Vec<FeedEntry>,
    /// Repositories that could not be read
    pub skipped: Vec<Skipped>,
}

/// Collect recent commits from every location, in order
pub fn collect_commits<R>(
    reader: &R,
    locations: &[RepoLocation],
    options: &CollectOptions,
) -> Collected
where
    R: RepositoryReader,
{
    let mut collected = Collected::default();

    for location in progress::track(locations.iter(), PROGRESS_LABEL) {
        match collect_repository(reader, location, options) {
            Ok(entries) => {
                debug!(
                    repo = %location.root().display(),
                    count = entries.len(),
                    "Collected recent commits"
                );
                collected.entries.extend(entries);
            }
            Err(error) => {
                warn!(repo = %location.root().display(), "Skipping repository: {error}");
                collected.skipped.push(Skipped {
                    location: location.clone(),
                    error,
                });
            }
        }
    }

    collected
}

/// Recent commits of a single repository, tagged with its short name
///
/// # Errors
///
/// Returns the reader's `GitError` if the repository cannot be opened or
/// its history cannot be read.
pub fn collect_repository<R>(
    reader: &R,
    location: &RepoLocation,
    options: &CollectOptions,
) -> Result<Vec<FeedEntry>, GitError>
where
    R: RepositoryReader,
{
    let repo = reader.open(location.root())?;
    let name = location.name();

    Ok(repo
        .recent_commits(options.max_count)?
        .into_iter()
        .filter(|commit| is_recent(commit, options.now, options.window))
        .map(|commit| FeedEntry::new(name.clone(), commit))
        .collect())
}
