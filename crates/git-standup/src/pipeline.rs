// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! The standup pipeline
//!
//! discovery → exclusion → collection (with recency filter) → sort → report.
//!
//! # Example
//!
//! ```no_run
//! use git_standup::config::Config;
//! use git_standup::pipeline;
//! use git_standup::recency::SystemClock;
//! use standup_git::Git2Reader;
//!
//! let config = Config::for_paths(["/home/me/src"]);
//! let report = pipeline::build_feed(&config, &Git2Reader, &SystemClock).expect("feed");
//! println!("{} commits from {} repositories", report.feed.len(), report.repositories);
//! ```

use std::io::Write;

use standup_git::RepositoryReader;
use tracing::info;

use crate::collect::{Skipped, collect_commits};
use crate::config::Config;
use crate::discover::{RepoLocation, resolve_all};
use crate::error::StandupError;
use crate::exclude;
use crate::feed::CommitFeed;
use crate::recency::Clock;
use crate::report::write_feed;

/// Outcome of one standup run
#[derive(Debug, Default)]
pub struct StandupReport {
    /// Recent commits, oldest first
    pub feed: CommitFeed,
    /// Repositories considered after exclusion
    pub repositories: usize,
    /// Repositories that could not be read
    pub skipped: Vec<Skipped>,
}

/// Repository roots selected by the include and exclude scans
#[must_use]
pub fn select_repositories(config: &Config) -> Vec<RepoLocation> {
    let include = resolve_all(&config.paths);
    let exclude = resolve_all(&config.excludes);
    let selected = exclude::apply(&include, &exclude, config.exclude_mode);

    info!(
        found = include.len(),
        excluded = exclude.len(),
        selected = selected.len(),
        "Discovered repositories"
    );

    exclude::repository_roots(&selected)
}

/// Run discovery and collection, returning the sorted feed
///
/// # Errors
///
/// Returns `StandupError::Config` if the configuration is invalid.
/// Per-repository failures are reported in [`StandupReport::skipped`].
pub fn build_feed<R, C>(
    config: &Config,
    reader: &R,
    clock: &C,
) -> Result<StandupReport, StandupError>
where
    R: RepositoryReader,
    C: Clock,
{
    config.validate()?;

    let locations = select_repositories(config);
    let options = config.collect_options(clock.now());
    let collected = collect_commits(reader, &locations, &options);

    if !collected.skipped.is_empty() {
        info!(
            skipped = collected.skipped.len(),
            "Some repositories could not be read"
        );
    }

    Ok(StandupReport {
        feed: CommitFeed::from_entries(collected.entries),
        repositories: locations.len(),
        skipped: collected.skipped,
    })
}

/// Build the feed and write it to `out`
///
/// # Errors
///
/// Returns `StandupError::Config` for an invalid configuration and
/// `StandupError::Io` if writing fails.
pub fn run<R, C, W>(
    config: &Config,
    reader: &R,
    clock: &C,
    out: &mut W,
) -> Result<StandupReport, StandupError>
where
    R: RepositoryReader,
    C: Clock,
    W: Write,
{
    let report = build_feed(config, reader, clock)?;
    write_feed(out, &report.feed)?;
    Ok(report)
}
