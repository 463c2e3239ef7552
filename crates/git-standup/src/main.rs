//! git-standup: recent commits across every repository below some directories
//!
//! Scans the given paths for git repositories and prints one chronological
//! feed of their recent commits.

use std::io;

use anyhow::Context;
use clap::Parser;
use git_standup::config::Config;
use git_standup::recency::SystemClock;
use git_standup::{StandupError, logging, pipeline};
use standup_git::Git2Reader;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    logging::init().context("failed to set up logging")?;
    debug!(?config, "Starting git-standup");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match pipeline::run(&config, &Git2Reader, &SystemClock, &mut out) {
        Ok(report) => {
            debug!(
                commits = report.feed.len(),
                repositories = report.repositories,
                skipped = report.skipped.len(),
                "Report complete"
            );
            Ok(())
        }
        // Reader went away (e.g. piped into `head`); what was written stays
        Err(err) if err.is_broken_pipe() => Ok(()),
        Err(err @ StandupError::Config(_)) => Err(err).context("invalid arguments"),
        Err(err) => Err(err).context("git-standup failed"),
    }
}
