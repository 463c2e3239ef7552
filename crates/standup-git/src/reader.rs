// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Repository reading capability
//!
//! The standup pipeline only needs two things from a version-control
//! backend: open a repository root, then list its newest commits. These
//! traits describe exactly that, so the pipeline can be driven by the
//! `git2` implementation in [`crate::repo`] or by an in-memory fake.

use std::path::Path;

use crate::commit::Commit;
use crate::error::GitError;

/// Opens repositories by their root directory
pub trait RepositoryReader {
    /// Handle to an opened repository
    type Repo: CommitHistory;

    /// Open the repository whose working tree root is `path`
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryOpen` if `path` is not a valid
    /// repository root.
    fn open(&self, path: &Path) -> Result<Self::Repo, GitError>;
}

/// Lists the most recent commits of an opened repository
pub trait CommitHistory {
    /// Return at most `max_count` commits reachable from HEAD, newest first
    ///
    /// A repository without any commit yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommitRead` if the history cannot be walked.
    fn recent_commits(&self, max_count: usize) -> Result<Vec<Commit>, GitError>;
}
