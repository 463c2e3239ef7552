// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! `git2`-backed repository reader
//!
//! This module opens repositories with the `git2` crate and converts their
//! newest commits into [`Commit`] values.

use crate::commit::Commit;
use crate::error::GitError;
use crate::reader::{CommitHistory, RepositoryReader};
use chrono::{DateTime, FixedOffset};
use git2::{ErrorCode, Repository, Sort};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Reader that opens repositories from disk with `git2`
#[derive(Debug, Clone, Copy, Default)]
pub struct Git2Reader;

impl RepositoryReader for Git2Reader {
    type Repo = GitRepo;

    fn open(&self, path: &Path) -> Result<GitRepo, GitError> {
        GitRepo::open(path)
    }
}

/// A git repository opened for reading
pub struct GitRepo {
    repo: Repository,
    location: PathBuf,
}

impl GitRepo {
    /// Open the git repository rooted exactly at `path`
    ///
    /// Parent directories are not searched.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryOpen` if the path is not a git repository.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::open(path).map_err(|source| GitError::RepositoryOpen {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self {
            repo,
            location: path.to_path_buf(),
        })
    }

    /// Get the path the repository was opened from
    #[must_use]
    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Walk at most `limit` commits from HEAD, newest first
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommitRead` if the history cannot be walked.
    pub fn walk_commits(&self, limit: usize) -> Result<Vec<Commit>, GitError> {
        if self.head_is_unborn()? {
            debug!(repo = %self.location.display(), "HEAD is unborn, no commits");
            return Ok(Vec::new());
        }

        let mut revwalk = self.repo.revwalk().map_err(|e| self.read_error(e))?;
        revwalk
            .set_sorting(Sort::TIME | Sort::TOPOLOGICAL)
            .map_err(|e| self.read_error(e))?;
        revwalk.push_head().map_err(|e| self.read_error(e))?;

        let mut commits = Vec::new();

        for oid_result in revwalk {
            if commits.len() >= limit {
                break;
            }

            let oid = oid_result.map_err(|e| self.read_error(e))?;
            let git_commit = self.repo.find_commit(oid).map_err(|e| self.read_error(e))?;

            match extract_commit(&git_commit) {
                Some(commit) => commits.push(commit),
                None => warn!(
                    repo = %self.location.display(),
                    sha = %oid,
                    "Skipping commit with out-of-range timestamp"
                ),
            }
        }

        Ok(commits)
    }

    fn head_is_unborn(&self) -> Result<bool, GitError> {
        match self.repo.head() {
            Ok(_) => Ok(false),
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                Ok(true)
            }
            Err(e) => Err(self.read_error(e)),
        }
    }

    fn read_error(&self, source: git2::Error) -> GitError {
        GitError::CommitRead {
            path: self.location.display().to_string(),
            source,
        }
    }
}

impl CommitHistory for GitRepo {
    fn recent_commits(&self, max_count: usize) -> Result<Vec<Commit>, GitError> {
        self.walk_commits(max_count)
    }
}

/// Convert a git2 timestamp into an offset-aware datetime
///
/// An offset chrono cannot represent falls back to UTC. Returns `None` only
/// when the seconds value is outside chrono's range.
#[must_use]
pub fn to_datetime(time: git2::Time) -> Option<DateTime<FixedOffset>> {
    let utc = DateTime::from_timestamp(time.seconds(), 0)?;
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60)
        .or_else(|| FixedOffset::east_opt(0))?;
    Some(utc.with_timezone(&offset))
}

/// Extract commit metadata from a git2 commit
fn extract_commit(git_commit: &git2::Commit<'_>) -> Option<Commit> {
    let timestamp = to_datetime(git_commit.committer().when())?;
    let committer = git_commit.committer();

    Some(Commit {
        sha: git_commit.id().to_string(),
        message: String::from_utf8_lossy(git_commit.message_bytes()).into_owned(),
        committer: committer.name().unwrap_or("Unknown").to_string(),
        committer_email: committer.email().unwrap_or("").to_string(),
        timestamp,
        parents: git_commit.parent_ids().map(|id| id.to_string()).collect(),
    })
}
