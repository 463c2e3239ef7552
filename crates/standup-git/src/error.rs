// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for standup-git

use thiserror::Error;

/// Errors that can occur while reading a repository
#[derive(Debug, Error)]
pub enum GitError {
    /// The path is not an openable repository root
    #[error("Cannot open repository at {path}: {source}")]
    RepositoryOpen {
        /// The path that was opened
        path: String,
        /// Underlying git2 failure
        source: git2::Error,
    },

    /// The commit history could not be enumerated
    #[error("Cannot read commits of {path}: {source}")]
    CommitRead {
        /// Repository whose history failed
        path: String,
        /// Underlying git2 failure
        source: git2::Error,
    },
}
