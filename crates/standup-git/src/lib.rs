// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! standup-git: read-only access to recent git history for git-standup
//!
//! This library crate opens repositories and lists their most recent
//! commits. The pipeline in `git-standup` talks to it through the
//! [`RepositoryReader`] and [`CommitHistory`] traits so that it can run
//! against a fake history in tests.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use standup_git::{CommitHistory, Git2Reader, RepositoryReader};
//!
//! let repo = Git2Reader.open(".".as_ref()).expect("open repo");
//! for c in repo.recent_commits(10).expect("list commits") {
//!     println!("{} {} - {}", c.timestamp, &c.sha[..7], c.summary_line());
//! }
//! ```

pub mod commit;
pub mod error;
pub mod reader;
pub mod repo;

pub use commit::Commit;
pub use error::GitError;
pub use reader::{CommitHistory, RepositoryReader};
pub use repo::{Git2Reader, GitRepo};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::commit::Commit;
    pub use crate::error::GitError;
    pub use crate::reader::{CommitHistory, RepositoryReader};
    pub use crate::repo::{Git2Reader, GitRepo};
}
