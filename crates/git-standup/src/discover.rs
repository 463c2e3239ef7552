// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Repository discovery
//!
//! Walks scan roots looking for `.git` entries at any depth. Both metadata
//! directories and the `.git` files used by worktrees and submodules count.
//! Results are canonicalised and collected into a `BTreeSet`, so a
//! repository reached through two overlapping roots is reported once and
//! iteration order is stable between runs.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

/// Name of the version-control metadata entry
pub const METADATA_DIR: &str = ".git";

/// A repository root found during discovery
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RepoLocation {
    root: PathBuf,
}

impl RepoLocation {
    /// Location for the repository rooted at `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Location owning the metadata entry at `metadata`
    ///
    /// Returns `None` for a path without a parent.
    #[must_use]
    pub fn from_metadata(metadata: &Path) -> Option<Self> {
        metadata.parent().map(Self::new)
    }

    /// The repository root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Short display name: the final path segment of the root
    #[must_use]
    pub fn name(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.root.display().to_string())
    }
}

/// Find every `.git` entry below `root`
///
/// Unreadable or missing paths are logged and skipped; whatever else the walk
/// can reach is still returned.
#[must_use]
pub fn find_metadata_dirs(root: &Path) -> BTreeSet<PathBuf> {
    let mut found = BTreeSet::new();
    let mut walker = WalkDir::new(root).follow_links(false).into_iter();

    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(root = %root.display(), error = %err, "Cannot scan path");
                continue;
            }
        };

        if entry.depth() == 0 || entry.file_name() != METADATA_DIR {
            continue;
        }

        if entry.file_type().is_dir() {
            // Object stores never contain nested repositories worth reporting
            walker.skip_current_dir();
        }

        debug!(path = %entry.path().display(), "Found repository metadata");
        found.insert(canonical(entry.path()));
    }

    found
}

/// Union of [`find_metadata_dirs`] over all roots
#[must_use]
pub fn resolve_all(roots: &[PathBuf]) -> BTreeSet<PathBuf> {
    roots.iter().flat_map(|root| find_metadata_dirs(root)).collect()
}

fn canonical(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
