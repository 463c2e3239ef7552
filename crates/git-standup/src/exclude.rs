//! Exclusion filter
//!
//! Combines the repositories found under `--path` with those found under
//! `--exclude`. Plain set difference is the default. The symmetric
//! difference mode reproduces the legacy `include ^ exclude` behaviour: a
//! repository found by both scans is dropped, but one found only under
//! `--exclude` ends up in the report.

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::ValueEnum;

use crate::discover::RepoLocation;

/// How excluded repositories are combined with included ones
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExclusionMode {
    /// include − exclude
    #[default]
    Difference,
    /// include △ exclude
    Symmetric,
}

/// Apply the exclusion to two sets of metadata paths
#[must_use]
pub fn apply(
    include: &BTreeSet<PathBuf>,
    exclude: &BTreeSet<PathBuf>,
    mode: ExclusionMode,
) -> BTreeSet<PathBuf> {
    match mode {
        ExclusionMode::Difference => include.difference(exclude).cloned().collect(),
        ExclusionMode::Symmetric => include.symmetric_difference(exclude).cloned().collect(),
    }
}

/// Map metadata paths to the repository roots that own them
#[must_use]
pub fn repository_roots(metadata: &BTreeSet<PathBuf>) -> Vec<RepoLocation> {
    metadata
        .iter()
        .filter_map(|path| RepoLocation::from_metadata(path))
        .collect()
}
