//! Command-line configuration for git-standup
//!
//! There is no config file and no persisted state: everything comes from the
//! command line, with environment fallbacks for the two tuning knobs.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::collect::{CollectOptions, DEFAULT_MAX_COUNT};
use crate::exclude::ExclusionMode;
use crate::recency::{DEFAULT_WINDOW_DAYS, RecencyWindow};

/// Display latest commits from all repos found in the specified directories
#[derive(Parser, Debug, Clone)]
#[command(name = "git-standup")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Scan this path for git repos (repeatable)
    #[arg(
        short = 'p',
        long = "path",
        value_name = "DIR",
        required = true,
        value_parser = scan_root
    )]
    pub paths: Vec<PathBuf>,

    /// Scan this path for git repos to leave out of the report (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "DIR", value_parser = scan_root)]
    pub excludes: Vec<PathBuf>,

    /// How excluded repositories are combined with included ones
    ///
    /// `difference` drops every repository found under --exclude.
    /// `symmetric` reproduces the legacy behaviour: repositories found under
    /// both are dropped, repositories found only under --exclude are reported.
    #[arg(long, value_enum, default_value_t = ExclusionMode::Difference)]
    pub exclude_mode: ExclusionMode,

    /// Only report commits younger than this many days
    #[arg(
        short,
        long,
        env = "GIT_STANDUP_DAYS",
        default_value_t = DEFAULT_WINDOW_DAYS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub days: u32,

    /// Newest commits to read per repository
    #[arg(
        short = 'n',
        long,
        env = "GIT_STANDUP_MAX_COUNT",
        default_value_t = DEFAULT_MAX_COUNT,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_count: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            excludes: Vec::new(),
            exclude_mode: ExclusionMode::default(),
            days: DEFAULT_WINDOW_DAYS,
            max_count: DEFAULT_MAX_COUNT,
        }
    }
}

impl Config {
    /// Configuration scanning the given roots with every default
    #[must_use]
    pub fn for_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// The recency window
    #[must_use]
    pub fn window(&self) -> RecencyWindow {
        RecencyWindow::days(self.days)
    }

    /// Collection options measured from `now`
    #[must_use]
    pub fn collect_options(&self, now: chrono::DateTime<chrono::Utc>) -> CollectOptions {
        CollectOptions {
            max_count: self.max_count as usize,
            window: self.window(),
            now,
        }
    }

    /// Validate the configuration
    ///
    /// Roots that do not exist are tolerated and simply yield no
    /// repositories.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No scan path is given
    /// - The window or the per-repository cap is zero
    /// - A scan or exclude root exists but is not a directory
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.paths.is_empty() {
            return Err(ConfigError::NoPaths);
        }
        if self.days == 0 {
            return Err(ConfigError::EmptyWindow);
        }
        if self.max_count == 0 {
            return Err(ConfigError::ZeroMaxCount);
        }

        if let Some(path) = self
            .paths
            .iter()
            .chain(&self.excludes)
            .find(|p| is_existing_file(p))
        {
            return Err(ConfigError::NotADirectory(path.clone()));
        }

        Ok(())
    }
}

fn is_existing_file(path: &Path) -> bool {
    path.exists() && !path.is_dir()
}

/// Parse a `--path` or `--exclude` value
///
/// A missing path is accepted, an existing file is a usage error.
fn scan_root(raw: &str) -> Result<PathBuf, ConfigError> {
    let path = PathBuf::from(raw);
    if is_existing_file(&path) {
        return Err(ConfigError::NotADirectory(path));
    }
    Ok(path)
}

/// Configuration errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No `--path` given
    #[error("At least one --path is required")]
    NoPaths,

    /// `--days 0`
    #[error("The recency window must be at least one day")]
    EmptyWindow,

    /// `--max-count 0`
    #[error("--max-count must be at least 1")]
    ZeroMaxCount,

    /// A scan or exclude root names a file
    #[error("Path '{}' is a file", .0.display())]
    NotADirectory(PathBuf),
}
