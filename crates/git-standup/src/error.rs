// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for git-standup

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the standup pipeline
///
/// Per-repository failures are not represented here: they are collected as
/// [`crate::collect::Skipped`] entries and never abort a run.
#[derive(Debug, Error)]
pub enum StandupError {
    /// Writing the report failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The global tracing subscriber could not be installed
    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

impl StandupError {
    /// Whether this is a write to a closed pipe, e.g. `git-standup | head`
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_broken_pipe_detection() {
        let err = StandupError::from(io::Error::from(io::ErrorKind::BrokenPipe));
        assert!(err.is_broken_pipe());

        let other = StandupError::from(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(!other.is_broken_pipe());
    }

    #[test]
    fn test_config_error_display() {
        let err = StandupError::from(ConfigError::NoPaths);
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}
