//! git-standup library
//!
//! This module exports the pipeline behind the `git-standup` binary for use
//! in integration tests and as a library.

pub mod collect;
pub mod config;
pub mod discover;
pub mod error;
pub mod exclude;
pub mod feed;
pub mod logging;
pub mod pipeline;
pub mod progress;
pub mod recency;
pub mod report;

pub use error::StandupError;
