//! Tracing setup
//!
//! Logs go to stderr through the indicatif writer so they do not tear the
//! progress bar; stdout carries only the report.

use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::Layer;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::StandupError;

/// Environment variable holding the log filter, e.g. `GIT_STANDUP_LOG=debug`
pub const LOG_ENV_VAR: &str = "GIT_STANDUP_LOG";

/// Build the log filter from [`LOG_ENV_VAR`], defaulting to warnings only
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy()
}

/// Install the global subscriber
///
/// The filter applies to log output only. The progress layer is left
/// unfiltered so the progress bar shows regardless of log level.
///
/// # Errors
///
/// Returns `StandupError::Logging` if a global subscriber is already set.
pub fn init() -> Result<(), StandupError> {
    let indicatif_layer = IndicatifLayer::new();

    let fmt = fmt::layer()
        .with_target(false)
        .with_writer(indicatif_layer.get_stderr_writer())
        .with_filter(env_filter());

    tracing_subscriber::registry()
        .with(fmt)
        .with(indicatif_layer)
        .try_init()?;

    Ok(())
}
