//! Diagnostics go to standard error through `tracing`.

use anyhow::{Context, anyhow};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// # Errors
///
/// Fails when `filter` is not a valid `EnvFilter` directive or a subscriber
/// is already installed.
pub fn init(filter: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_new(filter).with_context(|| format!("invalid log filter {filter:?}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("installing log subscriber")
}
