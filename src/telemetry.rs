//! Tracing subscriber setup

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Build the filter: `RUST_LOG` wins, then `--verbose`, then the configured level.
pub fn env_filter(logging: &LoggingConfig, verbose: bool) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let level = if verbose { "debug" } else { logging.level.as_str() };
    let filter = EnvFilter::new(level)
        .add_directive("tower_http=info".parse().context("Invalid tower_http directive")?)
        .add_directive("hyper=warn".parse().context("Invalid hyper directive")?);
    Ok(filter)
}

/// Install the global subscriber writing to stderr. Fails if one is already set.
pub fn init(logging: &LoggingConfig, verbose: bool) -> Result<()> {
    let filter = env_filter(logging, verbose)?;
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .json(),
            )
            .try_init()
            .context("Failed to install JSON tracing subscriber")?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init()
            .context("Failed to install tracing subscriber")?;
    }

    tracing::debug!(level = %logging.level, format = %logging.format, "Logging initialized");
    Ok(())
}
