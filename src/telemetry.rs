//! Logging setup
//!
//! `RUST_LOG` wins over the configured level when it is set.

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Install the global tracing subscriber. Call once, before serving.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(format!("{},tower_http=info", config.level))
            .with_context(|| format!("Invalid log level '{}'", config.level))?,
    };

    let registry = tracing_subscriber::registry().with(filter);

    match config.format.as_str() {
        "json" => registry
            .with(fmt::layer().json())
            .try_init()
            .with_context(|| "Failed to install json log subscriber")?,
        _ => registry
            .with(fmt::layer().pretty())
            .try_init()
            .with_context(|| "Failed to install log subscriber")?,
    }

    Ok(())
}
