//! Logging system configuration and initialization
//!
//! Console logging through `tracing-subscriber`. The filter comes from
//! `RUST_LOG` when set, otherwise from [`LoggingConfig`].

use anyhow::Result;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
    Registry,
};

// Re-export LoggingConfig from config module
pub use crate::infrastructure::config::LoggingConfig;

/// Initialize the logging system with default configuration
pub fn init_logging() -> Result<()> {
    init_logging_with_config(&LoggingConfig::default())
}

/// Initialize the logging system with the given configuration
pub fn init_logging_with_config(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter.clone()));

    Registry::default()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init()?;

    Ok(())
}
