//! Tracing subscriber setup for applications embedding `RideCast`

use crate::config::LoggingConfig;
use crate::RideCastError;
use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber for the configured level and format.
///
/// `RUST_LOG` takes precedence over the configured level. Calling this again
/// after a subscriber is installed returns a configuration error.
pub fn init(config: &LoggingConfig) -> crate::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| RideCastError::config(format!("Invalid log filter: {e}")))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let result = match config.format.as_str() {
        "json" => builder.json().try_init(),
        _ => builder.pretty().try_init(),
    };

    result.map_err(|e| RideCastError::config(format!("Failed to initialize logging: {e}")))
}
