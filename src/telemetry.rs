//! Telemetry logic.
//! Structured logging through `tracing`.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{Log, LogFormat};
use crate::error::{Result, ToInternal};

/// Build the log filter. `RUST_LOG` wins over configured level.
fn filter(config: &Log) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).catch(),
    }
}

/// Install the global `tracing` subscriber.
///
/// Fails if the level is not a valid directive or if a subscriber is
/// already installed.
pub fn setup_logging(config: &Log) -> Result<()> {
    let filter = filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init(),
        LogFormat::Compact => registry.with(fmt::layer().compact()).try_init(),
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
    }
    .catch()?;

    tracing::info!(level = %config.level, format = ?config.format, "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_logging_once() {
        let config = Log::default();

        assert!(setup_logging(&config).is_ok());
        // Global subscriber is already set.
        assert!(setup_logging(&config).is_err());
    }
}
