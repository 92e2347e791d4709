//! `tracing` subscriber installation

use menuslot_domain::{LogFormat, LoggingConfig, MenuSlotError, Result};
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber described by `config`.
///
/// `RUST_LOG` takes precedence over `config.level`. Calling this again after
/// a subscriber is installed is a no-op.
///
/// # Errors
/// Returns `MenuSlotError::Config` when `config.level` is not a valid filter
/// directive and `RUST_LOG` is unset or invalid.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(&config.level)?;

    let installed = match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(false)
            .try_init(),
        LogFormat::Pretty => {
            tracing_subscriber::fmt().with_env_filter(filter).with_target(true).try_init()
        }
    };

    match installed {
        Ok(()) => tracing::debug!(format = %config.format, "tracing initialised"),
        Err(err) => tracing::debug!(error = %err, "tracing subscriber already installed"),
    }
    Ok(())
}

fn build_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| MenuSlotError::Config(format!("Invalid log level '{level}': {e}"))),
    }
}
