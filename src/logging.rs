//! Logging setup
//!
//! The TUI owns stdout, so `tracing` output goes to `wallet.log` in the
//! config directory. `RUST_LOG` overrides the filter from settings.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{Settings, WalletPaths};
use crate::error::{WalletError, WalletResult};

/// Build the filter: `RUST_LOG` first, then the settings directive
pub fn build_filter(settings: &Settings) -> WalletResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&settings.log_filter).map_err(|e| {
            WalletError::Config(format!(
                "Invalid log filter '{}': {}",
                settings.log_filter, e
            ))
        }),
    }
}

/// Install the global subscriber writing to the log file
pub fn init(paths: &WalletPaths, settings: &Settings) -> WalletResult<()> {
    paths.ensure_directories()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| WalletError::Io(format!("Failed to open log file: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(settings)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| WalletError::Config(format!("Failed to install logger: {}", e)))?;

    Ok(())
}
