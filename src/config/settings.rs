//! User settings for the wallet
//!
//! Manages the few knobs the home screen has: event tick rate, log filter,
//! an optional fixture file and the default snapshot size.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::WalletPaths;
use crate::error::WalletError;

/// User settings for the wallet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Interval between tick events in the TUI loop
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Default `tracing` filter directive (RUST_LOG takes precedence)
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// JSON fixture used instead of the built-in sample transactions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixture_file: Option<PathBuf>,

    /// Default width for `wallet snapshot`
    #[serde(default = "default_snapshot_width")]
    pub snapshot_width: u16,

    /// Default height for `wallet snapshot`
    #[serde(default = "default_snapshot_height")]
    pub snapshot_height: u16,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_snapshot_width() -> u16 {
    60
}

fn default_snapshot_height() -> u16 {
    40
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            log_filter: default_log_filter(),
            fixture_file: None,
            snapshot_width: default_snapshot_width(),
            snapshot_height: default_snapshot_height(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &WalletPaths) -> Result<Self, WalletError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| WalletError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                WalletError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WalletPaths) -> Result<(), WalletError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| WalletError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| WalletError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
