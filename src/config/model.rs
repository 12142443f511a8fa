//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a lockgc run.
///
/// Command line flags take precedence over these values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Snapshot settings
    // =========================================================================
    /// Path to the persisted lock snapshot (default: "db.json").
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,

    /// Minutes after which a held storage lock is reported as stale.
    #[serde(default = "default_lock_stale_minutes")]
    pub lock_stale_minutes: u32,

    // =========================================================================
    // Logging settings
    // =========================================================================
    /// Log filter directive, e.g. "debug" or "info,lockgc::snapshot=trace".
    /// `RUST_LOG` overrides it when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output format.
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
            lock_stale_minutes: default_lock_stale_minutes(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}
