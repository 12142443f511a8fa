//! Configuration types and defaults for lockgc.

use serde::{Deserialize, Serialize};

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// One JSON object per event (default).
    #[default]
    Json,
    /// Single-line human readable events.
    Compact,
}

impl LogFormat {
    /// Parse a log format from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "json" => Some(Self::Json),
            "compact" => Some(Self::Compact),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Json => "json",
            LogFormat::Compact => "compact",
        }
    }
}

/// Default configuration file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "lockgc.yaml";

pub(crate) fn default_snapshot_path() -> String {
    "db.json".to_string()
}

pub(crate) fn default_lock_stale_minutes() -> u32 {
    120
}

pub(crate) fn default_log_level() -> String {
    "debug".to_string()
}
