//! Contents of a snapshot lock file.

use crate::error::{GcError, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// What a lock file records about its holder.
///
/// Written once when the lock is taken and only read back to explain a
/// failed acquisition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockMetadata {
    /// Snapshot the lock guards.
    pub snapshot: PathBuf,

    /// Command holding the lock, e.g. `prune`.
    pub action: String,

    /// `user@host` of the holder.
    pub holder: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<u32>,

    pub acquired_at: DateTime<Utc>,
}

impl LockMetadata {
    /// Metadata for this process taking the lock on `snapshot` now.
    pub fn for_snapshot(snapshot: &Path, action: &str) -> Self {
        Self {
            snapshot: snapshot.to_path_buf(),
            action: action.to_string(),
            holder: current_holder(),
            pid: Some(std::process::id()),
            acquired_at: Utc::now(),
        }
    }

    /// Read the metadata left in an existing lock file.
    pub fn read(lock_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(lock_path).map_err(|e| {
            GcError::LockError(format!("cannot read '{}': {}", lock_path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            GcError::LockError(format!(
                "'{}' is not a lockgc lock file: {}",
                lock_path.display(),
                e
            ))
        })
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GcError::LockError(format!("cannot encode lock metadata: {}", e)))
    }

    /// How long the lock has been held at `now`. Clock skew clamps to zero.
    pub fn held_for(&self, now: DateTime<Utc>) -> Duration {
        now.signed_duration_since(self.acquired_at)
            .max(Duration::zero())
    }

    /// Whether the lock has been held longer than `stale_minutes` at `now`.
    pub fn is_stale_at(&self, now: DateTime<Utc>, stale_minutes: u32) -> bool {
        self.held_for(now) > Duration::minutes(i64::from(stale_minutes))
    }

    /// One-line description of the holder, used in lock errors.
    pub fn describe(&self, now: DateTime<Utc>) -> String {
        let pid = self
            .pid
            .map(|pid| format!(" (pid {})", pid))
            .unwrap_or_default();
        format!(
            "{}{} running `{}` on '{}' for {}",
            self.holder,
            pid,
            self.action,
            self.snapshot.display(),
            format_held_for(self.held_for(now))
        )
    }
}

/// Render a hold time as `3d 4h`, `2h 5m` or `12m`.
fn format_held_for(held: Duration) -> String {
    let minutes = held.num_minutes();
    match (minutes / (24 * 60), (minutes / 60) % 24, minutes % 60) {
        (0, 0, m) => format!("{}m", m),
        (0, h, m) => format!("{}h {}m", h, m),
        (d, h, _) => format!("{}d {}h", d, h),
    }
}

fn current_holder() -> String {
    let user = ["USER", "USERNAME"]
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .unwrap_or_else(|| "unknown".to_string());
    let host = hostname::get()
        .map(|h| h.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "unknown".to_string());
    format!("{}@{}", user, host)
}
