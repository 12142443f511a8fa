//! Run context resolution for lockgc.
//!
//! Resolves, once per run, everything a command needs: the effective
//! configuration, the snapshot path (flag over config), the output mode and
//! the reference time. The wall clock is read here and nowhere else, so every
//! filter pass in a run uses the same cutoff.

use crate::cli::GlobalArgs;
use crate::config::Config;
use chrono::Utc;
use std::path::{Path, PathBuf};

/// Snapshot path that selects standard input instead of a file.
pub const STDIN_SNAPSHOT: &str = "-";

/// Suffix of the storage lock file placed next to the snapshot.
pub const LOCK_FILE_SUFFIX: &str = ".lock";

/// Resolved inputs for a single lockgc run.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Effective configuration (file values, before flag overrides).
    pub config: Config,

    /// Path of the snapshot to operate on, or `-` for stdin.
    pub snapshot_path: PathBuf,

    /// Reference time (Unix epoch seconds) shared by all filter passes.
    pub now: i64,

    /// Emit machine-readable JSON instead of text.
    pub json: bool,
}

impl RunContext {
    /// Resolve the run context from global flags and the loaded config.
    pub fn resolve(global: &GlobalArgs, config: Config) -> Self {
        let now = global.now.unwrap_or_else(|| Utc::now().timestamp());
        Self::with_now(global, config, now)
    }

    /// Resolve the run context with an explicit reference time.
    pub fn with_now(global: &GlobalArgs, config: Config, now: i64) -> Self {
        let snapshot_path = global
            .snapshot
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.snapshot_path));

        Self {
            config,
            snapshot_path,
            now,
            json: global.json,
        }
    }

    /// Whether the snapshot is read from standard input.
    pub fn reads_stdin(&self) -> bool {
        is_stdin(&self.snapshot_path)
    }

    /// Path of the storage lock guarding the snapshot (`<snapshot>.lock`).
    pub fn lock_path(&self) -> PathBuf {
        let mut name = self.snapshot_path.clone().into_os_string();
        name.push(LOCK_FILE_SUFFIX);
        PathBuf::from(name)
    }
}

pub(crate) fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_SNAPSHOT
}
