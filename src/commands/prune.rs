//! `lockgc prune`: report expired records and optionally drop them.
//!
//! The dry run reads the snapshot like any other command. With `--write` the
//! whole read-filter-write cycle happens under the storage lock, and the
//! snapshot is re-read after the lock is taken so a concurrent writer's
//! update is never lost.

use super::load_snapshot;
use crate::cli::PruneArgs;
use crate::context::RunContext;
use crate::error::{GcError, Result};
use crate::expiry::{Partition, partition};
use crate::locks;
use crate::snapshot::{self, LockRecordSet};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(super) struct PruneReport {
    pub snapshot: PathBuf,
    pub now: i64,
    pub valid: usize,
    pub expired: LockRecordSet,

    /// Whether the snapshot was rewritten.
    pub written: bool,

    /// Whether `--write` was requested.
    pub write_requested: bool,
}

impl PruneReport {
    fn new(ctx: &RunContext, parts: Partition, written: bool, write_requested: bool) -> Self {
        Self {
            snapshot: ctx.snapshot_path.clone(),
            now: ctx.now,
            valid: parts.valid.len(),
            expired: parts.expired,
            written,
            write_requested,
        }
    }
}

pub(super) fn run_prune(ctx: &RunContext, args: &PruneArgs) -> Result<PruneReport> {
    if !args.write {
        let records = load_snapshot(&ctx.snapshot_path)?;
        let parts = partition(&records, ctx.now);
        info!(
            snapshot = %ctx.snapshot_path.display(),
            now = ctx.now,
            valid = parts.valid.len(),
            expired = parts.expired.len(),
            "prune dry run"
        );
        return Ok(PruneReport::new(ctx, parts, false, false));
    }

    if ctx.reads_stdin() {
        return Err(GcError::UserError(
            "prune --write needs a snapshot file; stdin cannot be rewritten".to_string(),
        ));
    }

    let guard = locks::acquire_snapshot_lock(ctx, "prune")?;

    let records = snapshot::load(&ctx.snapshot_path)?;
    let parts = partition(&records, ctx.now);

    let written = !parts.expired.is_empty();
    if written {
        snapshot::save(&ctx.snapshot_path, &parts.valid)?;
        warn!(
            snapshot = %ctx.snapshot_path.display(),
            now = ctx.now,
            removed = parts.expired.len(),
            kept = parts.valid.len(),
            "pruned expired locks from snapshot"
        );
    } else {
        info!(snapshot = %ctx.snapshot_path.display(), now = ctx.now, "nothing to prune");
    }

    guard.release()?;

    Ok(PruneReport::new(ctx, parts, written, true))
}

impl fmt::Display for PruneReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Snapshot:   {}", self.snapshot.display())?;
        writeln!(f, "Valid:      {}", self.valid)?;
        writeln!(f, "Expired:    {}", self.expired.len())?;
        for record in &self.expired {
            writeln!(f, "  - {}", record)?;
        }
        writeln!(f)?;

        if self.expired.is_empty() {
            writeln!(f, "Nothing to prune.")
        } else if self.written {
            writeln!(
                f,
                "Rewrote snapshot without {} expired record(s).",
                self.expired.len()
            )
        } else {
            writeln!(f, "Dry run. Use `lockgc prune --write` to remove expired records.")
        }
    }
}
