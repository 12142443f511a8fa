//! Lock acquisition.

use super::guard::LockGuard;
use super::metadata::LockMetadata;
use crate::context::RunContext;
use crate::error::{GcError, Result};
use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::debug;

/// Take `lock_path` with create_new semantics and record `metadata` in it.
///
/// An existing lock file fails immediately with a `LockError` naming the
/// holder. Holders older than `stale_minutes` are flagged as possibly stale.
fn acquire_lock(lock_path: &Path, metadata: &LockMetadata, stale_minutes: u32) -> Result<LockGuard> {
    let file = match OpenOptions::new().write(true).create_new(true).open(lock_path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(held_lock_error(lock_path, stale_minutes));
        }
        Err(e) => {
            return Err(GcError::LockError(format!(
                "cannot create lock file '{}': {}",
                lock_path.display(),
                e
            )));
        }
    };

    if let Err(e) = write_metadata(file, metadata) {
        let _ = fs::remove_file(lock_path);
        return Err(e);
    }

    debug!(
        lock = %lock_path.display(),
        snapshot = %metadata.snapshot.display(),
        action = %metadata.action,
        "acquired snapshot lock"
    );
    Ok(LockGuard::holding(lock_path.to_path_buf()))
}

fn write_metadata(mut file: File, metadata: &LockMetadata) -> Result<()> {
    let json = metadata.to_json()?;
    file.write_all(json.as_bytes())
        .and_then(|()| file.sync_all())
        .map_err(|e| GcError::LockError(format!("cannot write lock metadata: {}", e)))
}

fn held_lock_error(lock_path: &Path, stale_minutes: u32) -> GcError {
    let mut message = format!(
        "lock is held by another process\nLock: {}",
        lock_path.display()
    );

    // An unreadable lock file still blocks; there is just no holder to name.
    if let Ok(holder) = LockMetadata::read(lock_path) {
        let now = Utc::now();
        message.push_str(&format!("\nHolder: {}", holder.describe(now)));
        if holder.is_stale_at(now, stale_minutes) {
            message.push_str(&format!(
                "\nThe lock is older than {} minutes and may be stale. \
                 Remove it manually if its holder has crashed.",
                stale_minutes
            ));
        }
    }

    GcError::LockError(message)
}

/// Acquire the exclusive storage lock for the run's snapshot.
///
/// Held for the whole read-filter-write cycle of `prune --write`. Fails with
/// `LockError` (exit code 4) when another process holds it.
pub fn acquire_snapshot_lock(ctx: &RunContext, action: &str) -> Result<LockGuard> {
    let metadata = LockMetadata::for_snapshot(&ctx.snapshot_path, action);
    acquire_lock(&ctx.lock_path(), &metadata, ctx.config.lock_stale_minutes)
}
