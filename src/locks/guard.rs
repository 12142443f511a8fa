//! Ownership of an acquired snapshot lock.

use crate::error::{GcError, Result};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Holds `<snapshot>.lock` until released or dropped.
///
/// `prune --write` calls [`LockGuard::release`] after the rewrite so removal
/// failures reach the exit code. Any early return drops the guard instead,
/// which removes the file and only logs a failure.
#[derive(Debug)]
pub struct LockGuard {
    lock_path: Option<PathBuf>,
}

impl LockGuard {
    pub(super) fn holding(lock_path: PathBuf) -> Self {
        Self {
            lock_path: Some(lock_path),
        }
    }

    pub fn release(mut self) -> Result<()> {
        let Some(lock_path) = self.lock_path.take() else {
            return Ok(());
        };
        fs::remove_file(&lock_path).map_err(|e| {
            GcError::LockError(format!(
                "cannot remove lock file '{}': {}",
                lock_path.display(),
                e
            ))
        })?;
        debug!(lock = %lock_path.display(), "released snapshot lock");
        Ok(())
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        if let Some(lock_path) = self.lock_path.take()
            && let Err(e) = fs::remove_file(&lock_path)
        {
            warn!(
                lock = %lock_path.display(),
                error = %e,
                "snapshot lock left behind; remove it manually"
            );
        }
    }
}
