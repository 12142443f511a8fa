//! Storage lock for snapshot write-back.
//!
//! Reading and filtering a snapshot needs no lock. Rewriting it does: the
//! read-filter-write cycle of `prune --write` runs while holding an exclusive
//! lock file next to the snapshot (`db.json` is guarded by `db.json.lock`).
//!
//! # Lock Files
//!
//! Lock files are created using **create_new** semantics (exclusive create) so
//! that only one process can hold the lock at a time. A second writer fails
//! immediately with a `LockError`; there is no waiting or retrying.
//!
//! # Lock Metadata
//!
//! Each lock file contains JSON metadata:
//! - `snapshot`: the snapshot the lock guards
//! - `action`: the command holding it (e.g. `prune`)
//! - `holder`: `user@host` of the holder
//! - `pid`: the holder's process ID (optional)
//! - `acquired_at`: RFC3339 timestamp
//!
//! Locks older than `lock_stale_minutes` are reported as stale in the error
//! message but are never removed automatically.
//!
//! # RAII Guards
//!
//! The lock is released by [`LockGuard::release`] or, on any early return,
//! when the guard is dropped. A failed removal during drop is logged.

mod guard;
mod metadata;
mod operations;

#[cfg(test)]
mod tests;

// Re-export public API
pub use guard::LockGuard;
pub use metadata::LockMetadata;
pub use operations::acquire_snapshot_lock;
