//! Lock record snapshots.
//!
//! A snapshot is a JSON array of lock records persisted on disk (by default
//! `db.json`). It is read once per run into a [`LockRecordSet`] and treated as
//! read-only afterwards.
//!
//! # Snapshot Format
//!
//! ```json
//! [
//!   { "resourceGroupName": "rg-build", "ttl_unix_epoch": 1767225600 },
//!   { "resourceGroupName": "rg-test",  "ttl_unix_epoch": 1767229200 }
//! ]
//! ```
//!
//! Records written by older tooling (`ttl_unit_epoch` as a string, plus a
//! `skipLocking` flag) are mapped into the same record type on load.

mod loader;
mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use loader::{from_slice, load, load_from_reader, save};
pub use types::{LockRecord, LockRecordSet};
