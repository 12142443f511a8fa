//! Filesystem utilities for lockgc.
//!
//! Snapshot write-back goes through [`atomic_write`] so a crash mid-write never
//! leaves a truncated snapshot behind.

pub mod atomic;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;
