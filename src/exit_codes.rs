//! Exit code constants for the lockgc CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config)
//! - 2: Snapshot source unavailable
//! - 3: Snapshot deserialization failure
//! - 4: Storage lock acquisition failure
//! - 5: Snapshot write-back failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// The snapshot could not be read (missing, permissions, I/O fault).
pub const SOURCE_UNAVAILABLE: i32 = 2;

/// The snapshot bytes did not match the record schema.
pub const DESERIALIZATION_FAILURE: i32 = 3;

/// The storage lock is held by another process.
pub const LOCK_FAILURE: i32 = 4;

/// Rewriting the snapshot failed.
pub const WRITE_FAILURE: i32 = 5;
