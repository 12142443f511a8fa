//! Error types for the lockgc CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for lockgc operations.
///
/// Each variant maps to a specific exit code. The expiry filter and set
/// difference never fail; every variant here originates at a boundary
/// (loader, config, storage lock, write-back).
#[derive(Error, Debug)]
pub enum GcError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// The snapshot could not be read.
    #[error("Snapshot unavailable: {0}")]
    SourceUnavailable(String),

    /// The snapshot bytes do not parse into the record schema.
    #[error("Snapshot deserialization failed: {0}")]
    Deserialization(String),

    /// The storage lock could not be acquired.
    #[error("Lock acquisition failed: {0}")]
    LockError(String),

    /// Writing the filtered snapshot back failed.
    #[error("Snapshot write failed: {0}")]
    WriteError(String),
}

impl GcError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GcError::UserError(_) => exit_codes::USER_ERROR,
            GcError::SourceUnavailable(_) => exit_codes::SOURCE_UNAVAILABLE,
            GcError::Deserialization(_) => exit_codes::DESERIALIZATION_FAILURE,
            GcError::LockError(_) => exit_codes::LOCK_FAILURE,
            GcError::WriteError(_) => exit_codes::WRITE_FAILURE,
        }
    }
}

/// Result type alias for lockgc operations.
pub type Result<T> = std::result::Result<T, GcError>;
