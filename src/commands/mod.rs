//! Command implementations for lockgc.
//!
//! Each command builds a report from the run context and hands it to
//! [`emit`], which prints either the report's text rendering or its JSON
//! form. Reports are plain data so they can be tested without capturing
//! stdout.

mod diff;
mod expired;
mod prune;
mod valid;


use crate::cli::Command;
use crate::context::{RunContext, is_stdin};
use crate::error::{GcError, Result};
use crate::snapshot::{self, LockRecordSet};
use serde::Serialize;
use std::fmt::Display;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(ctx: &RunContext, command: Command) -> Result<()> {
    match command {
        Command::Valid(args) => emit(ctx, &valid::run_valid(ctx, &args)?),
        Command::Expired => emit(ctx, &expired::run_expired(ctx)?),
        Command::Diff(args) => emit(ctx, &diff::run_diff(ctx, &args)?),
        Command::Prune(args) => emit(ctx, &prune::run_prune(ctx, &args)?),
    }
}

/// Load a snapshot from a file, or from stdin when the path is `-`.
pub(crate) fn load_snapshot(path: &Path) -> Result<LockRecordSet> {
    if is_stdin(path) {
        snapshot::load_from_reader(std::io::stdin().lock())
    } else {
        snapshot::load(path)
    }
}

/// Print a report as text or JSON depending on `--json`.
fn emit<R: Serialize + Display>(ctx: &RunContext, report: &R) -> Result<()> {
    if ctx.json {
        let json = serde_json::to_string_pretty(report)
            .map_err(|e| GcError::UserError(format!("failed to serialize output: {}", e)))?;
        println!("{}", json);
    } else {
        print!("{}", report);
    }
    Ok(())
}
