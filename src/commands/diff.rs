//! `lockgc diff`: resource groups whose locks lapsed between two snapshots.

use super::load_snapshot;
use crate::cli::DiffArgs;
use crate::context::{RunContext, is_stdin};
use crate::error::{GcError, Result};
use crate::expiry::filter_valid_names;
use crate::setdiff::difference;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(super) struct DiffReport {
    pub previous: PathBuf,
    pub current: PathBuf,
    pub now: i64,

    /// Groups valid in `previous` but not in `current`, in `previous` order.
    pub lapsed: Vec<String>,
}

pub(super) fn run_diff(ctx: &RunContext, args: &DiffArgs) -> Result<DiffReport> {
    let previous_path = args.previous.clone();
    let current_path = args
        .current
        .clone()
        .unwrap_or_else(|| ctx.snapshot_path.clone());

    if is_stdin(&previous_path) && is_stdin(&current_path) {
        return Err(GcError::UserError(
            "only one of --previous and --current can be read from stdin".to_string(),
        ));
    }

    let previous = load_snapshot(&previous_path)?;
    let current = load_snapshot(&current_path)?;

    // Both sides share one cutoff.
    let previous_valid = filter_valid_names(&previous, ctx.now);
    let current_valid = filter_valid_names(&current, ctx.now);
    let lapsed = difference(&previous_valid, &current_valid);

    info!(
        previous = %previous_path.display(),
        current = %current_path.display(),
        now = ctx.now,
        previous_valid = previous_valid.len(),
        current_valid = current_valid.len(),
        lapsed = lapsed.len(),
        "compared snapshots"
    );

    Ok(DiffReport {
        previous: previous_path,
        current: current_path,
        now: ctx.now,
        lapsed,
    })
}

impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for name in &self.lapsed {
            writeln!(f, "{}", name)?;
        }
        Ok(())
    }
}
