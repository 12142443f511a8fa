//! `lockgc valid`: records still held at the reference time.

use super::load_snapshot;
use crate::cli::ValidArgs;
use crate::context::RunContext;
use crate::error::Result;
use crate::expiry::{filter_valid, filter_valid_names};
use crate::snapshot::LockRecordSet;
use serde::Serialize;
use std::fmt;
use tracing::info;

/// Output of `valid`.
///
/// The JSON form of `Records` is itself a canonical snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub(super) enum ValidReport {
    Records(LockRecordSet),
    Names(Vec<String>),
}

pub(super) fn run_valid(ctx: &RunContext, args: &ValidArgs) -> Result<ValidReport> {
    let records = load_snapshot(&ctx.snapshot_path)?;

    let report = if args.names {
        ValidReport::Names(filter_valid_names(&records, ctx.now))
    } else {
        ValidReport::Records(filter_valid(&records, ctx.now))
    };

    info!(
        snapshot = %ctx.snapshot_path.display(),
        now = ctx.now,
        total = records.len(),
        valid = report.len(),
        "filtered valid locks"
    );

    Ok(report)
}

impl ValidReport {
    pub(super) fn len(&self) -> usize {
        match self {
            ValidReport::Records(records) => records.len(),
            ValidReport::Names(names) => names.len(),
        }
    }
}

impl fmt::Display for ValidReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // One name per line so the output can be piped.
            ValidReport::Names(names) => {
                for name in names {
                    writeln!(f, "{}", name)?;
                }
                Ok(())
            }
            ValidReport::Records(records) if records.is_empty() => writeln!(f, "No valid locks."),
            ValidReport::Records(records) => {
                writeln!(f, "Valid locks ({}):", records.len())?;
                for record in records {
                    writeln!(f, "  {}", record)?;
                }
                Ok(())
            }
        }
    }
}
