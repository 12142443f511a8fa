//! `lockgc expired`: records released at or before the reference time.

use super::load_snapshot;
use crate::context::RunContext;
use crate::error::Result;
use crate::expiry::filter_expired;
use crate::snapshot::LockRecordSet;
use serde::Serialize;
use std::fmt;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub(super) struct ExpiredReport {
    pub expired: LockRecordSet,
}

pub(super) fn run_expired(ctx: &RunContext) -> Result<ExpiredReport> {
    let records = load_snapshot(&ctx.snapshot_path)?;
    let expired = filter_expired(&records, ctx.now);

    info!(
        snapshot = %ctx.snapshot_path.display(),
        now = ctx.now,
        total = records.len(),
        expired = expired.len(),
        "filtered expired locks"
    );

    Ok(ExpiredReport { expired })
}

impl fmt::Display for ExpiredReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.expired.is_empty() {
            return writeln!(f, "No expired locks.");
        }

        writeln!(f, "Expired locks ({}):", self.expired.len())?;
        for record in &self.expired {
            writeln!(f, "  {}", record)?;
        }
        Ok(())
    }
}
