//! Expiry filtering for lock record sets.
//!
//! Every function here is pure: the reference time is supplied by the caller
//! (read once per run) and the input set is never modified. A record survives
//! only if its TTL is strictly greater than `now`.

use crate::snapshot::{LockRecord, LockRecordSet};
use serde::Serialize;

/// Both sides of an expiry pass over one record set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Partition {
    /// Records still locked at the reference time, in input order.
    pub valid: LockRecordSet,

    /// Records whose TTL is at or before the reference time, in input order.
    pub expired: LockRecordSet,
}

/// Records still locked at `now`, in input order.
pub fn filter_valid(records: &LockRecordSet, now: i64) -> LockRecordSet {
    records
        .iter()
        .filter(|r| r.is_valid_at(now))
        .cloned()
        .collect()
}

/// Names of the records still locked at `now`, in input order.
pub fn filter_valid_names(records: &LockRecordSet, now: i64) -> Vec<String> {
    records
        .iter()
        .filter(|r| r.is_valid_at(now))
        .map(|r| r.resource_group_name.clone())
        .collect()
}

/// Records released at or before `now`, in input order.
pub fn filter_expired(records: &LockRecordSet, now: i64) -> LockRecordSet {
    records
        .iter()
        .filter(|r| !r.is_valid_at(now))
        .cloned()
        .collect()
}

/// Split `records` into valid and expired sets in a single pass.
pub fn partition(records: &LockRecordSet, now: i64) -> Partition {
    let (valid, expired): (Vec<LockRecord>, Vec<LockRecord>) =
        records.iter().cloned().partition(|r| r.is_valid_at(now));

    Partition {
        valid: valid.into(),
        expired: expired.into(),
    }
}
