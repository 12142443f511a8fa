//! Snapshot loading and saving.
//!
//! The loader is the only place that knows about snapshot field names. Each
//! record on the wire is decoded into [`WireRecord`] and then mapped into the
//! canonical [`LockRecord`]:
//!
//! | Wire field           | Schema    | Mapping                               |
//! |----------------------|-----------|---------------------------------------|
//! | `resourceGroupName`  | all       | required, non-empty                   |
//! | `ttl_unix_epoch`     | canonical | integer, taken as-is                  |
//! | `ttl_unit_epoch`     | legacy    | decimal string, parsed to an integer  |
//! | `skipLocking`        | legacy    | ignored                               |
//!
//! When both TTL fields are present the canonical one wins. Unknown fields are
//! ignored.

use super::types::{LockRecord, LockRecordSet};
use crate::error::{GcError, Result};
use crate::fs::atomic_write_file;
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct WireRecord {
    #[serde(rename = "resourceGroupName")]
    resource_group_name: Option<String>,

    ttl_unix_epoch: Option<i64>,

    #[serde(rename = "ttl_unit_epoch")]
    legacy_ttl: Option<String>,
}

impl WireRecord {
    fn into_record(self, index: usize) -> Result<LockRecord> {
        let name = match self.resource_group_name {
            Some(name) if !name.is_empty() => name,
            Some(_) => {
                return Err(GcError::Deserialization(format!(
                    "record {}: resourceGroupName must not be empty",
                    index
                )));
            }
            None => {
                return Err(GcError::Deserialization(format!(
                    "record {}: missing field `resourceGroupName`",
                    index
                )));
            }
        };

        let ttl = match (self.ttl_unix_epoch, self.legacy_ttl) {
            (Some(ttl), _) => ttl,
            (None, Some(legacy)) => legacy.trim().parse::<i64>().map_err(|e| {
                GcError::Deserialization(format!(
                    "record {} ('{}'): legacy ttl_unit_epoch '{}' is not an integer: {}",
                    index, name, legacy, e
                ))
            })?,
            (None, None) => {
                return Err(GcError::Deserialization(format!(
                    "record {} ('{}'): missing field `ttl_unix_epoch`",
                    index, name
                )));
            }
        };

        Ok(LockRecord::new(name, ttl))
    }
}

/// Decode a snapshot from raw bytes.
///
/// Either every record decodes or the whole snapshot is rejected.
pub fn from_slice(bytes: &[u8]) -> Result<LockRecordSet> {
    let values: Vec<serde_json::Value> =
        serde_json::from_slice(bytes).map_err(|e| GcError::Deserialization(e.to_string()))?;

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let record: WireRecord = serde_json::from_value(value)
                .map_err(|e| GcError::Deserialization(format!("record {}: {}", index, e)))?;
            record.into_record(index)
        })
        .collect()
}

/// Read and decode a snapshot from any reader (e.g. stdin).
pub fn load_from_reader<R: Read>(mut reader: R) -> Result<LockRecordSet> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| GcError::SourceUnavailable(format!("failed to read snapshot: {}", e)))?;

    let records = from_slice(&bytes)?;
    debug!(records = records.len(), "loaded snapshot from reader");
    Ok(records)
}

/// Read and decode the snapshot file at `path`.
///
/// # Returns
///
/// * `Ok(LockRecordSet)` - All records, in file order
/// * `Err(GcError::SourceUnavailable)` - The file could not be read
/// * `Err(GcError::Deserialization)` - The file is not a valid snapshot
pub fn load<P: AsRef<Path>>(path: P) -> Result<LockRecordSet> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|e| {
        GcError::SourceUnavailable(format!(
            "failed to read snapshot '{}': {}",
            path.display(),
            e
        ))
    })?;

    let records = from_slice(&bytes).map_err(|e| match e {
        GcError::Deserialization(msg) => {
            GcError::Deserialization(format!("'{}': {}", path.display(), msg))
        }
        other => other,
    })?;

    debug!(path = %path.display(), records = records.len(), "loaded snapshot");
    Ok(records)
}

/// Atomically replace the snapshot at `path` with `records` in the canonical schema.
pub fn save<P: AsRef<Path>>(path: P, records: &LockRecordSet) -> Result<()> {
    let path = path.as_ref();

    let mut json = records
        .to_json()
        .map_err(|e| GcError::WriteError(format!("failed to serialize snapshot: {}", e)))?;
    json.push('\n');

    atomic_write_file(path, &json)?;

    debug!(path = %path.display(), records = records.len(), "saved snapshot");
    Ok(())
}
