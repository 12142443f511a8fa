//! Lock record and record set definitions.

use serde::Serialize;

/// A named resource-group entry with the instant its lock is released.
///
/// Serializes to the canonical snapshot schema. Deserialization goes through
/// the loader so that legacy field names are mapped explicitly.
///
/// Fields are public for reading. Nothing in the crate mutates a record once
/// loaded: filtering clones records into a new set, and a rewritten snapshot
/// is built from those clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LockRecord {
    /// Identifier of the locked resource group. Non-empty, not unique.
    #[serde(rename = "resourceGroupName")]
    pub resource_group_name: String,

    /// Unix epoch second after which the lock is considered released.
    pub ttl_unix_epoch: i64,
}

impl LockRecord {
    pub fn new(resource_group_name: impl Into<String>, ttl_unix_epoch: i64) -> Self {
        Self {
            resource_group_name: resource_group_name.into(),
            ttl_unix_epoch,
        }
    }

    /// Whether the lock is still held at `now`.
    ///
    /// A record whose TTL equals `now` has already expired.
    pub fn is_valid_at(&self, now: i64) -> bool {
        self.ttl_unix_epoch > now
    }
}

/// Ordered sequence of lock records in snapshot order.
///
/// Duplicates are preserved. Filtering produces a new set and never touches
/// the original.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LockRecordSet {
    records: Vec<LockRecord>,
}

impl LockRecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LockRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[LockRecord] {
        &self.records
    }

    /// Take the records out of the set, keeping snapshot order.
    pub fn into_records(self) -> Vec<LockRecord> {
        self.records
    }

    /// Resource group names in record order, duplicates included.
    pub fn names(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.resource_group_name.clone())
            .collect()
    }

    /// Serialize the set in the canonical snapshot schema.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<Vec<LockRecord>> for LockRecordSet {
    fn from(records: Vec<LockRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<LockRecord> for LockRecordSet {
    fn from_iter<I: IntoIterator<Item = LockRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for LockRecordSet {
    type Item = LockRecord;
    type IntoIter = std::vec::IntoIter<LockRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_records().into_iter()
    }
}

impl<'a> IntoIterator for &'a LockRecordSet {
    type Item = &'a LockRecord;
    type IntoIter = std::slice::Iter<'a, LockRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl std::fmt::Display for LockRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match chrono::DateTime::from_timestamp(self.ttl_unix_epoch, 0) {
            Some(ts) => write!(
                f,
                "{} (ttl: {}, {})",
                self.resource_group_name,
                self.ttl_unix_epoch,
                ts.format("%Y-%m-%d %H:%M:%S UTC")
            ),
            None => write!(
                f,
                "{} (ttl: {})",
                self.resource_group_name, self.ttl_unix_epoch
            ),
        }
    }
}
