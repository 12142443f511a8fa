//! Tests for snapshot loading and saving.

use super::*;
use crate::error::GcError;
use crate::test_support::write_snapshot;
use tempfile::TempDir;

#[test]
fn test_from_slice_canonical_schema() {
    let json = br#"[
        {"resourceGroupName": "g1", "ttl_unix_epoch": 100},
        {"resourceGroupName": "g2", "ttl_unix_epoch": 200}
    ]"#;

    let records = from_slice(json).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records.records()[0], LockRecord::new("g1", 100));
    assert_eq!(records.records()[1], LockRecord::new("g2", 200));
}

#[test]
fn test_from_slice_preserves_order_and_duplicates() {
    let json = br#"[
        {"resourceGroupName": "b", "ttl_unix_epoch": 3},
        {"resourceGroupName": "a", "ttl_unix_epoch": 1},
        {"resourceGroupName": "b", "ttl_unix_epoch": 2}
    ]"#;

    let records = from_slice(json).unwrap();

    assert_eq!(records.names(), vec!["b", "a", "b"]);
}

#[test]
fn test_from_slice_empty_array() {
    let records = from_slice(b"[]").unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_from_slice_maps_legacy_schema() {
    let json = br#"[
        {"resourceGroupName": "old", "ttl_unit_epoch": "1700000000", "skipLocking": "false"}
    ]"#;

    let records = from_slice(json).unwrap();

    assert_eq!(records.records(), &[LockRecord::new("old", 1_700_000_000)]);
}

#[test]
fn test_from_slice_canonical_ttl_wins_over_legacy() {
    let json = br#"[
        {"resourceGroupName": "g", "ttl_unix_epoch": 5, "ttl_unit_epoch": "9"}
    ]"#;

    let records = from_slice(json).unwrap();
    assert_eq!(records.records()[0].ttl_unix_epoch, 5);
}

#[test]
fn test_from_slice_ignores_unknown_fields() {
    let json = br#"[{"resourceGroupName": "g", "ttl_unix_epoch": 5, "owner": "ci"}]"#;
    let records = from_slice(json).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_from_slice_rejects_unparsable_legacy_ttl() {
    let json = br#"[{"resourceGroupName": "old", "ttl_unit_epoch": "soon"}]"#;

    let err = from_slice(json).unwrap_err();

    assert!(matches!(err, GcError::Deserialization(_)));
    assert!(err.to_string().contains("record 0"));
    assert!(err.to_string().contains("soon"));
}

#[test]
fn test_from_slice_rejects_string_canonical_ttl() {
    let json = br#"[{"resourceGroupName": "g", "ttl_unix_epoch": "100"}]"#;

    let err = from_slice(json).unwrap_err();

    assert!(matches!(err, GcError::Deserialization(_)));
    assert!(err.to_string().contains("record 0"));
}

#[test]
fn test_from_slice_fractional_ttl_names_record_index() {
    let json = br#"[
        {"resourceGroupName": "ok", "ttl_unix_epoch": 1},
        {"resourceGroupName": "g", "ttl_unix_epoch": 1.5}
    ]"#;

    let err = from_slice(json).unwrap_err();

    assert!(matches!(err, GcError::Deserialization(_)));
    assert!(err.to_string().contains("record 1"));
    assert!(err.to_string().contains("1.5"));
}

#[test]
fn test_from_slice_rejects_missing_ttl() {
    let json = br#"[
        {"resourceGroupName": "ok", "ttl_unix_epoch": 1},
        {"resourceGroupName": "broken"}
    ]"#;

    let err = from_slice(json).unwrap_err();

    assert!(matches!(err, GcError::Deserialization(_)));
    assert!(err.to_string().contains("record 1"));
    assert!(err.to_string().contains("ttl_unix_epoch"));
}

#[test]
fn test_from_slice_rejects_missing_or_empty_name() {
    let err = from_slice(br#"[{"ttl_unix_epoch": 1}]"#).unwrap_err();
    assert!(err.to_string().contains("resourceGroupName"));

    let err = from_slice(br#"[{"resourceGroupName": "", "ttl_unix_epoch": 1}]"#).unwrap_err();
    assert!(err.to_string().contains("must not be empty"));
}

#[test]
fn test_from_slice_rejects_malformed_json() {
    let inputs: [&[u8]; 4] = [b"", b"not json", b"{\"resourceGroupName\": \"g\"}", b"[{]"];
    for input in inputs {
        let err = from_slice(input).unwrap_err();
        assert!(
            matches!(err, GcError::Deserialization(_)),
            "expected deserialization error for {:?}",
            String::from_utf8_lossy(input)
        );
    }
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_snapshot(
        temp_dir.path(),
        r#"[{"resourceGroupName": "g1", "ttl_unix_epoch": 100}]"#,
    );

    let records = load(&path).unwrap();
    assert_eq!(records.names(), vec!["g1"]);
}

#[test]
fn test_load_missing_file_is_source_unavailable() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.json");

    let err = load(&path).unwrap_err();

    assert!(matches!(err, GcError::SourceUnavailable(_)));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_load_malformed_file_names_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_snapshot(temp_dir.path(), "[{\"resourceGroupName\": 7}]");

    let err = load(&path).unwrap_err();

    assert!(matches!(err, GcError::Deserialization(_)));
    assert!(err.to_string().contains("db.json"));
}

#[test]
fn test_load_from_reader() {
    let input = r#"[{"resourceGroupName": "g1", "ttl_unix_epoch": 100}]"#;
    let records = load_from_reader(input.as_bytes()).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_save_writes_canonical_schema() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("db.json");
    let records = LockRecordSet::from(vec![
        LockRecord::new("g1", 100),
        LockRecord::new("g2", 200),
    ]);

    save(&path, &records).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"resourceGroupName\""));
    assert!(content.contains("\"ttl_unix_epoch\""));
    assert!(!content.contains("ttl_unit_epoch"));
    assert_eq!(load(&path).unwrap(), records);
}

#[test]
fn test_save_normalizes_legacy_records() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_snapshot(
        temp_dir.path(),
        r#"[{"resourceGroupName": "old", "ttl_unit_epoch": "42", "skipLocking": "true"}]"#,
    );

    let records = load(&path).unwrap();
    save(&path, &records).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"ttl_unix_epoch\": 42"));
    assert!(!content.contains("skipLocking"));
}

#[test]
fn test_record_display_includes_timestamp() {
    let record = LockRecord::new("g1", 0);
    assert_eq!(record.to_string(), "g1 (ttl: 0, 1970-01-01 00:00:00 UTC)");
}

#[test]
fn test_into_records_keeps_snapshot_order() {
    let json = br#"[
        {"resourceGroupName": "g2", "ttl_unix_epoch": 200},
        {"resourceGroupName": "g1", "ttl_unix_epoch": 100},
        {"resourceGroupName": "g2", "ttl_unix_epoch": 300}
    ]"#;
    let records = from_slice(json).unwrap();
    let borrowed = records.records().to_vec();

    let owned = records.into_records();

    assert_eq!(owned, borrowed);
    assert_eq!(owned[2], LockRecord::new("g2", 300));
}
