//! Tests for the storage lock.

use super::*;
use crate::error::GcError;
use crate::test_support::test_context;
use chrono::{Duration, Utc};
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_metadata_names_snapshot_and_holder() {
    let meta = LockMetadata::for_snapshot(Path::new("db.json"), "prune");

    assert_eq!(meta.snapshot, Path::new("db.json"));
    assert_eq!(meta.action, "prune");
    assert!(meta.holder.contains('@'));
    assert_eq!(meta.pid, Some(std::process::id()));
    assert!(meta.held_for(Utc::now()) < Duration::minutes(1));
}

#[test]
fn test_metadata_json_round_trips_through_lock_file() {
    let temp_dir = TempDir::new().unwrap();
    let lock_path = temp_dir.path().join("db.json.lock");
    let meta = LockMetadata::for_snapshot(Path::new("db.json"), "prune");

    std::fs::write(&lock_path, meta.to_json().unwrap()).unwrap();
    let read = LockMetadata::read(&lock_path).unwrap();

    assert_eq!(read.snapshot, meta.snapshot);
    assert_eq!(read.acquired_at, meta.acquired_at);
}

#[test]
fn test_metadata_staleness_uses_given_time() {
    let meta = LockMetadata::for_snapshot(Path::new("db.json"), "prune");
    let later = meta.acquired_at + Duration::minutes(150);

    assert!(!meta.is_stale_at(meta.acquired_at, 120));
    assert!(meta.is_stale_at(later, 120));
    assert!(!meta.is_stale_at(later, 180));
}

#[test]
fn test_metadata_held_for_clamps_clock_skew() {
    let meta = LockMetadata::for_snapshot(Path::new("db.json"), "prune");
    let earlier = meta.acquired_at - Duration::minutes(5);

    assert_eq!(meta.held_for(earlier), Duration::zero());
}

#[test]
fn test_acquire_snapshot_lock_records_snapshot() {
    let temp_dir = TempDir::new().unwrap();
    let snapshot = temp_dir.path().join("db.json");
    let ctx = test_context(&snapshot, 0);

    let _guard = acquire_snapshot_lock(&ctx, "prune").unwrap();

    let meta = LockMetadata::read(&ctx.lock_path()).unwrap();
    assert_eq!(meta.snapshot, snapshot);
    assert_eq!(meta.action, "prune");
    assert_eq!(meta.pid, Some(std::process::id()));
}

#[test]
fn test_lock_released_on_drop() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = test_context(&temp_dir.path().join("db.json"), 0);

    {
        let _guard = acquire_snapshot_lock(&ctx, "prune").unwrap();
        assert!(ctx.lock_path().exists());
    }

    assert!(!ctx.lock_path().exists());
}

#[test]
fn test_lock_manual_release() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = test_context(&temp_dir.path().join("db.json"), 0);

    let guard = acquire_snapshot_lock(&ctx, "prune").unwrap();
    guard.release().unwrap();

    assert!(!ctx.lock_path().exists());
}

#[test]
fn test_release_reports_missing_lock_file() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = test_context(&temp_dir.path().join("db.json"), 0);

    let guard = acquire_snapshot_lock(&ctx, "prune").unwrap();
    std::fs::remove_file(ctx.lock_path()).unwrap();

    let err = guard.release().unwrap_err();
    assert!(matches!(err, GcError::LockError(_)));
}

#[test]
fn test_second_acquire_names_holder_and_snapshot() {
    let temp_dir = TempDir::new().unwrap();
    let snapshot = temp_dir.path().join("db.json");
    let ctx = test_context(&snapshot, 0);

    let _guard = acquire_snapshot_lock(&ctx, "prune").unwrap();
    let err = acquire_snapshot_lock(&ctx, "prune").unwrap_err();
    let message = err.to_string();

    assert!(matches!(err, GcError::LockError(_)));
    assert!(message.contains("held by another process"));
    assert!(message.contains(&format!("running `prune` on '{}'", snapshot.display())));
    assert!(message.contains(&format!("(pid {})", std::process::id())));
    assert!(!message.contains("stale"));
}

#[test]
fn test_lock_reacquirable_after_release() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = test_context(&temp_dir.path().join("db.json"), 0);

    drop(acquire_snapshot_lock(&ctx, "prune").unwrap());

    assert!(acquire_snapshot_lock(&ctx, "prune").is_ok());
}

#[test]
fn test_stale_lock_is_reported_not_removed() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = test_context(&temp_dir.path().join("db.json"), 0);

    let stale = LockMetadata {
        snapshot: ctx.snapshot_path.clone(),
        action: "prune".to_string(),
        holder: "ops@old-host".to_string(),
        pid: Some(12345),
        acquired_at: Utc::now() - Duration::minutes(200),
    };
    std::fs::write(ctx.lock_path(), stale.to_json().unwrap()).unwrap();

    let err = acquire_snapshot_lock(&ctx, "prune").unwrap_err();
    let message = err.to_string();

    assert!(message.contains("ops@old-host (pid 12345)"));
    assert!(message.contains("for 3h 20m"));
    assert!(message.contains("stale"));
    assert!(ctx.lock_path().exists());
}

#[test]
fn test_unreadable_lock_still_blocks() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = test_context(&temp_dir.path().join("db.json"), 0);
    std::fs::write(ctx.lock_path(), "not json").unwrap();

    let err = acquire_snapshot_lock(&ctx, "prune").unwrap_err();

    assert!(matches!(err, GcError::LockError(_)));
    assert!(!err.to_string().contains("Holder:"));
}
