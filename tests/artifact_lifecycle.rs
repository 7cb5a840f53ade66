//! Behavior-driven tests for artifact lifecycle
//!
//! These tests verify HOW export files are created, handed to callers, and
//! guaranteed to disappear when their request is over.

use datapress_export::{to_document, to_table, ArtifactStore, ExportFormat};
use serde_json::json;

fn store() -> (tempfile::TempDir, ArtifactStore) {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = ArtifactStore::new(dir.path().join("exports"));
    (dir, store)
}

// =============================================================================
// Lifecycle: Guaranteed Deletion
// =============================================================================

#[test]
fn when_an_export_completes_the_artifact_is_deleted_on_drop() {
    // Given: A finished JSON export
    let (_guard, store) = store();
    let artifact = to_document(&store, &json!({"location": "London"})).expect("json export");
    let path = artifact.path().to_owned();
    assert!(path.exists(), "artifact exists while the handle lives");

    // When: The handle goes out of scope
    drop(artifact);

    // Then: The file is gone
    assert!(!path.exists());
}

#[test]
fn when_the_artifact_was_already_removed_drop_stays_silent() {
    // Given: An artifact whose file someone deleted out from under us
    let (_guard, store) = store();
    let artifact = to_document(&store, &json!({"ok": true})).expect("json export");
    std::fs::remove_file(artifact.path()).expect("external delete");

    // When/Then: Dropping the handle neither panics nor errors
    drop(artifact);
}

#[test]
fn when_a_serialization_fails_no_stray_files_are_left_behind() {
    // Given: A record set CSV cannot encode (non-object first record)
    let (_guard, store) = store();

    // When: The export fails
    let result = to_table(&store, &[json!([1, 2, 3])]);
    assert!(result.is_err());

    // Then: The store directory holds nothing
    let leftovers = std::fs::read_dir(store.dir())
        .map(|entries| entries.count())
        .unwrap_or(0);
    assert_eq!(leftovers, 0);
}

// =============================================================================
// Lifecycle: Handover
// =============================================================================

#[test]
fn copies_made_for_the_caller_outlive_the_artifact() {
    // Given: A finished export copied to a caller-owned path
    let (guard, store) = store();
    let artifact = to_document(&store, &json!({"location": "London"})).expect("json export");
    let destination = guard.path().join("delivered.json");
    artifact.copy_to(&destination).expect("copy");

    // When: The artifact handle drops
    drop(artifact);

    // Then: The caller's copy survives
    assert!(destination.exists());
    let body = std::fs::read_to_string(&destination).expect("read copy");
    assert!(body.contains("London"));
}

#[test]
fn artifacts_created_back_to_back_never_collide() {
    let (_guard, store) = store();
    let a = store.create(ExportFormat::Json).expect("a");
    let b = store.create(ExportFormat::Json).expect("b");
    let c = store.create(ExportFormat::Csv).expect("c");
    assert_ne!(a.path(), b.path());
    assert_ne!(b.path(), c.path());
}
