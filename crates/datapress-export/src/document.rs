//! Document-oriented JSON serialization.

use std::io::{BufWriter, Write};

use serde_json::Value;

use crate::{ArtifactStore, ExportArtifact, ExportError, ExportFormat};

/// Serialize a value to a pretty-printed JSON artifact. Field order follows
/// the order fields were inserted when the value was built, so repeated
/// exports of the same records produce identical bytes. An empty top-level
/// array is rejected; any other shape passes through untouched.
pub fn to_document(store: &ArtifactStore, value: &Value) -> Result<ExportArtifact, ExportError> {
    if matches!(value, Value::Array(items) if items.is_empty()) {
        return Err(ExportError::EmptyInput);
    }

    let artifact = store.create(ExportFormat::Json)?;
    let file = std::fs::File::create(artifact.path())?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> (tempfile::TempDir, ArtifactStore) {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = ArtifactStore::new(dir.path().join("artifacts"));
        (dir, store)
    }

    #[test]
    fn json_round_trips_nested_structure() {
        let (_guard, store) = store();
        let value = json!([{"city": "London", "temperature": {"current": 15.5}}]);
        let artifact = to_document(&store, &value).expect("json export");
        let body = artifact.read_bytes().expect("read");
        let parsed: Value = serde_json::from_slice(&body).expect("parse");
        assert_eq!(parsed, value);
    }

    #[test]
    fn output_is_deterministic_across_exports() {
        let (_guard, store) = store();
        let value = json!({"b": 1, "a": 2});
        let first = to_document(&store, &value)
            .and_then(|artifact| artifact.read_bytes())
            .expect("first export");
        let second = to_document(&store, &value)
            .and_then(|artifact| artifact.read_bytes())
            .expect("second export");
        assert_eq!(first, second);
    }

    #[test]
    fn empty_array_is_rejected() {
        let (_guard, store) = store();
        assert!(matches!(
            to_document(&store, &json!([])),
            Err(ExportError::EmptyInput)
        ));
    }

    #[test]
    fn empty_object_is_allowed() {
        let (_guard, store) = store();
        let artifact = to_document(&store, &json!({})).expect("json export");
        assert_eq!(artifact.read_bytes().expect("read"), b"{}");
    }
}
