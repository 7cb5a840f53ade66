//! Row-oriented CSV serialization.

use serde_json::Value;

use crate::{ArtifactStore, ExportArtifact, ExportError, ExportFormat};

/// Serialize records to a CSV artifact. The first record defines the column
/// set and order; later records contribute only the columns the first one
/// declared, missing fields render empty, nested values render as compact
/// JSON.
pub fn to_table(store: &ArtifactStore, records: &[Value]) -> Result<ExportArtifact, ExportError> {
    if records.is_empty() {
        return Err(ExportError::EmptyInput);
    }
    let Some(first) = records[0].as_object() else {
        return Err(ExportError::NotTabular);
    };
    let columns: Vec<&str> = first.keys().map(String::as_str).collect();

    let artifact = store.create(ExportFormat::Csv)?;
    let mut writer = csv::Writer::from_path(artifact.path())?;
    writer.write_record(&columns)?;
    for record in records {
        let row = record.as_object();
        let cells: Vec<String> = columns
            .iter()
            .map(|column| cell(row.and_then(|fields| fields.get(*column))))
            .collect();
        writer.write_record(&cells)?;
    }
    writer.flush()?;
    Ok(artifact)
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Number(number)) => number.to_string(),
        Some(nested) => nested.to_string(),
    }
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
    fn first_record_defines_columns() {
        let (_guard, store) = store();
        let records = vec![
            json!({"date": "2024-01-02", "close": 101.5}),
            json!({"date": "2024-01-01", "close": 100.0, "extra": true}),
        ];
        let artifact = to_table(&store, &records).expect("csv export");
        let body = artifact.read_bytes().expect("read");
        let text = String::from_utf8(body).expect("utf8");
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("date,close"));
        assert_eq!(lines.next(), Some("2024-01-02,101.5"));
        assert_eq!(lines.next(), Some("2024-01-01,100.0"));
    }

    #[test]
    fn missing_fields_render_empty() {
        let (_guard, store) = store();
        let records = vec![
            json!({"title": "a", "author": "x"}),
            json!({"title": "b"}),
        ];
        let artifact = to_table(&store, &records).expect("csv export");
        let text = String::from_utf8(artifact.read_bytes().expect("read")).expect("utf8");
        assert!(text.lines().any(|line| line == "b,"));
    }

    #[test]
    fn nested_values_render_as_json() {
        let (_guard, store) = store();
        let records = vec![json!({"city": "London", "temperature": {"current": 15.5}})];
        let artifact = to_table(&store, &records).expect("csv export");
        let text = String::from_utf8(artifact.read_bytes().expect("read")).expect("utf8");
        assert!(text.contains(r#"{""current"":15.5}"#));
    }

    #[test]
    fn empty_input_is_rejected() {
        let (_guard, store) = store();
        assert!(matches!(to_table(&store, &[]), Err(ExportError::EmptyInput)));
    }

    #[test]
    fn non_object_records_are_rejected() {
        let (_guard, store) = store();
        let records = vec![json!([1, 2, 3])];
        assert!(matches!(
            to_table(&store, &records),
            Err(ExportError::NotTabular)
        ));
    }
}
