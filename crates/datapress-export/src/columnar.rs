//! Columnar Parquet serialization.

use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Builder, Int64Builder, StringBuilder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde_json::Value;

use crate::{ArtifactStore, ExportArtifact, ExportError, ExportFormat};

/// Serialize records to a Parquet artifact. The first record defines both
/// the column set and the column types: integers map to Int64, other
/// numbers to Float64, everything else to Utf8. Later records are coerced
/// into that schema; a value that does not fit its column becomes null,
/// nested values render as compact JSON text.
pub fn to_columnar(
    store: &ArtifactStore,
    records: &[Value],
) -> Result<ExportArtifact, ExportError> {
    if records.is_empty() {
        return Err(ExportError::EmptyInput);
    }
    let Some(first) = records[0].as_object() else {
        return Err(ExportError::NotTabular);
    };

    let fields: Vec<Field> = first
        .iter()
        .map(|(name, value)| Field::new(name, infer_type(value), true))
        .collect();
    let schema = Arc::new(Schema::new(fields));

    let columns: Vec<ArrayRef> = schema
        .fields()
        .iter()
        .map(|field| build_column(field.name(), field.data_type(), records))
        .collect();
    let batch = RecordBatch::try_new(Arc::clone(&schema), columns)?;

    let artifact = store.create(ExportFormat::Parquet)?;
    let file = std::fs::File::create(artifact.path())?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(artifact)
}

fn infer_type(value: &Value) -> DataType {
    match value {
        Value::Number(number) if number.is_i64() || number.is_u64() => DataType::Int64,
        Value::Number(_) => DataType::Float64,
        _ => DataType::Utf8,
    }
}

fn build_column(name: &str, data_type: &DataType, records: &[Value]) -> ArrayRef {
    match data_type {
        DataType::Int64 => {
            let mut builder = Int64Builder::with_capacity(records.len());
            for record in records {
                builder.append_option(record.get(name).and_then(Value::as_i64));
            }
            Arc::new(builder.finish())
        }
        DataType::Float64 => {
            let mut builder = Float64Builder::with_capacity(records.len());
            for record in records {
                builder.append_option(record.get(name).and_then(Value::as_f64));
            }
            Arc::new(builder.finish())
        }
        _ => {
            let mut builder = StringBuilder::new();
            for record in records {
                match record.get(name) {
                    None | Some(Value::Null) => builder.append_null(),
                    Some(Value::String(text)) => builder.append_value(text),
                    Some(other) => builder.append_value(other.to_string()),
                }
            }
            Arc::new(builder.finish())
        }
    }
}
