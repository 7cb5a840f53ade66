use thiserror::Error;

/// Serializer-level failures. `EmptyInput` and `NoValidUrls` are
/// precondition violations that are fatal to the single export that raised
/// them; the rest wrap encoder and filesystem failures.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("no records to serialize")]
    EmptyInput,

    #[error("no image URLs provided")]
    NoValidUrls,

    #[error("row-oriented formats require JSON object records")]
    NotTabular,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("csv encoding error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json encoding error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("arrow conversion error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("parquet encoding error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("zip encoding error: {0}")]
    Zip(#[from] zip::result::ZipError),
}
