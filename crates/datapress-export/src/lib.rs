//! # Datapress Export
//!
//! Serializers and artifact lifecycle for normalized records.
//!
//! ## Overview
//!
//! Every export follows the same shape: records in, a request-scoped
//! [`ExportArtifact`] out. Artifacts live under an [`ArtifactStore`]
//! directory with uuid file names and are deleted when the handle drops,
//! whether the export succeeded or not.
//!
//! | Module | Format | Entry point |
//! |--------|--------|-------------|
//! | [`table`] | CSV | [`to_table`] |
//! | [`document`] | JSON | [`to_document`] |
//! | [`columnar`] | Parquet | [`to_columnar`] |
//! | [`archive`] | ZIP of images | [`to_archive`] |
//!
//! Row-oriented formats (CSV, Parquet) take the first record as the schema
//! authority: its fields define the columns, and for Parquet also the column
//! types. Callers exporting heterogeneous record sets should pick the JSON
//! format instead.

pub mod archive;
pub mod artifact;
pub mod columnar;
pub mod document;
pub mod error;
pub mod format;
pub mod table;

pub use archive::{to_archive, MAX_ARCHIVE_IMAGES};
pub use artifact::{download_file_name, ArtifactStore, ExportArtifact};
pub use columnar::to_columnar;
pub use document::to_document;
pub use error::ExportError;
pub use format::ExportFormat;
pub use table::to_table;
