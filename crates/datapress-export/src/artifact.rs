//! Artifact lifecycle management.
//!
//! An [`ExportArtifact`] owns the on-disk file backing one export response.
//! The file is deleted when the handle drops, on every exit path: normal
//! completion, a serialization error after a partial write, or caller
//! cancellation mid-stream. Deletion failure is logged and swallowed — by
//! that point the response is already committed. The store keeps no
//! registry of past artifacts.

use std::path::{Path, PathBuf};

use time::OffsetDateTime;
use uuid::Uuid;

use crate::{ExportError, ExportFormat};

/// Factory for request-scoped artifact files under one temp directory.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store under the system temp directory.
    pub fn default_location() -> Self {
        Self::new(std::env::temp_dir().join("datapress"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Reserve a uniquely named artifact path for one export. The directory
    /// is created on first use; uuid file names keep concurrent requests
    /// from colliding.
    pub fn create(&self, format: ExportFormat) -> Result<ExportArtifact, ExportError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self
            .dir
            .join(format!("{}.{}", Uuid::new_v4(), format.extension()));
        Ok(ExportArtifact {
            path,
            mime: format.mime(),
        })
    }
}

/// Exclusively owned handle to one export file. Lifetime equals the request
/// that created it.
#[derive(Debug)]
pub struct ExportArtifact {
    path: PathBuf,
    mime: &'static str,
}

impl ExportArtifact {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn mime(&self) -> &'static str {
        self.mime
    }

    pub fn read_bytes(&self) -> Result<Vec<u8>, ExportError> {
        Ok(std::fs::read(&self.path)?)
    }

    /// Copy the artifact content to a caller-owned destination. The
    /// artifact itself still gets deleted when this handle drops.
    pub fn copy_to(&self, destination: &Path) -> Result<u64, ExportError> {
        Ok(std::fs::copy(&self.path, destination)?)
    }
}

impl Drop for ExportArtifact {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {}
            Err(error) => {
                tracing::warn!(path = %self.path.display(), error = %error, "failed to delete export artifact");
            }
        }
    }
}

/// Deterministic download filename: `<domain>_<key>_<YYYYMMDD_HHMMSS>.<ext>`.
/// Spaces in the key become underscores.
pub fn download_file_name(domain: &str, key: &str, format: ExportFormat) -> String {
    let now = OffsetDateTime::now_utc();
    let stamp = format!(
        "{:04}{:02}{:02}_{:02}{:02}{:02}",
        now.year(),
        u8::from(now.month()),
        now.day(),
        now.hour(),
        now.minute(),
        now.second()
    );
    format!(
        "{domain}_{}_{stamp}.{}",
        key.replace(' ', "_"),
        format.extension()
    )
}
