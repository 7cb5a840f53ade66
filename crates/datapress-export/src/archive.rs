//! ZIP archive assembly from remote image URLs.

use std::io::Write;

use datapress_core::{HttpClient, HttpRequest, IMAGE_FETCH_TIMEOUT_MS};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::{ArtifactStore, ExportArtifact, ExportError, ExportFormat};

/// Only the first this many URLs are fetched; the rest are ignored.
pub const MAX_ARCHIVE_IMAGES: usize = 10;

/// Download up to [`MAX_ARCHIVE_IMAGES`] images sequentially and bundle them
/// into a ZIP artifact. Entries are named `image_<n>.jpg` by input position,
/// so a failed download leaves a gap in the numbering rather than renumbering
/// later entries. A download failure excludes that image only; an archive
/// where every download failed is still a valid, empty archive.
pub async fn to_archive(
    store: &ArtifactStore,
    http: &dyn HttpClient,
    urls: &[String],
) -> Result<ExportArtifact, ExportError> {
    if urls.is_empty() {
        return Err(ExportError::NoValidUrls);
    }

    let artifact = store.create(ExportFormat::Zip)?;
    let file = std::fs::File::create(artifact.path())?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for (index, url) in urls.iter().take(MAX_ARCHIVE_IMAGES).enumerate() {
        let request = HttpRequest::get(url).with_timeout_ms(IMAGE_FETCH_TIMEOUT_MS);
        match http.execute_bytes(request).await {
            Ok(response) if response.is_success() => {
                writer.start_file(format!("image_{}.jpg", index + 1), options)?;
                writer.write_all(&response.body)?;
            }
            Ok(response) => {
                tracing::warn!(url = %url, status = response.status, "image download failed, skipping");
            }
            Err(error) => {
                tracing::warn!(url = %url, error = %error, "image download failed, skipping");
            }
        }
    }

    writer.finish()?;
    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use datapress_core::{HttpBytes, HttpError, HttpResponse};
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::Mutex;

    struct FlakyImageClient {
        // urls recorded for cap assertions
        seen: Mutex<Vec<String>>,
        fail_containing: &'static str,
    }

    impl FlakyImageClient {
        fn new(fail_containing: &'static str) -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
                fail_containing,
            }
        }
    }

    impl HttpClient for FlakyImageClient {
        fn execute<'a>(
            &'a self,
            _request: HttpRequest,
        ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
            Box::pin(async { Ok(HttpResponse::ok_json("{}")) })
        }

        fn execute_bytes<'a>(
            &'a self,
            request: HttpRequest,
        ) -> Pin<Box<dyn Future<Output = Result<HttpBytes, HttpError>> + Send + 'a>> {
            Box::pin(async move {
                self.seen
                    .lock()
                    .expect("seen lock")
                    .push(request.url.clone());
                if !self.fail_containing.is_empty() && request.url.contains(self.fail_containing) {
                    return Err(HttpError::new("connection reset"));
                }
                Ok(HttpBytes {
                    status: 200,
                    body: request.url.into_bytes(),
                })
            })
        }
    }

    fn store() -> (tempfile::TempDir, ArtifactStore) {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = ArtifactStore::new(dir.path().join("artifacts"));
        (dir, store)
    }

    fn entry_names(artifact: &ExportArtifact) -> Vec<String> {
        let file = std::fs::File::open(artifact.path()).expect("open zip");
        let archive = zip::ZipArchive::new(file).expect("read zip");
        archive.file_names().map(str::to_owned).collect()
    }

    fn urls(count: usize) -> Vec<String> {
        (0..count)
            .map(|i| format!("https://images.test/photo-{i}.jpg"))
            .collect()
    }

    #[tokio::test]
    async fn at_most_ten_urls_are_fetched() {
        let (_guard, store) = store();
        let client = FlakyImageClient::new("");
        let artifact = to_archive(&store, &client, &urls(12))
            .await
            .expect("archive export");

        assert_eq!(client.seen.lock().expect("seen lock").len(), 10);
        assert_eq!(entry_names(&artifact).len(), 10);
    }

    #[tokio::test]
    async fn failed_downloads_leave_gaps_in_entry_numbering() {
        let (_guard, store) = store();
        let client = FlakyImageClient::new("photo-1.jpg");
        let artifact = to_archive(&store, &client, &urls(3))
            .await
            .expect("archive export");

        let mut names = entry_names(&artifact);
        names.sort();
        assert_eq!(names, vec!["image_1.jpg", "image_3.jpg"]);
    }

    #[tokio::test]
    async fn all_downloads_failing_yields_an_empty_archive() {
        let (_guard, store) = store();
        let client = FlakyImageClient::new("photo-");
        let artifact = to_archive(&store, &client, &urls(3))
            .await
            .expect("archive export");

        assert!(entry_names(&artifact).is_empty());
    }

    #[tokio::test]
    async fn empty_url_list_is_rejected() {
        let (_guard, store) = store();
        let client = FlakyImageClient::new("");
        let result = to_archive(&store, &client, &[]).await;
        assert!(matches!(result, Err(ExportError::NoValidUrls)));
    }
}
