//! Behavior-driven tests for ZIP archive exports
//!
//! These tests verify HOW image downloads are capped, named, and isolated
//! from one another when some of them fail.

use datapress_export::{to_archive, ArtifactStore, ExportArtifact, ExportError};
use datapress_tests::*;

fn store() -> (tempfile::TempDir, ArtifactStore) {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = ArtifactStore::new(dir.path().join("exports"));
    (dir, store)
}

fn photo_urls(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("https://images.test/photo-{i}/original.jpg"))
        .collect()
}

fn entry_names(artifact: &ExportArtifact) -> Vec<String> {
    let file = std::fs::File::open(artifact.path()).expect("open zip");
    let archive = zip::ZipArchive::new(file).expect("read zip");
    let mut names: Vec<String> = archive.file_names().map(str::to_owned).collect();
    names.sort();
    names
}

// =============================================================================
// Archive: Download Cap
// =============================================================================

#[tokio::test]
async fn when_more_than_ten_urls_arrive_only_the_first_ten_are_fetched() {
    // Given: Twelve candidate URLs and a healthy image host
    let (_guard, store) = store();
    let http = CannedHttpClient::new().with_bytes("images.test", vec![0xFF, 0xD8]);

    // When: The archive is assembled
    let artifact = to_archive(&store, &http, &photo_urls(12))
        .await
        .expect("archive export");

    // Then: The eleventh and twelfth URLs were never requested
    assert_eq!(http.requests().len(), 10);
    assert_eq!(entry_names(&artifact).len(), 10);
}

// =============================================================================
// Archive: Failure Isolation
// =============================================================================

#[tokio::test]
async fn when_three_of_ten_downloads_fail_seven_images_remain() {
    // Given: Ten URLs where three specific photos error out
    let (_guard, store) = store();
    let http = CannedHttpClient::new()
        .with_bytes_failure("photo-1/", "connection reset")
        .with_bytes_failure("photo-4/", "connection reset")
        .with_bytes_failure("photo-7/", "connection reset")
        .with_bytes("images.test", vec![0xFF, 0xD8]);

    // When: The archive is assembled
    let artifact = to_archive(&store, &http, &photo_urls(10))
        .await
        .expect("partial failure is not fatal");

    // Then: Seven entries remain and numbering keeps its gaps
    let names = entry_names(&artifact);
    assert_eq!(names.len(), 7);
    assert!(!names.contains(&String::from("image_2.jpg")));
    assert!(!names.contains(&String::from("image_5.jpg")));
    assert!(!names.contains(&String::from("image_8.jpg")));
    assert!(names.contains(&String::from("image_1.jpg")));
    assert!(names.contains(&String::from("image_10.jpg")));
}

#[tokio::test]
async fn when_every_download_fails_the_archive_is_valid_and_empty() {
    // Given: URLs whose downloads all error out
    let (_guard, store) = store();
    let http = CannedHttpClient::new().with_bytes_failure("images.test", "connection reset");

    // When: The archive is assembled
    let artifact = to_archive(&store, &http, &photo_urls(3))
        .await
        .expect("an empty archive is still an archive");

    // Then: The file opens as a ZIP with zero entries
    assert!(entry_names(&artifact).is_empty());
}

#[tokio::test]
async fn when_no_urls_are_given_the_export_is_rejected() {
    // Given: An empty URL list
    let (_guard, store) = store();
    let http = CannedHttpClient::new();

    // When: The archive is requested
    let result = to_archive(&store, &http, &[]).await;

    // Then: The precondition fires before any file is created
    assert!(matches!(result, Err(ExportError::NoValidUrls)));
    assert!(http.requests().is_empty());
}

// =============================================================================
// Archive: Entry Content
// =============================================================================

#[tokio::test]
async fn archive_entries_carry_the_downloaded_bytes() {
    // Given: One URL returning known bytes
    let (_guard, store) = store();
    let http = CannedHttpClient::new().with_bytes("images.test", vec![1, 2, 3, 4]);

    // When: The archive is assembled and read back
    let artifact = to_archive(&store, &http, &photo_urls(1))
        .await
        .expect("archive export");
    let file = std::fs::File::open(artifact.path()).expect("open zip");
    let mut archive = zip::ZipArchive::new(file).expect("read zip");
    let mut entry = archive.by_name("image_1.jpg").expect("entry");
    let mut body = Vec::new();
    std::io::Read::read_to_end(&mut entry, &mut body).expect("read entry");

    // Then: The entry body is exactly what the host served
    assert_eq!(body, vec![1, 2, 3, 4]);
}
