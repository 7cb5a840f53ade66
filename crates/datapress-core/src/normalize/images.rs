use serde_json::Value;

use super::{i64_at, string_at};
use crate::domain::{ImageAsset, ImageBatch, ImageVariants};
use crate::SourceError;

/// Normalize a Pexels photo-search payload. The four resolution variants
/// are extracted independently; a variant the provider omitted becomes an
/// empty string so the structure stays uniform.
pub fn normalize_images(raw: &Value) -> Result<ImageBatch, SourceError> {
    let photos = raw
        .get("photos")
        .and_then(Value::as_array)
        .ok_or_else(|| SourceError::invalid_source_data("image payload missing 'photos' array"))?;

    let photos = photos
        .iter()
        .map(|photo| ImageAsset {
            id: i64_at(photo, &["id"]),
            width: i64_at(photo, &["width"]),
            height: i64_at(photo, &["height"]),
            url: string_at(photo, &["url"], ""),
            photographer: string_at(photo, &["photographer"], ""),
            photographer_url: string_at(photo, &["photographer_url"], ""),
            src: ImageVariants {
                original: string_at(photo, &["src", "original"], ""),
                large: string_at(photo, &["src", "large"], ""),
                medium: string_at(photo, &["src", "medium"], ""),
                small: string_at(photo, &["src", "small"], ""),
            },
        })
        .collect();

    Ok(ImageBatch {
        total_results: i64_at(raw, &["total_results"]),
        photos,
    })
}
