use serde::{Deserialize, Serialize};

/// Resolution variants for one photo. A variant the provider omitted is an
/// empty string, never a missing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageVariants {
    pub original: String,
    pub large: String,
    pub medium: String,
    pub small: String,
}

/// Normalized photo record. Numeric defaults are 0, string defaults empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub id: i64,
    pub width: i64,
    pub height: i64,
    pub url: String,
    pub photographer: String,
    pub photographer_url: String,
    pub src: ImageVariants,
}

/// Photo batch in provider order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageBatch {
    pub total_results: i64,
    pub photos: Vec<ImageAsset>,
}
