use serde::{Deserialize, Serialize};

/// Normalized article record. Absent provider fields become empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub description: String,
    pub url: String,
    pub published_at: String,
    pub source: String,
    pub author: String,
    pub url_to_image: String,
}

/// Article batch in provider order (the provider already sorts results).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsBatch {
    pub total_results: i64,
    pub articles: Vec<NewsArticle>,
}
