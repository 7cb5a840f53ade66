use serde_json::Value;

use super::{i64_at, string_at};
use crate::domain::{NewsArticle, NewsBatch};
use crate::SourceError;

/// Normalize a NewsAPI payload. Article order is preserved; every absent
/// field becomes an empty string.
pub fn normalize_news(raw: &Value) -> Result<NewsBatch, SourceError> {
    let articles = raw
        .get("articles")
        .and_then(Value::as_array)
        .ok_or_else(|| SourceError::invalid_source_data("news payload missing 'articles' array"))?;

    let articles = articles
        .iter()
        .map(|article| NewsArticle {
            title: string_at(article, &["title"], ""),
            description: string_at(article, &["description"], ""),
            url: string_at(article, &["url"], ""),
            published_at: string_at(article, &["publishedAt"], ""),
            source: string_at(article, &["source", "name"], ""),
            author: string_at(article, &["author"], ""),
            url_to_image: string_at(article, &["urlToImage"], ""),
        })
        .collect();

    Ok(NewsBatch {
        total_results: i64_at(raw, &["totalResults"]),
        articles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn articles_map_with_provider_field_names_and_order() {
        let payload = json!({
            "totalResults": 2,
            "articles": [
                {"title": "First", "publishedAt": "2026-08-24T10:00:00Z",
                 "source": {"name": "Wire"}, "urlToImage": "https://img.test/1.jpg"},
                {"title": "Second", "author": "A. Writer"}
            ]
        });

        let batch = normalize_news(&payload).expect("valid payload");
        assert_eq!(batch.total_results, 2);
        assert_eq!(batch.articles[0].title, "First");
        assert_eq!(batch.articles[0].source, "Wire");
        assert_eq!(batch.articles[0].published_at, "2026-08-24T10:00:00Z");
        assert_eq!(batch.articles[0].url_to_image, "https://img.test/1.jpg");
        assert_eq!(batch.articles[1].title, "Second");
    }

    #[test]
    fn absent_fields_default_to_empty_strings() {
        let payload = json!({"articles": [{}]});

        let batch = normalize_news(&payload).expect("valid payload");
        let article = &batch.articles[0];
        assert_eq!(article.title, "");
        assert_eq!(article.description, "");
        assert_eq!(article.source, "");
        assert_eq!(article.author, "");
        assert_eq!(batch.total_results, 0);
    }

    #[test]
    fn missing_articles_key_is_invalid_source_data() {
        let error = normalize_news(&json!({"status": "ok"})).expect_err("no articles key");
        assert_eq!(error.code(), "source.invalid_data");
    }
}
