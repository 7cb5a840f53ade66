use std::sync::Arc;

use super::{fetch_json, require_key};
use crate::domain::NewsBatch;
use crate::http_client::{HttpClient, HttpRequest};
use crate::normalize::normalize_news;
use crate::{ProviderConfig, SourceError};

/// NewsAPI caps page sizes at 100 server-side; clamp rather than error.
const MAX_PAGE_SIZE: u32 = 100;

/// NewsAPI adapter for article search and top headlines.
#[derive(Clone)]
pub struct NewsProvider {
    http: Arc<dyn HttpClient>,
    api_key: Option<String>,
    base_url: String,
}

impl NewsProvider {
    pub fn new(http: Arc<dyn HttpClient>, config: &ProviderConfig) -> Self {
        Self {
            http,
            api_key: config.newsapi_api_key.clone(),
            base_url: config.newsapi_base_url.clone(),
        }
    }

    /// Full-text search over the `everything` endpoint, newest first.
    pub async fn search(
        &self,
        query: &str,
        language: &str,
        page_size: u32,
    ) -> Result<NewsBatch, SourceError> {
        let key = require_key(&self.api_key, "newsapi")?;
        if query.trim().is_empty() {
            return Err(SourceError::invalid_request("news query must not be empty"));
        }
        let endpoint = format!(
            "{}/everything?q={}&language={}&sortBy=publishedAt&pageSize={}&apiKey={}",
            self.base_url,
            urlencoding::encode(query.trim()),
            urlencoding::encode(language),
            page_size.min(MAX_PAGE_SIZE),
            key
        );

        let raw = fetch_json(self.http.as_ref(), HttpRequest::get(endpoint), "newsapi").await?;
        normalize_news(&raw)
    }

    /// Country/category headlines over the `top-headlines` endpoint.
    pub async fn headlines(
        &self,
        country: &str,
        category: Option<&str>,
        page_size: u32,
    ) -> Result<NewsBatch, SourceError> {
        let key = require_key(&self.api_key, "newsapi")?;
        let mut endpoint = format!(
            "{}/top-headlines?country={}&pageSize={}&apiKey={}",
            self.base_url,
            urlencoding::encode(country),
            page_size.min(MAX_PAGE_SIZE),
            key
        );
        if let Some(category) = category {
            endpoint.push_str("&category=");
            endpoint.push_str(&urlencoding::encode(category));
        }

        let raw = fetch_json(self.http.as_ref(), HttpRequest::get(endpoint), "newsapi").await?;
        normalize_news(&raw)
    }
}
