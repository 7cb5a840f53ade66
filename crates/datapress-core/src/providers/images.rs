use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

use super::{fetch_json, require_key};
use crate::domain::ImageBatch;
use crate::http_client::{HttpClient, HttpRequest};
use crate::normalize::normalize_images;
use crate::{ProviderConfig, SourceError};

/// Pexels caps page sizes at 80 server-side; clamp rather than error.
const MAX_PER_PAGE: u32 = 80;

const COLOR_WHITELIST: [&str; 10] = [
    "red",
    "orange",
    "yellow",
    "green",
    "turquoise",
    "blue",
    "violet",
    "pink",
    "brown",
    "black",
];

/// Photo orientation filter accepted by the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
    Square,
}

impl Orientation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
            Self::Square => "square",
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = SourceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "landscape" => Ok(Self::Landscape),
            "portrait" => Ok(Self::Portrait),
            "square" => Ok(Self::Square),
            other => Err(SourceError::invalid_request(format!(
                "invalid orientation '{other}', expected landscape, portrait, or square"
            ))),
        }
    }
}

/// Pexels adapter. Authenticates with an `Authorization` header rather than
/// a query parameter.
#[derive(Clone)]
pub struct ImagesProvider {
    http: Arc<dyn HttpClient>,
    api_key: Option<String>,
    base_url: String,
}

impl ImagesProvider {
    pub fn new(http: Arc<dyn HttpClient>, config: &ProviderConfig) -> Self {
        Self {
            http,
            api_key: config.pexels_api_key.clone(),
            base_url: config.pexels_base_url.clone(),
        }
    }

    /// Photo search. An unrecognized color filter is silently omitted from
    /// the request, matching the upstream contract.
    pub async fn search(
        &self,
        query: &str,
        per_page: u32,
        orientation: Option<Orientation>,
        color: Option<&str>,
    ) -> Result<ImageBatch, SourceError> {
        let key = require_key(&self.api_key, "pexels")?;
        if query.trim().is_empty() {
            return Err(SourceError::invalid_request("image query must not be empty"));
        }

        let mut endpoint = format!(
            "{}/search?query={}&per_page={}",
            self.base_url,
            urlencoding::encode(query.trim()),
            per_page.min(MAX_PER_PAGE)
        );
        if let Some(orientation) = orientation {
            endpoint.push_str("&orientation=");
            endpoint.push_str(orientation.as_str());
        }
        if let Some(color) = color {
            if COLOR_WHITELIST.contains(&color.to_ascii_lowercase().as_str()) {
                endpoint.push_str("&color=");
                endpoint.push_str(&urlencoding::encode(color));
            }
        }

        let request = HttpRequest::get(endpoint).with_header("authorization", key);
        let raw = fetch_json(self.http.as_ref(), request, "pexels").await?;
        normalize_images(&raw)
    }

    /// Curated photo feed.
    pub async fn curated(&self, per_page: u32) -> Result<ImageBatch, SourceError> {
        let key = require_key(&self.api_key, "pexels")?;
        let endpoint = format!(
            "{}/curated?per_page={}",
            self.base_url,
            per_page.min(MAX_PER_PAGE)
        );

        let request = HttpRequest::get(endpoint).with_header("authorization", key);
        let raw = fetch_json(self.http.as_ref(), request, "pexels").await?;
        normalize_images(&raw)
    }
}
