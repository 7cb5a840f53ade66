use std::sync::Arc;

use serde_json::Value;

use super::fetch_json;
use crate::http_client::{HttpClient, HttpRequest};
use crate::{ProviderConfig, SourceError};

/// covid19api adapter. The provider shape is already stable, so payloads
/// pass through unmodified; this adapter only classifies failures. No API
/// key is required.
#[derive(Clone)]
pub struct CovidProvider {
    http: Arc<dyn HttpClient>,
    base_url: String,
}

impl CovidProvider {
    pub fn new(http: Arc<dyn HttpClient>, config: &ProviderConfig) -> Self {
        Self {
            http,
            base_url: config.covid_base_url.clone(),
        }
    }

    /// Case history for one country, as returned by the provider.
    pub async fn country(&self, country: &str) -> Result<Value, SourceError> {
        if country.trim().is_empty() {
            return Err(SourceError::invalid_request("country must not be empty"));
        }
        let endpoint = format!(
            "{}/country/{}",
            self.base_url,
            urlencoding::encode(country.trim())
        );

        fetch_json(self.http.as_ref(), HttpRequest::get(endpoint), "covid19api").await
    }

    /// Global summary payload.
    pub async fn global_summary(&self) -> Result<Value, SourceError> {
        let endpoint = format!("{}/summary", self.base_url);
        fetch_json(self.http.as_ref(), HttpRequest::get(endpoint), "covid19api").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::NoopHttpClient;

    #[tokio::test]
    async fn empty_country_is_rejected_before_transport() {
        let provider = CovidProvider::new(Arc::new(NoopHttpClient), &ProviderConfig::default());

        let error = provider.country("").await.expect_err("blank country");
        assert_eq!(error.code(), "source.invalid_request");
    }

    #[tokio::test]
    async fn payload_passes_through_unmodified() {
        let provider = CovidProvider::new(Arc::new(NoopHttpClient), &ProviderConfig::default());

        let value = provider.country("germany").await.expect("noop returns {}");
        assert_eq!(value, serde_json::json!({}));
    }
}
