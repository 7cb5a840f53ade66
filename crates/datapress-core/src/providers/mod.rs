//! Provider adapters.
//!
//! Each adapter owns a shared [`HttpClient`] handle plus the credentials it
//! needs from [`ProviderConfig`](crate::ProviderConfig), builds the upstream
//! URL, classifies transport failures, and hands the raw body to the
//! matching normalizer. Adapters never retry; a failed call surfaces as a
//! single [`SourceError`] and the caller decides what to do with it.

mod covid;
mod equities;
mod images;
mod news;
mod weather;

pub use covid::CovidProvider;
pub use equities::{EquitiesProvider, OutputSize};
pub use images::{ImagesProvider, Orientation};
pub use news::NewsProvider;
pub use weather::WeatherProvider;

use serde_json::Value;

use crate::http_client::{HttpClient, HttpRequest};
use crate::SourceError;

/// Execute a request and parse the body as JSON, mapping transport errors
/// and non-2xx statuses to `TransportFailure` and unparseable bodies to
/// `InvalidSourceData`.
pub(crate) async fn fetch_json(
    http: &dyn HttpClient,
    request: HttpRequest,
    provider: &str,
) -> Result<Value, SourceError> {
    let response = http.execute(request).await.map_err(|error| {
        SourceError::transport_failure(format!("{provider} transport error: {}", error.message()))
    })?;

    if !response.is_success() {
        return Err(SourceError::transport_failure(format!(
            "{provider} returned status {}",
            response.status
        )));
    }

    serde_json::from_str(&response.body).map_err(|error| {
        SourceError::invalid_source_data(format!("{provider} returned unparseable body: {error}"))
    })
}

/// Short-circuit for adapters whose upstream requires an API key.
pub(crate) fn require_key<'a>(
    key: &'a Option<String>,
    provider: &str,
) -> Result<&'a str, SourceError> {
    key.as_deref()
        .ok_or_else(|| SourceError::invalid_request(format!("{provider} API key not configured")))
}
