use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

use serde_json::Value;

use super::{fetch_json, require_key};
use crate::domain::EquitySeries;
use crate::http_client::{HttpClient, HttpRequest};
use crate::normalize::normalize_daily_series;
use crate::{ProviderConfig, SourceError};

/// Alpha Vantage history depth selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputSize {
    #[default]
    Compact,
    Full,
}

impl OutputSize {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Full => "full",
        }
    }
}

impl Display for OutputSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputSize {
    type Err = SourceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "full" => Ok(Self::Full),
            other => Err(SourceError::invalid_request(format!(
                "invalid output size '{other}', expected compact or full"
            ))),
        }
    }
}

/// Alpha Vantage adapter for daily bars and quote passthrough.
#[derive(Clone)]
pub struct EquitiesProvider {
    http: Arc<dyn HttpClient>,
    api_key: Option<String>,
    base_url: String,
}

impl EquitiesProvider {
    pub fn new(http: Arc<dyn HttpClient>, config: &ProviderConfig) -> Self {
        Self {
            http,
            api_key: config.alphavantage_api_key.clone(),
            base_url: config.alphavantage_base_url.clone(),
        }
    }

    /// Daily OHLCV series, normalized (sorted descending, capped at 50).
    pub async fn daily(
        &self,
        symbol: &str,
        output_size: OutputSize,
    ) -> Result<EquitySeries, SourceError> {
        let key = require_key(&self.api_key, "alphavantage")?;
        if symbol.trim().is_empty() {
            return Err(SourceError::invalid_request("stock symbol must not be empty"));
        }
        let endpoint = format!(
            "{}?function=TIME_SERIES_DAILY&symbol={}&outputsize={}&apikey={}",
            self.base_url,
            urlencoding::encode(symbol.trim()),
            output_size,
            key
        );

        let raw = fetch_json(self.http.as_ref(), HttpRequest::get(endpoint), "alphavantage").await?;
        normalize_daily_series(&raw)
    }

    /// Raw GLOBAL_QUOTE payload. No reshaping beyond failure classification.
    pub async fn quote(&self, symbol: &str) -> Result<Value, SourceError> {
        let key = require_key(&self.api_key, "alphavantage")?;
        if symbol.trim().is_empty() {
            return Err(SourceError::invalid_request("stock symbol must not be empty"));
        }
        let endpoint = format!(
            "{}?function=GLOBAL_QUOTE&symbol={}&apikey={}",
            self.base_url,
            urlencoding::encode(symbol.trim()),
            key
        );

        fetch_json(self.http.as_ref(), HttpRequest::get(endpoint), "alphavantage").await
    }
}
