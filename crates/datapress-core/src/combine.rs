//! Aggregation coordinator for combined exports.
//!
//! Fetches any subset of {weather, stocks, news, covid} concurrently,
//! isolates per-source failure, and emits surviving records tagged with
//! their source identifier in the fixed priority order of
//! [`SourceId::COMBINED_PRIORITY`] — independent of both request parameter
//! order and fetch completion order. Nothing is retried; a timed-out or
//! failed source is simply excluded.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tokio::time::{timeout, Duration};

use crate::http_client::{HttpClient, PROVIDER_TIMEOUT_MS};
use crate::providers::{
    CovidProvider, EquitiesProvider, NewsProvider, OutputSize, WeatherProvider,
};
use crate::{ProviderConfig, SourceError, SourceId};

/// Articles fetched per combined export; smaller than a standalone news
/// export since the batch is one of up to four sections.
const COMBINED_NEWS_PAGE_SIZE: u32 = 10;

/// Caller selection of sources for one combined export. Any subset may be
/// present; an entirely empty request is rejected up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinedRequest {
    pub weather_city: Option<String>,
    pub stock_symbol: Option<String>,
    pub news_query: Option<String>,
    pub covid_country: Option<String>,
}

impl CombinedRequest {
    pub fn is_empty(&self) -> bool {
        self.weather_city.is_none()
            && self.stock_symbol.is_none()
            && self.news_query.is_none()
            && self.covid_country.is_none()
    }
}

/// One surviving source's normalized output, tagged for the export layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceRecord {
    pub source: SourceId,
    pub data: Value,
}

/// Fetch and combine the requested sources.
///
/// Errors with `NoDataAvailable` when every requested source failed; an
/// empty combined export is never produced silently.
pub async fn combine(
    http: Arc<dyn HttpClient>,
    config: &ProviderConfig,
    request: &CombinedRequest,
) -> Result<Vec<SourceRecord>, SourceError> {
    if request.is_empty() {
        return Err(SourceError::invalid_request(
            "combined export requires at least one of weather_city, stock_symbol, news_query, covid_country",
        ));
    }

    let budget = Duration::from_millis(PROVIDER_TIMEOUT_MS);

    let weather = async {
        let city = request.weather_city.as_deref()?;
        let provider = WeatherProvider::new(Arc::clone(&http), config);
        collect(
            SourceId::Weather,
            timeout(budget, provider.current(city, None)).await,
        )
    };
    let stocks = async {
        let symbol = request.stock_symbol.as_deref()?;
        let provider = EquitiesProvider::new(Arc::clone(&http), config);
        collect(
            SourceId::Stocks,
            timeout(budget, provider.daily(symbol, OutputSize::Compact)).await,
        )
    };
    let news = async {
        let query = request.news_query.as_deref()?;
        let provider = NewsProvider::new(Arc::clone(&http), config);
        collect(
            SourceId::News,
            timeout(budget, provider.search(query, "en", COMBINED_NEWS_PAGE_SIZE)).await,
        )
    };
    let covid = async {
        let country = request.covid_country.as_deref()?;
        let provider = CovidProvider::new(Arc::clone(&http), config);
        collect(
            SourceId::Covid,
            timeout(budget, provider.country(country)).await,
        )
    };

    // Completion order is arbitrary; emission follows COMBINED_PRIORITY.
    let (weather, stocks, news, covid) = futures::join!(weather, stocks, news, covid);

    let mut combined: Vec<SourceRecord> = [weather, stocks, news, covid]
        .into_iter()
        .flatten()
        .collect();
    combined.sort_by_key(|record| {
        SourceId::COMBINED_PRIORITY
            .iter()
            .position(|source| *source == record.source)
    });

    if combined.is_empty() {
        return Err(SourceError::no_data(
            "no data available for the requested sources",
        ));
    }
    Ok(combined)
}

/// Fold a timed, fallible fetch into an optional tagged record, logging the
/// exclusion reason for failed sources.
fn collect<T: Serialize>(
    source: SourceId,
    outcome: Result<Result<T, SourceError>, tokio::time::error::Elapsed>,
) -> Option<SourceRecord> {
    let result = match outcome {
        Ok(result) => result,
        Err(_) => Err(SourceError::transport_failure(format!(
            "{source} source timed out"
        ))),
    };

    match result.and_then(|record| {
        serde_json::to_value(record)
            .map_err(|error| SourceError::invalid_source_data(error.to_string()))
    }) {
        Ok(data) => Some(SourceRecord { source, data }),
        Err(error) => {
            tracing::warn!(source = %source, error = %error, "source excluded from combined export");
            None
        }
    }
}
