use std::sync::Arc;

use super::{fetch_json, require_key};
use crate::domain::WeatherReport;
use crate::http_client::{HttpClient, HttpRequest};
use crate::normalize::normalize_weather;
use crate::{ProviderConfig, SourceError};

/// OpenWeather adapter (current conditions and 3-hourly forecast).
#[derive(Clone)]
pub struct WeatherProvider {
    http: Arc<dyn HttpClient>,
    api_key: Option<String>,
    base_url: String,
}

impl WeatherProvider {
    pub fn new(http: Arc<dyn HttpClient>, config: &ProviderConfig) -> Self {
        Self {
            http,
            api_key: config.openweather_api_key.clone(),
            base_url: config.openweather_base_url.clone(),
        }
    }

    /// Current weather for a city, optionally qualified by country code.
    pub async fn current(
        &self,
        city: &str,
        country_code: Option<&str>,
    ) -> Result<WeatherReport, SourceError> {
        let key = require_key(&self.api_key, "openweather")?;
        let query = match country_code {
            Some(code) => format!("{city},{code}"),
            None => city.to_owned(),
        };
        let endpoint = format!(
            "{}/weather?q={}&appid={}&units=metric",
            self.base_url,
            urlencoding::encode(&query),
            key
        );

        let raw = fetch_json(self.http.as_ref(), HttpRequest::get(endpoint), "openweather").await?;
        normalize_weather(&raw)
    }

    /// Current weather by coordinates.
    pub async fn by_coordinates(&self, lat: f64, lon: f64) -> Result<WeatherReport, SourceError> {
        let key = require_key(&self.api_key, "openweather")?;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(SourceError::invalid_request(format!(
                "invalid coordinates ({lat}, {lon})"
            )));
        }
        let endpoint = format!(
            "{}/weather?lat={lat}&lon={lon}&appid={key}&units=metric",
            self.base_url
        );

        let raw = fetch_json(self.http.as_ref(), HttpRequest::get(endpoint), "openweather").await?;
        normalize_weather(&raw)
    }

    /// Forecast for 1-5 days, eight 3-hour slots per day.
    pub async fn forecast(&self, city: &str, days: u8) -> Result<WeatherReport, SourceError> {
        let key = require_key(&self.api_key, "openweather")?;
        if !(1..=5).contains(&days) {
            return Err(SourceError::invalid_request(
                "forecast days must be between 1 and 5",
            ));
        }
        let endpoint = format!(
            "{}/forecast?q={}&appid={}&units=metric&cnt={}",
            self.base_url,
            urlencoding::encode(city),
            key,
            u16::from(days) * 8
        );

        let raw = fetch_json(self.http.as_ref(), HttpRequest::get(endpoint), "openweather").await?;
        normalize_weather(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::NoopHttpClient;

    fn provider(config: &ProviderConfig) -> WeatherProvider {
        WeatherProvider::new(Arc::new(NoopHttpClient), config)
    }

    #[tokio::test]
    async fn missing_api_key_fails_before_any_transport_call() {
        let provider = provider(&ProviderConfig::default());

        let error = provider.current("London", None).await.expect_err("no key");
        assert_eq!(error.code(), "source.invalid_request");
        assert!(error.message().contains("API key"));
    }

    #[tokio::test]
    async fn out_of_range_coordinates_are_rejected() {
        let provider = provider(&ProviderConfig::for_tests());

        let error = provider
            .by_coordinates(120.0, 10.0)
            .await
            .expect_err("invalid latitude");
        assert_eq!(error.code(), "source.invalid_request");
    }

    #[tokio::test]
    async fn forecast_days_outside_one_to_five_are_rejected() {
        let provider = provider(&ProviderConfig::for_tests());

        let error = provider.forecast("Paris", 6).await.expect_err("too many days");
        assert!(error.message().contains("between 1 and 5"));
    }
}
