//! Upstream provider configuration.
//!
//! One `ProviderConfig` is constructed at startup (usually via
//! [`ProviderConfig::from_env`]) and passed by reference into each adapter.
//! There is no process-wide singleton; tests construct their own instances
//! with whatever keys they need.

/// API credentials and base URLs for the five upstream providers.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub openweather_api_key: Option<String>,
    pub alphavantage_api_key: Option<String>,
    pub newsapi_api_key: Option<String>,
    pub pexels_api_key: Option<String>,

    pub openweather_base_url: String,
    pub alphavantage_base_url: String,
    pub newsapi_base_url: String,
    pub pexels_base_url: String,
    pub covid_base_url: String,
}

impl ProviderConfig {
    /// Read API keys from `DATAPRESS_*_API_KEY` environment variables.
    /// Missing keys stay `None`; the owning adapter reports the gap as an
    /// invalid request before any transport call is made.
    pub fn from_env() -> Self {
        Self {
            openweather_api_key: read_env("DATAPRESS_OPENWEATHER_API_KEY"),
            alphavantage_api_key: read_env("DATAPRESS_ALPHAVANTAGE_API_KEY"),
            newsapi_api_key: read_env("DATAPRESS_NEWSAPI_API_KEY"),
            pexels_api_key: read_env("DATAPRESS_PEXELS_API_KEY"),
            ..Self::default()
        }
    }

    /// Config with every key populated; used by offline tests paired with a
    /// mock transport.
    pub fn for_tests() -> Self {
        Self {
            openweather_api_key: Some(String::from("test-key")),
            alphavantage_api_key: Some(String::from("test-key")),
            newsapi_api_key: Some(String::from("test-key")),
            pexels_api_key: Some(String::from("test-key")),
            ..Self::default()
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            openweather_api_key: None,
            alphavantage_api_key: None,
            newsapi_api_key: None,
            pexels_api_key: None,
            openweather_base_url: String::from("https://api.openweathermap.org/data/2.5"),
            alphavantage_base_url: String::from("https://www.alphavantage.co/query"),
            newsapi_base_url: String::from("https://newsapi.org/v2"),
            pexels_base_url: String::from("https://api.pexels.com/v1"),
            covid_base_url: String::from("https://api.covid19api.com"),
        }
    }
}

fn read_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
