use serde::{Deserialize, Serialize};

/// Current/min/max temperatures in °C. Absent source fields default to 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    pub current: f64,
    pub feels_like: f64,
    pub min: f64,
    pub max: f64,
}

/// Weather condition block as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
    pub direction: i64,
}

/// Normalized current-weather record for one location.
///
/// `timestamp` is the generation time of this record, not the provider's
/// observation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: String,
    pub country: String,
    pub temperature: Temperature,
    pub humidity: i64,
    pub pressure: i64,
    pub weather: Condition,
    pub wind: Wind,
    pub timestamp: String,
}

/// One provider time-slot of a forecast. Entries keep the order the
/// provider returned them in; they are never re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub date: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: i64,
    pub pressure: i64,
    pub weather: String,
    pub wind_speed: f64,
    pub wind_direction: i64,
    pub location: String,
}

/// Type-level branch between current conditions and a forecast sequence.
/// Callers distinguish the two structurally, not via a flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeatherReport {
    Current(WeatherSnapshot),
    Forecast(Vec<ForecastEntry>),
}
