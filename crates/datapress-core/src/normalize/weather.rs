use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use super::{f64_at, first_at, i64_at, string_at};
use crate::domain::{Condition, ForecastEntry, Temperature, WeatherReport, WeatherSnapshot, Wind};
use crate::SourceError;

/// Normalize an OpenWeather payload.
///
/// A payload carrying a `list` array is a forecast and yields one
/// [`ForecastEntry`] per time-slot, in provider order. Anything else must
/// carry a top-level `main` object and yields a single [`WeatherSnapshot`].
pub fn normalize_weather(raw: &Value) -> Result<WeatherReport, SourceError> {
    if raw.get("list").is_some() {
        return normalize_forecast_entries(raw).map(WeatherReport::Forecast);
    }
    normalize_snapshot(raw).map(WeatherReport::Current)
}

/// Normalize a current-conditions payload into a single snapshot.
pub fn normalize_snapshot(raw: &Value) -> Result<WeatherSnapshot, SourceError> {
    if raw.get("main").is_none() {
        return Err(SourceError::invalid_source_data(
            "weather payload missing 'main' object",
        ));
    }

    Ok(WeatherSnapshot {
        location: string_at(raw, &["name"], "Unknown"),
        country: string_at(raw, &["sys", "country"], "Unknown"),
        temperature: Temperature {
            current: f64_at(raw, &["main", "temp"]),
            feels_like: f64_at(raw, &["main", "feels_like"]),
            min: f64_at(raw, &["main", "temp_min"]),
            max: f64_at(raw, &["main", "temp_max"]),
        },
        humidity: i64_at(raw, &["main", "humidity"]),
        pressure: i64_at(raw, &["main", "pressure"]),
        weather: Condition {
            main: condition_field(raw, "main", "Unknown"),
            description: condition_field(raw, "description", "Unknown"),
            icon: condition_field(raw, "icon", ""),
        },
        wind: Wind {
            speed: f64_at(raw, &["wind", "speed"]),
            direction: i64_at(raw, &["wind", "deg"]),
        },
        timestamp: generation_timestamp(),
    })
}

/// Normalize a forecast payload into its ordered slot sequence.
pub fn normalize_forecast_entries(raw: &Value) -> Result<Vec<ForecastEntry>, SourceError> {
    let slots = raw
        .get("list")
        .and_then(Value::as_array)
        .ok_or_else(|| SourceError::invalid_source_data("forecast payload missing 'list' array"))?;

    let location = string_at(raw, &["city", "name"], "Unknown");
    let entries = slots
        .iter()
        .map(|slot| ForecastEntry {
            date: string_at(slot, &["dt_txt"], ""),
            temperature: f64_at(slot, &["main", "temp"]),
            feels_like: f64_at(slot, &["main", "feels_like"]),
            humidity: i64_at(slot, &["main", "humidity"]),
            pressure: i64_at(slot, &["main", "pressure"]),
            weather: slot
                .get("weather")
                .and_then(Value::as_array)
                .and_then(|list| list.first())
                .and_then(|entry| entry.get("description"))
                .and_then(Value::as_str)
                .unwrap_or("Unknown")
                .to_owned(),
            wind_speed: f64_at(slot, &["wind", "speed"]),
            wind_direction: i64_at(slot, &["wind", "deg"]),
            location: location.clone(),
        })
        .collect();

    Ok(entries)
}

fn condition_field(raw: &Value, key: &str, default: &str) -> String {
    first_at(raw, &["weather"])
        .and_then(|entry| entry.get(key))
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_owned()
}

fn generation_timestamp() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn london_payload() -> Value {
        json!({
            "main": {"temp": 15.2, "feels_like": 14.1, "temp_min": 12.0, "temp_max": 17.3,
                     "humidity": 72, "pressure": 1012},
            "name": "London",
            "sys": {"country": "GB"},
            "weather": [{"main": "Rain", "description": "light rain", "icon": "10d"}],
            "wind": {"speed": 3.1, "deg": 200}
        })
    }

    #[test]
    fn current_payload_normalizes_to_snapshot() {
        let report = normalize_weather(&london_payload()).expect("valid payload");

        let WeatherReport::Current(snapshot) = report else {
            panic!("expected a snapshot, got a forecast");
        };
        assert_eq!(snapshot.location, "London");
        assert_eq!(snapshot.country, "GB");
        assert_eq!(snapshot.temperature.current, 15.2);
        assert_eq!(snapshot.weather.main, "Rain");
        assert_eq!(snapshot.wind.direction, 200);
    }

    #[test]
    fn missing_nested_fields_take_defaults_not_errors() {
        let report = normalize_weather(&json!({"main": {}})).expect("top-level key present");

        let WeatherReport::Current(snapshot) = report else {
            panic!("expected a snapshot");
        };
        assert_eq!(snapshot.location, "Unknown");
        assert_eq!(snapshot.temperature.current, 0.0);
        assert_eq!(snapshot.weather.description, "Unknown");
        assert_eq!(snapshot.weather.icon, "");
        assert_eq!(snapshot.humidity, 0);
    }

    #[test]
    fn missing_main_object_is_invalid_source_data() {
        let error = normalize_weather(&json!({"name": "London"})).expect_err("no 'main' key");
        assert_eq!(error.code(), "source.invalid_data");
    }

    #[test]
    fn forecast_payload_takes_the_forecast_branch_in_provider_order() {
        let payload = json!({
            "list": [
                {"dt_txt": "2026-08-25 12:00:00", "main": {"temp": 21.0}},
                {"dt_txt": "2026-08-25 15:00:00", "main": {"temp": 19.5}}
            ],
            "city": {"name": "Paris"}
        });

        let report = normalize_weather(&payload).expect("valid forecast");
        let WeatherReport::Forecast(entries) = report else {
            panic!("expected a forecast");
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].date, "2026-08-25 12:00:00");
        assert_eq!(entries[1].temperature, 19.5);
        assert_eq!(entries[0].location, "Paris");
        assert_eq!(entries[0].weather, "Unknown");
    }

    #[test]
    fn snapshot_timestamp_is_rfc3339() {
        let report = normalize_snapshot(&london_payload()).expect("valid payload");
        assert!(OffsetDateTime::parse(&report.timestamp, &Rfc3339).is_ok());
    }
}
