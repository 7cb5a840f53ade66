//! Raw-payload normalizers.
//!
//! Each normalizer is a total function from an arbitrary JSON value to
//! either a fixed record type or [`SourceError::invalid_source_data`].
//! Absent nested fields never fail; they take documented defaults. Only a
//! missing top-level required key is an error:
//!
//! | Domain | Required key |
//! |--------|--------------|
//! | weather | `main` (or `list` for a forecast payload) |
//! | equities | `Time Series (Daily)` |
//! | news | `articles` |
//! | images | `photos` |
//!
//! Field access is done with explicit presence checks via the small helpers
//! below; there is no typed deserialization of provider shapes and no
//! reflection.

mod equities;
mod images;
mod news;
mod weather;

pub use equities::normalize_daily_series;
pub use images::normalize_images;
pub use news::normalize_news;
pub use weather::{normalize_forecast_entries, normalize_snapshot, normalize_weather};

use serde_json::Value;

/// Walk a key path, returning `None` if any hop is absent.
fn field<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = value;
    for key in path {
        current = current.get(key)?;
    }
    Some(current)
}

/// String at `path`, or `default` when absent or not a string.
fn string_at(value: &Value, path: &[&str], default: &str) -> String {
    field(value, path)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_owned()
}

/// Number at `path` as f64 (accepting integer JSON numbers), defaulting 0.
fn f64_at(value: &Value, path: &[&str]) -> f64 {
    field(value, path).and_then(Value::as_f64).unwrap_or(0.0)
}

/// Number at `path` as i64, defaulting 0. Non-integral numbers truncate.
fn i64_at(value: &Value, path: &[&str]) -> i64 {
    field(value, path)
        .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
        .unwrap_or(0)
}

/// First element of the array at `path`, if any.
fn first_at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    field(value, path).and_then(Value::as_array)?.first()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_walks_nested_objects_and_stops_on_missing_hops() {
        let value = json!({"a": {"b": {"c": 3}}});
        assert_eq!(field(&value, &["a", "b", "c"]), Some(&json!(3)));
        assert_eq!(field(&value, &["a", "x", "c"]), None);
    }

    #[test]
    fn numeric_accessors_default_to_zero() {
        let value = json!({"n": "not a number"});
        assert_eq!(f64_at(&value, &["n"]), 0.0);
        assert_eq!(i64_at(&value, &["missing"]), 0);
    }
}
