use serde_json::Value;

use crate::domain::{EquityBar, EquitySeries};
use crate::SourceError;

/// Bars kept after sorting; older entries are discarded.
pub const MAX_BARS: usize = 50;

/// Normalize an Alpha Vantage daily time-series payload.
///
/// Rows whose OHLC fields fail float coercion, or whose volume fails
/// integer coercion, are dropped individually; they never abort the series.
/// Surviving bars are sorted by date string descending and truncated to
/// [`MAX_BARS`].
pub fn normalize_daily_series(raw: &Value) -> Result<EquitySeries, SourceError> {
    let series = raw
        .get("Time Series (Daily)")
        .and_then(Value::as_object)
        .ok_or_else(|| {
            SourceError::invalid_source_data("equity payload missing 'Time Series (Daily)' object")
        })?;

    let mut bars: Vec<EquityBar> = series
        .iter()
        .filter_map(|(date, row)| {
            Some(EquityBar {
                date: date.clone(),
                open: coerce_f64(row.get("1. open"))?,
                high: coerce_f64(row.get("2. high"))?,
                low: coerce_f64(row.get("3. low"))?,
                close: coerce_f64(row.get("4. close"))?,
                volume: coerce_i64(row.get("5. volume"))?,
            })
        })
        .collect();

    bars.sort_by(|a, b| b.date.cmp(&a.date));
    bars.truncate(MAX_BARS);

    let meta = raw.get("Meta Data");
    Ok(EquitySeries {
        symbol: meta
            .and_then(|m| m.get("2. Symbol"))
            .and_then(Value::as_str)
            .unwrap_or("Unknown")
            .to_owned(),
        last_refreshed: meta
            .and_then(|m| m.get("3. Last Refreshed"))
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_owned(),
        data: bars,
    })
}

/// Float coercion: a missing field defaults to 0; a present field must be a
/// number or a parseable numeric string, otherwise the row is dropped.
fn coerce_f64(value: Option<&Value>) -> Option<f64> {
    match value {
        None => Some(0.0),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    }
}

fn coerce_i64(value: Option<&Value>) -> Option<i64> {
    match value {
        None => Some(0),
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        Some(_) => None,
    }
}
