use serde::{Deserialize, Serialize};

/// Normalized daily OHLCV bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityBar {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

/// Daily series for one symbol.
///
/// Bars are sorted by date string descending (ISO dates sort correctly as
/// strings) and truncated to the 50 most recent entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquitySeries {
    pub symbol: String,
    pub last_refreshed: String,
    pub data: Vec<EquityBar>,
}
