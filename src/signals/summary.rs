//! Latest-row snapshot of a ticker's processed table.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::{format_timestamp, ScoredRow};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketSummary {
    pub ticker: String,
    pub last_close: Option<f64>,
    pub last_rsi: Option<f64>,
    pub last_signal: Option<String>,
    pub date: Option<String>,
}

impl MarketSummary {
    pub fn from_rows(ticker: &str, rows: &[ScoredRow]) -> Option<Self> {
        let last = rows.last()?;
        Some(Self {
            ticker: ticker.to_string(),
            last_close: Some(last.features.close()),
            last_rsi: last.rsi(),
            last_signal: Some(last.signal.label.to_string()),
            date: Some(format_timestamp(&last.features.bar.timestamp)),
        })
    }

    /// Build from generic records as read back from a processed table.
    pub fn from_records(ticker: &str, records: &[Map<String, Value>]) -> Option<Self> {
        let last = records.last()?;
        Some(Self {
            ticker: ticker.to_string(),
            last_close: last.get("Close").and_then(Value::as_f64),
            last_rsi: last.get("RSI").and_then(Value::as_f64),
            last_signal: last
                .get("Signal_Label")
                .and_then(Value::as_str)
                .map(str::to_string),
            date: last.get("Date").map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            }),
        })
    }
}
