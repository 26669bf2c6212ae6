//! Unit tests for market summaries

use chrono::{Duration, TimeZone, Utc};
use market_intel::models::{Bar, Feature, PriceSeries};
use market_intel::signals::{MarketSummary, SignalEngine};
use serde_json::{json, Map, Value};

#[test]
fn test_summary_from_scored_rows() {
    let start = Utc.with_ymd_and_hms(2022, 1, 3, 0, 0, 0).unwrap();
    let bars = (0..220)
        .map(|i| {
            let close = 50.0 + (i as f64 * 0.4).cos() * 2.0;
            Bar::new(start + Duration::days(i), close, close, close, close, 10.0)
        })
        .collect();
    let series = PriceSeries::new(bars).unwrap();
    let rows = SignalEngine::run(&series).unwrap();

    let summary = MarketSummary::from_rows("TEST", &rows).unwrap();
    let last = rows.last().unwrap();
    assert_eq!(summary.ticker, "TEST");
    assert_eq!(summary.last_close, Some(last.features.close()));
    assert_eq!(summary.last_rsi, last.features.get(Feature::Rsi));
    assert_eq!(summary.last_signal.as_deref(), Some(last.signal.label.as_str()));
    assert_eq!(summary.date.as_deref(), Some("2022-08-10"));
}

#[test]
fn test_summary_of_empty_rows_is_none() {
    assert!(MarketSummary::from_rows("EMPTY", &[]).is_none());
    assert!(MarketSummary::from_records("EMPTY", &[]).is_none());
}

#[test]
fn test_summary_from_records() {
    let record: Map<String, Value> = json!({
        "Date": "2024-05-01",
        "Close": 187.5,
        "RSI": 61.2,
        "Signal_Label": "BUY"
    })
    .as_object()
    .cloned()
    .unwrap();

    let summary = MarketSummary::from_records("AAPL", &[record]).unwrap();
    assert_eq!(summary.last_close, Some(187.5));
    assert_eq!(summary.last_rsi, Some(61.2));
    assert_eq!(summary.last_signal.as_deref(), Some("BUY"));
    assert_eq!(summary.date.as_deref(), Some("2024-05-01"));
}

#[test]
fn test_summary_tolerates_missing_columns() {
    let record: Map<String, Value> = json!({ "Close": 10.0 }).as_object().cloned().unwrap();
    let summary = MarketSummary::from_records("RAW", &[record]).unwrap();
    assert_eq!(summary.last_close, Some(10.0));
    assert_eq!(summary.last_rsi, None);
    assert_eq!(summary.date, None);
}
