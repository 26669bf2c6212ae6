//! Unit tests for signal engine

use chrono::{Duration, TimeZone, Utc};
use market_intel::error::EngineError;
use market_intel::models::{Bar, PriceSeries};
use market_intel::signals::engine::{SignalEngine, MIN_ROWS};
use market_intel::signals::SignalScorer;

fn create_uptrend_series(count: usize) -> PriceSeries {
    let start = Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap();
    let bars = (0..count)
        .map(|i| {
            let price = 100.0 + (i as f64 * 0.5) + (i as f64 * 0.8).sin();
            Bar::new(
                start + Duration::days(i as i64),
                price,
                price + 0.3,
                price - 0.2,
                price + 0.1,
                1000.0,
            )
        })
        .collect();
    PriceSeries::new(bars).unwrap()
}

#[test]
fn test_run_insufficient_data() {
    let series = create_uptrend_series(10);
    assert_eq!(
        SignalEngine::run(&series),
        Err(EngineError::InsufficientHistory {
            required: MIN_ROWS,
            actual: 10
        })
    );
}

#[test]
fn test_run_minimum_rows_is_accepted() {
    let series = create_uptrend_series(MIN_ROWS);
    let rows = SignalEngine::run(&series).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_run_scores_every_row() {
    let series = create_uptrend_series(250);
    let rows = SignalEngine::run(&series).unwrap();
    assert_eq!(rows.len(), 51);
    for row in &rows {
        assert_eq!(SignalScorer::score(&row.features).unwrap(), row.signal);
    }
}

#[test]
fn test_run_is_deterministic() {
    let series = create_uptrend_series(300);
    let first = SignalEngine::run(&series).unwrap();
    let second = SignalEngine::run(&series).unwrap();
    assert_eq!(first, second);
}
