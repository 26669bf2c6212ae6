//! Unit tests for feature rows

use chrono::Utc;
use market_intel::error::EngineError;
use market_intel::models::{Bar, Feature, FeatureRow, ScoredRow, SignalLabel, SignalResult};
use serde_json::Value;

fn bar() -> Bar {
    Bar::new(Utc::now(), 10.0, 11.0, 9.0, 10.5, 500.0)
}

#[test]
fn test_column_names_are_unique_and_ordered() {
    let names: Vec<_> = Feature::ALL.iter().map(|f| f.column_name()).collect();
    assert_eq!(names.len(), Feature::COUNT);
    assert_eq!(names[0], "SMA_20");
    assert_eq!(names[3], "RSI");
    assert_eq!(names[Feature::COUNT - 1], "Momentum_5d");

    let mut dedup = names.clone();
    dedup.sort();
    dedup.dedup();
    assert_eq!(dedup.len(), names.len());
}

#[test]
fn test_new_row_has_no_features() {
    let row = FeatureRow::new(bar());
    assert!(!row.is_complete());
    assert_eq!(row.first_missing(), Some(Feature::Sma20));
    assert_eq!(row.close(), 10.5);
}

#[test]
fn test_require_names_missing_feature() {
    let row = FeatureRow::new(bar()).with(Feature::Rsi, 42.0);
    assert_eq!(row.require(Feature::Rsi), Ok(42.0));
    assert_eq!(
        row.require(Feature::Macd),
        Err(EngineError::MissingFeature(Feature::Macd))
    );
}

#[test]
fn test_complete_row() {
    let row = Feature::ALL
        .iter()
        .fold(FeatureRow::new(bar()), |row, f| row.with(*f, 1.0));
    assert!(row.is_complete());
    assert_eq!(row.first_missing(), None);
}

#[test]
fn test_missing_feature_error_message() {
    let err = EngineError::MissingFeature(Feature::BbLower);
    assert_eq!(err.to_string(), "missing feature: BB_Lower");
}

#[test]
fn test_scored_row_serializes_flat_record() {
    let features = FeatureRow::new(bar()).with(Feature::Rsi, 55.5);
    let row = ScoredRow {
        features,
        signal: SignalResult {
            score: -3.5,
            label: SignalLabel::StrongSell,
        },
    };

    let value = serde_json::to_value(&row).unwrap();
    assert_eq!(value["Close"], 10.5);
    assert_eq!(value["RSI"], 55.5);
    assert_eq!(value["SMA_20"], Value::Null);
    assert_eq!(value["Signal_Score"], -3.5);
    assert_eq!(value["Signal_Label"], "STRONG SELL");
}
