//! Unit tests for row scoring and label mapping

use chrono::Utc;
use market_intel::error::EngineError;
use market_intel::models::{Bar, Feature, FeatureRow, SignalLabel};
use market_intel::signals::{label_for_score, Rule, SignalScorer};

struct Inputs {
    close: f64,
    rsi: f64,
    macd: f64,
    macd_signal: f64,
    sma_20: f64,
    sma_50: f64,
    bb_lower: f64,
    bb_upper: f64,
}

fn create_row(inputs: &Inputs) -> FeatureRow {
    let bar = Bar::new(Utc::now(), inputs.close, inputs.close, inputs.close, inputs.close, 1.0);
    Feature::ALL
        .iter()
        .fold(FeatureRow::new(bar), |row, f| row.with(*f, 0.0))
        .with(Feature::Rsi, inputs.rsi)
        .with(Feature::Macd, inputs.macd)
        .with(Feature::MacdSignal, inputs.macd_signal)
        .with(Feature::Sma20, inputs.sma_20)
        .with(Feature::Sma50, inputs.sma_50)
        .with(Feature::BbLower, inputs.bb_lower)
        .with(Feature::BbUpper, inputs.bb_upper)
}

#[test]
fn test_all_bullish_rules() {
    let row = create_row(&Inputs {
        close: 100.0,
        rsi: 25.0,
        macd: 1.0,
        macd_signal: 0.5,
        sma_20: 97.0,
        sma_50: 95.0,
        bb_lower: 101.0,
        bb_upper: 120.0,
    });
    let result = SignalScorer::score(&row).unwrap();
    assert_eq!(result.score, 7.5);
    assert_eq!(result.label, SignalLabel::StrongBuy);
}

#[test]
fn test_all_bearish_rules() {
    let row = create_row(&Inputs {
        close: 100.0,
        rsi: 75.0,
        macd: 0.1,
        macd_signal: 0.5,
        sma_20: 103.0,
        sma_50: 105.0,
        bb_lower: 80.0,
        bb_upper: 99.0,
    });
    let result = SignalScorer::score(&row).unwrap();
    assert_eq!(result.score, -7.5);
    assert_eq!(result.label, SignalLabel::StrongSell);
}

#[test]
fn test_mixed_rules_neutral() {
    let row = create_row(&Inputs {
        close: 100.0,
        rsi: 50.0,
        macd: 0.2,
        macd_signal: 0.2,
        sma_20: 99.5,
        sma_50: 99.0,
        bb_lower: 95.0,
        bb_upper: 105.0,
    });
    let result = SignalScorer::score(&row).unwrap();
    assert_eq!(result.score, 0.5);
    assert_eq!(result.label, SignalLabel::Neutral);

    let breakdown = SignalScorer::breakdown(&row).unwrap();
    assert_eq!(
        breakdown,
        vec![
            (Rule::RsiMomentum, 0.0),
            (Rule::MacdCrossover, -1.5),
            (Rule::TrendVsSma50, 1.0),
            (Rule::SmaOrdering, 1.0),
            (Rule::BollingerExtremity, 0.0),
        ]
    );
}

#[test]
fn test_scoring_is_idempotent() {
    let row = create_row(&Inputs {
        close: 50.0,
        rsi: 41.0,
        macd: -0.3,
        macd_signal: -0.1,
        sma_20: 52.0,
        sma_50: 49.0,
        bb_lower: 45.0,
        bb_upper: 55.0,
    });
    let first = SignalScorer::score(&row).unwrap();
    let second = SignalScorer::score(&row).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_feature_is_reported_not_defaulted() {
    let bar = Bar::new(Utc::now(), 1.0, 1.0, 1.0, 1.0, 1.0);
    let row = FeatureRow::new(bar)
        .with(Feature::Rsi, 50.0)
        .with(Feature::Macd, 1.0)
        .with(Feature::MacdSignal, 0.0)
        .with(Feature::Sma20, 1.0);
    assert_eq!(
        SignalScorer::score(&row),
        Err(EngineError::MissingFeature(Feature::Sma50))
    );
}

#[test]
fn test_empty_row_reports_first_rule_input() {
    let bar = Bar::new(Utc::now(), 1.0, 1.0, 1.0, 1.0, 1.0);
    assert_eq!(
        SignalScorer::score(&FeatureRow::new(bar)),
        Err(EngineError::MissingFeature(Feature::Rsi))
    );
}

#[test]
fn test_label_thresholds() {
    assert_eq!(label_for_score(7.5), SignalLabel::StrongBuy);
    assert_eq!(label_for_score(3.0), SignalLabel::StrongBuy);
    assert_eq!(label_for_score(2.99), SignalLabel::Buy);
    assert_eq!(label_for_score(1.0), SignalLabel::Buy);
    assert_eq!(label_for_score(0.99), SignalLabel::Neutral);
    assert_eq!(label_for_score(0.0), SignalLabel::Neutral);
    assert_eq!(label_for_score(-0.99), SignalLabel::Neutral);
    assert_eq!(label_for_score(-1.0), SignalLabel::Sell);
    assert_eq!(label_for_score(-2.99), SignalLabel::Sell);
    assert_eq!(label_for_score(-3.0), SignalLabel::StrongSell);
    assert_eq!(label_for_score(-7.5), SignalLabel::StrongSell);
}

#[test]
fn test_labels_partition_score_line() {
    let mut score = -10.0;
    while score <= 10.0 {
        let expected = if score >= 3.0 {
            SignalLabel::StrongBuy
        } else if score >= 1.0 {
            SignalLabel::Buy
        } else if score > -1.0 {
            SignalLabel::Neutral
        } else if score > -3.0 {
            SignalLabel::Sell
        } else {
            SignalLabel::StrongSell
        };
        assert_eq!(label_for_score(score), expected, "score {}", score);
        score += 0.125;
    }
}

#[test]
fn test_label_strings() {
    assert_eq!(SignalLabel::StrongBuy.to_string(), "STRONG BUY");
    assert_eq!(SignalLabel::Buy.as_str(), "BUY");
    assert_eq!(SignalLabel::Neutral.as_str(), "NEUTRAL");
    assert_eq!(SignalLabel::Sell.as_str(), "SELL");
    assert_eq!(
        serde_json::to_string(&SignalLabel::StrongSell).unwrap(),
        "\"STRONG SELL\""
    );
}
