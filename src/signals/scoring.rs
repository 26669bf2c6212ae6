//! Row scoring and label mapping.

use crate::error::EngineResult;
use crate::models::{FeatureRow, SignalLabel, SignalResult};
use crate::signals::rules::Rule;

pub const STRONG_THRESHOLD: f64 = 3.0;
pub const THRESHOLD: f64 = 1.0;

/// Map a score to its label. First match wins:
/// >= 3, >= 1, <= -3, <= -1, otherwise neutral.
pub fn label_for_score(score: f64) -> SignalLabel {
    if score >= STRONG_THRESHOLD {
        SignalLabel::StrongBuy
    } else if score >= THRESHOLD {
        SignalLabel::Buy
    } else if score <= -STRONG_THRESHOLD {
        SignalLabel::StrongSell
    } else if score <= -THRESHOLD {
        SignalLabel::Sell
    } else {
        SignalLabel::Neutral
    }
}

pub struct SignalScorer;

impl SignalScorer {
    /// Sum every rule's contribution for one row.
    ///
    /// Fails with `MissingFeature` on the first absent input; a missing value
    /// is never treated as zero.
    pub fn score(row: &FeatureRow) -> EngineResult<SignalResult> {
        let mut score = 0.0;
        for rule in Rule::ALL {
            score += rule.evaluate(row)?;
        }
        Ok(SignalResult {
            score,
            label: label_for_score(score),
        })
    }

    /// Per-rule contributions, for explaining a score.
    pub fn breakdown(row: &FeatureRow) -> EngineResult<Vec<(Rule, f64)>> {
        Rule::ALL
            .into_iter()
            .map(|rule| rule.evaluate(row).map(|c| (rule, c)))
            .collect()
    }
}
