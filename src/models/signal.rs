//! Signal scores, labels and scored rows.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

use crate::models::features::{Feature, FeatureRow};

/// Closed set of categorical trading signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum SignalLabel {
    #[serde(rename = "STRONG BUY")]
    StrongBuy,
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "NEUTRAL")]
    Neutral,
    #[serde(rename = "SELL")]
    Sell,
    #[serde(rename = "STRONG SELL")]
    StrongSell,
}

impl SignalLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalLabel::StrongBuy => "STRONG BUY",
            SignalLabel::Buy => "BUY",
            SignalLabel::Neutral => "NEUTRAL",
            SignalLabel::Sell => "SELL",
            SignalLabel::StrongSell => "STRONG SELL",
        }
    }
}

impl fmt::Display for SignalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SignalLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalResult {
    pub score: f64,
    pub label: SignalLabel,
}

/// A feature row together with its signal.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRow {
    pub features: FeatureRow,
    pub signal: SignalResult,
}

impl ScoredRow {
    pub fn rsi(&self) -> Option<f64> {
        self.features.get(Feature::Rsi)
    }
}

impl Serialize for ScoredRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(8 + Feature::COUNT))?;
        self.features.serialize_fields(&mut map)?;
        map.serialize_entry("Signal_Score", &self.signal.score)?;
        map.serialize_entry("Signal_Label", &self.signal.label)?;
        map.end()
    }
}
