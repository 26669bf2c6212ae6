//! Derived feature columns and the rows that carry them.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{EngineError, EngineResult};
use crate::models::bar::{format_timestamp, Bar};

/// Every derived column the indicator calculator produces, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Sma20,
    Sma50,
    Sma200,
    Rsi,
    Macd,
    MacdSignal,
    BbMiddle,
    BbStd,
    BbUpper,
    BbLower,
    Volatility,
    LogReturn,
    CloseLag1,
    CloseLag2,
    CloseLag3,
    VolLag1,
    VolLag2,
    VolLag3,
    Momentum1d,
    Momentum5d,
}

impl Feature {
    pub const COUNT: usize = 20;

    pub const ALL: [Feature; Feature::COUNT] = [
        Feature::Sma20,
        Feature::Sma50,
        Feature::Sma200,
        Feature::Rsi,
        Feature::Macd,
        Feature::MacdSignal,
        Feature::BbMiddle,
        Feature::BbStd,
        Feature::BbUpper,
        Feature::BbLower,
        Feature::Volatility,
        Feature::LogReturn,
        Feature::CloseLag1,
        Feature::CloseLag2,
        Feature::CloseLag3,
        Feature::VolLag1,
        Feature::VolLag2,
        Feature::VolLag3,
        Feature::Momentum1d,
        Feature::Momentum5d,
    ];

    /// Column name used in tables and JSON records.
    pub fn column_name(&self) -> &'static str {
        match self {
            Feature::Sma20 => "SMA_20",
            Feature::Sma50 => "SMA_50",
            Feature::Sma200 => "SMA_200",
            Feature::Rsi => "RSI",
            Feature::Macd => "MACD",
            Feature::MacdSignal => "MACD_Signal",
            Feature::BbMiddle => "BB_Middle",
            Feature::BbStd => "BB_Std",
            Feature::BbUpper => "BB_Upper",
            Feature::BbLower => "BB_Lower",
            Feature::Volatility => "Volatility",
            Feature::LogReturn => "Log_Return",
            Feature::CloseLag1 => "Close_Lag_1",
            Feature::CloseLag2 => "Close_Lag_2",
            Feature::CloseLag3 => "Close_Lag_3",
            Feature::VolLag1 => "Vol_Lag_1",
            Feature::VolLag2 => "Vol_Lag_2",
            Feature::VolLag3 => "Vol_Lag_3",
            Feature::Momentum1d => "Momentum_1d",
            Feature::Momentum5d => "Momentum_5d",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// A bar plus its derived feature values. Values are `None` while the
/// corresponding window has not filled.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    pub bar: Bar,
    values: [Option<f64>; Feature::COUNT],
}

impl FeatureRow {
    pub fn new(bar: Bar) -> Self {
        Self {
            bar,
            values: [None; Feature::COUNT],
        }
    }

    pub fn with(mut self, feature: Feature, value: f64) -> Self {
        self.set(feature, Some(value));
        self
    }

    pub(crate) fn set(&mut self, feature: Feature, value: Option<f64>) {
        self.values[feature.index()] = value;
    }

    pub fn get(&self, feature: Feature) -> Option<f64> {
        self.values[feature.index()]
    }

    /// Fetch a feature or fail with `MissingFeature` naming it.
    pub fn require(&self, feature: Feature) -> EngineResult<f64> {
        self.get(feature)
            .ok_or(EngineError::MissingFeature(feature))
    }

    pub fn first_missing(&self) -> Option<Feature> {
        Feature::ALL.into_iter().find(|f| self.get(*f).is_none())
    }

    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    pub fn close(&self) -> f64 {
        self.bar.close
    }

    pub(crate) fn serialize_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry("Date", &format_timestamp(&self.bar.timestamp))?;
        map.serialize_entry("Open", &self.bar.open)?;
        map.serialize_entry("High", &self.bar.high)?;
        map.serialize_entry("Low", &self.bar.low)?;
        map.serialize_entry("Close", &self.bar.close)?;
        map.serialize_entry("Volume", &self.bar.volume)?;
        for feature in Feature::ALL {
            map.serialize_entry(feature.column_name(), &self.get(feature))?;
        }
        Ok(())
    }
}

impl Serialize for FeatureRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(6 + Feature::COUNT))?;
        self.serialize_fields(&mut map)?;
        map.end()
    }
}

/// Fully populated feature rows, in input order, with the warm-up discarded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnrichedSeries {
    rows: Vec<FeatureRow>,
}

impl EnrichedSeries {
    pub(crate) fn from_complete_rows(rows: Vec<FeatureRow>) -> Self {
        debug_assert!(rows.iter().all(FeatureRow::is_complete));
        Self { rows }
    }

    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FeatureRow> {
        self.rows.iter()
    }

    pub fn into_rows(self) -> Vec<FeatureRow> {
        self.rows
    }
}

impl<'a> IntoIterator for &'a EnrichedSeries {
    type Item = &'a FeatureRow;
    type IntoIter = std::slice::Iter<'a, FeatureRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
