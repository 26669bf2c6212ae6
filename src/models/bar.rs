//! OHLCV bars and the validated price series the engine reads.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One OHLCV observation for a fixed trading interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    #[serde(rename = "Date")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "Open")]
    pub open: f64,
    #[serde(rename = "High")]
    pub high: f64,
    #[serde(rename = "Low")]
    pub low: f64,
    #[serde(rename = "Close")]
    pub close: f64,
    #[serde(rename = "Volume")]
    pub volume: f64,
}

impl Bar {
    pub fn new(
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Chronologically ordered bars with strictly increasing timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    bars: Vec<Bar>,
}

impl PriceSeries {
    /// Validate ordering and wrap the bars.
    pub fn new(bars: Vec<Bar>) -> EngineResult<Self> {
        for (i, pair) in bars.windows(2).enumerate() {
            if pair[1].timestamp == pair[0].timestamp {
                return Err(EngineError::MalformedSeries(format!(
                    "duplicate timestamp {} at row {}",
                    pair[1].timestamp,
                    i + 1
                )));
            }
            if pair[1].timestamp < pair[0].timestamp {
                return Err(EngineError::MalformedSeries(format!(
                    "timestamp {} at row {} precedes {}",
                    pair[1].timestamp,
                    i + 1,
                    pair[0].timestamp
                )));
            }
        }
        Ok(Self { bars })
    }

    /// Build a series from column vectors, as handed over by a tabular source.
    pub fn from_columns(
        timestamps: Vec<DateTime<Utc>>,
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
        volume: Vec<f64>,
    ) -> EngineResult<Self> {
        let expected = timestamps.len();
        for (name, len) in [
            ("Open", open.len()),
            ("High", high.len()),
            ("Low", low.len()),
            ("Close", close.len()),
            ("Volume", volume.len()),
        ] {
            if len != expected {
                return Err(EngineError::MalformedSeries(format!(
                    "column {} has {} values, expected {}",
                    name, len, expected
                )));
            }
        }

        let bars = (0..expected)
            .map(|i| Bar::new(timestamps[i], open[i], high[i], low[i], close[i], volume[i]))
            .collect();
        Self::new(bars)
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn closes(&self) -> impl Iterator<Item = f64> + '_ {
        self.bars.iter().map(|b| b.close)
    }
}

/// Render a timestamp the way daily tables are usually keyed: a bare date for
/// midnight bars, RFC 3339 otherwise.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    if ts.num_seconds_from_midnight() == 0 && ts.nanosecond() == 0 {
        ts.format("%Y-%m-%d").to_string()
    } else {
        ts.to_rfc3339()
    }
}
