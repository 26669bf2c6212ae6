//! Indicator calculation and scoring in a single call.

use tracing::debug;

use crate::error::EngineResult;
use crate::indicators::IndicatorCalculator;
use crate::models::{PriceSeries, ScoredRow};
use crate::signals::scoring::SignalScorer;

pub use crate::indicators::MIN_ROWS;

pub struct SignalEngine;

impl SignalEngine {
    /// Enrich `series` and attach a signal to every surviving row.
    pub fn run(series: &PriceSeries) -> EngineResult<Vec<ScoredRow>> {
        let enriched = IndicatorCalculator::compute(series)?;
        let rows = enriched
            .into_rows()
            .into_iter()
            .map(|features| {
                let signal = SignalScorer::score(&features)?;
                Ok(ScoredRow { features, signal })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        if let Some(last) = rows.last() {
            debug!(
                rows = rows.len(),
                last_score = last.signal.score,
                last_label = %last.signal.label,
                "SignalEngine: scored series"
            );
        }
        Ok(rows)
    }
}
