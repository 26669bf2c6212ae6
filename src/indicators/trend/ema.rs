//! EMA (Exponential Moving Average) indicator

use ta::indicators::ExponentialMovingAverage;

use crate::error::{EngineError, EngineResult};
use crate::indicators::Next;

/// Exponential smoothing with `alpha = 2 / (span + 1)`, seeded by the first
/// value and without bias adjustment.
pub type Ema = ExponentialMovingAverage;

pub fn build_ema(span: usize) -> EngineResult<Ema> {
    Ema::new(span).map_err(|_| EngineError::InvalidPeriod {
        indicator: "EMA",
        period: span,
    })
}

/// Smoothing factor for a given span.
pub fn ema_alpha(span: usize) -> f64 {
    2.0 / (span as f64 + 1.0)
}

/// Calculate the EMA of every value in `values`.
pub fn calculate_ema(values: &[f64], span: usize) -> EngineResult<Vec<f64>> {
    let mut ema = build_ema(span)?;
    Ok(values.iter().map(|&v| ema.next(v)).collect())
}
