//! MACD (Moving Average Convergence Divergence) indicator
//!
//! MACD = EMA(fast) - EMA(slow)
//! Signal = EMA(signal) of MACD

use ta::indicators::{MovingAverageConvergenceDivergence, MovingAverageConvergenceDivergenceOutput};

use crate::error::{EngineError, EngineResult};
use crate::indicators::Next;

pub type Macd = MovingAverageConvergenceDivergence;

/// MACD line, signal line and histogram for one bar.
pub type MacdValue = MovingAverageConvergenceDivergenceOutput;

pub fn build_macd(fast_period: usize, slow_period: usize, signal_period: usize) -> EngineResult<Macd> {
    Macd::new(fast_period, slow_period, signal_period).map_err(|_| EngineError::InvalidPeriod {
        indicator: "MACD",
        period: fast_period.min(slow_period).min(signal_period),
    })
}

/// Calculate MACD with default periods (12, 26, 9) for every close.
pub fn calculate_macd_default(closes: &[f64]) -> EngineResult<Vec<MacdValue>> {
    let mut macd = build_macd(12, 26, 9)?;
    Ok(closes.iter().map(|&c| macd.next(c)).collect())
}
