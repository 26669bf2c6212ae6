//! Close-to-close returns.

use std::collections::VecDeque;

use crate::indicators::Next;

/// Value seen `periods` steps ago.
#[derive(Debug, Clone)]
pub struct Lag {
    periods: usize,
    history: VecDeque<f64>,
}

impl Lag {
    pub fn new(periods: usize) -> Self {
        let periods = periods.max(1);
        Self {
            periods,
            history: VecDeque::with_capacity(periods + 1),
        }
    }
}

impl Next<f64> for Lag {
    type Output = Option<f64>;

    fn next(&mut self, input: f64) -> Option<f64> {
        self.history.push_back(input);
        if self.history.len() > self.periods {
            self.history.pop_front()
        } else {
            None
        }
    }
}

/// Fractional change over `periods` bars: `close_t / close_{t-n} - 1`.
#[derive(Debug, Clone)]
pub struct PctChange {
    lag: Lag,
}

impl PctChange {
    pub fn new(periods: usize) -> Self {
        Self {
            lag: Lag::new(periods),
        }
    }
}

impl Next<f64> for PctChange {
    type Output = Option<f64>;

    fn next(&mut self, close: f64) -> Option<f64> {
        let prev = self.lag.next(close)?;
        Some(close / prev - 1.0)
    }
}

/// Natural log of the one-bar close ratio.
#[derive(Debug, Clone)]
pub struct LogReturn {
    lag: Lag,
}

impl LogReturn {
    pub fn new() -> Self {
        Self { lag: Lag::new(1) }
    }
}

impl Default for LogReturn {
    fn default() -> Self {
        Self::new()
    }
}

impl Next<f64> for LogReturn {
    type Output = Option<f64>;

    fn next(&mut self, close: f64) -> Option<f64> {
        let prev = self.lag.next(close)?;
        Some((close / prev).ln())
    }
}
