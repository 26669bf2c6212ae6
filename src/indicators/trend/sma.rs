//! SMA (Simple Moving Average) indicator

use crate::indicators::window::RollingWindow;
use crate::indicators::Next;

/// Trailing arithmetic mean over `period` values.
#[derive(Debug, Clone)]
pub struct Sma {
    window: RollingWindow,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Self {
            window: RollingWindow::new(period),
        }
    }

    pub fn period(&self) -> usize {
        self.window.capacity()
    }
}

impl Next<f64> for Sma {
    type Output = Option<f64>;

    fn next(&mut self, input: f64) -> Option<f64> {
        self.window.push(input);
        self.window.mean()
    }
}

/// Calculate the SMA of every value in `values`.
pub fn calculate_sma(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut sma = Sma::new(period);
    values.iter().map(|&v| sma.next(v)).collect()
}
