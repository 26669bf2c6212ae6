//! Bollinger Bands indicator

use crate::indicators::window::RollingWindow;
use crate::indicators::Next;

/// Band values for one bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerValue {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    /// Sample standard deviation of the window.
    pub std: f64,
}

/// Middle Band = SMA(period)
/// Upper Band = Middle + (k * sample standard deviation)
/// Lower Band = Middle - (k * sample standard deviation)
#[derive(Debug, Clone)]
pub struct BollingerBands {
    window: RollingWindow,
    k: f64,
}

impl BollingerBands {
    pub fn new(period: usize, k: f64) -> Self {
        Self {
            window: RollingWindow::new(period),
            k,
        }
    }
}

impl Default for BollingerBands {
    /// 20 SMA, 2 sigma
    fn default() -> Self {
        Self::new(20, 2.0)
    }
}

impl Next<f64> for BollingerBands {
    type Output = Option<BollingerValue>;

    fn next(&mut self, close: f64) -> Option<BollingerValue> {
        self.window.push(close);
        let middle = self.window.mean()?;
        let std = self.window.sample_std()?;
        Some(BollingerValue {
            upper: middle + self.k * std,
            middle,
            lower: middle - self.k * std,
            std,
        })
    }
}
