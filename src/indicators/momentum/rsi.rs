//! RSI (Relative Strength Index) indicator

use crate::indicators::window::RollingWindow;
use crate::indicators::Next;

/// Rolling-mean RSI.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = mean gain / mean loss over the last `period` close-to-close deltas
///
/// A zero mean loss is the limiting case RS = inf, so RSI saturates at 100.
#[derive(Debug, Clone)]
pub struct Rsi {
    gains: RollingWindow,
    losses: RollingWindow,
    prev_close: Option<f64>,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self {
            gains: RollingWindow::new(period),
            losses: RollingWindow::new(period),
            prev_close: None,
        }
    }
}

impl Next<f64> for Rsi {
    type Output = Option<f64>;

    fn next(&mut self, close: f64) -> Option<f64> {
        let prev = self.prev_close.replace(close)?;
        let delta = close - prev;
        if delta.is_nan() {
            self.gains.push(f64::NAN);
            self.losses.push(f64::NAN);
        } else {
            self.gains.push(delta.max(0.0));
            self.losses.push((-delta).max(0.0));
        }

        let avg_gain = self.gains.mean()?;
        let avg_loss = self.losses.mean()?;
        Some(rsi_from_means(avg_gain, avg_loss))
    }
}

/// RSI from mean gain and mean loss, clamped to [0, 100].
pub fn rsi_from_means(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss <= 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    (100.0 - 100.0 / (1.0 + rs)).clamp(0.0, 100.0)
}

/// Calculate RSI for every close in `closes`.
pub fn calculate_rsi(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut rsi = Rsi::new(period);
    closes.iter().map(|&c| rsi.next(c)).collect()
}
