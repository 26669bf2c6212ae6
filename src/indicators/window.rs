//! Fixed-size trailing window with running sums.

use std::collections::VecDeque;

/// Trailing window over the last `capacity` values, inclusive of the most
/// recent push.
///
/// Finite values feed running sums kept relative to a shift value. The shift
/// is re-based on the oldest value in the window whenever the sums are rebuilt
/// from the buffer, which happens once per full turnover. A window holding a
/// single repeated value reports that value and zero spread exactly.
/// Non-finite values bypass the sums; while any is in the window, statistics
/// are taken directly from the buffer.
#[derive(Debug, Clone)]
pub struct RollingWindow {
    capacity: usize,
    values: VecDeque<f64>,
    shift: f64,
    sum: f64,
    sum_sq: f64,
    non_finite: usize,
    same_run: usize,
    pushes_since_rebuild: usize,
}

impl RollingWindow {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            values: VecDeque::with_capacity(capacity + 1),
            shift: 0.0,
            sum: 0.0,
            sum_sq: 0.0,
            non_finite: 0,
            same_run: 0,
            pushes_since_rebuild: 0,
        }
    }

    pub fn push(&mut self, value: f64) {
        self.same_run = match self.values.back() {
            Some(&last) if last == value => self.same_run + 1,
            _ => 1,
        };

        if value.is_finite() {
            if self.values.len() == self.non_finite {
                self.shift = value;
                self.sum = 0.0;
                self.sum_sq = 0.0;
            }
            let d = value - self.shift;
            self.sum += d;
            self.sum_sq += d * d;
        } else {
            self.non_finite += 1;
        }
        self.values.push_back(value);

        if self.values.len() > self.capacity {
            if let Some(old) = self.values.pop_front() {
                if old.is_finite() {
                    let d = old - self.shift;
                    self.sum -= d;
                    self.sum_sq -= d * d;
                } else {
                    self.non_finite -= 1;
                }
            }
        }

        self.pushes_since_rebuild += 1;
        if self.pushes_since_rebuild >= self.capacity {
            self.rebuild();
        }
    }

    fn rebuild(&mut self) {
        let values = &self.values;
        let finite = || values.iter().copied().filter(|v| v.is_finite());
        let shift = finite().next().unwrap_or(0.0);
        let sum: f64 = finite().map(|v| v - shift).sum();
        let sum_sq: f64 = finite().map(|v| (v - shift).powi(2)).sum();

        self.shift = shift;
        self.sum = sum;
        self.sum_sq = sum_sq;
        self.pushes_since_rebuild = 0;
    }

    fn constant_value(&self) -> Option<f64> {
        if self.same_run >= self.capacity {
            self.values.back().copied()
        } else {
            None
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.values.len() == self.capacity
    }

    /// Arithmetic mean of a full window.
    pub fn mean(&self) -> Option<f64> {
        if !self.is_full() {
            return None;
        }
        if let Some(value) = self.constant_value() {
            return Some(value);
        }
        let n = self.capacity as f64;
        if self.non_finite > 0 {
            return Some(self.values.iter().sum::<f64>() / n);
        }
        Some(self.shift + self.sum / n)
    }

    /// Sample (n - 1) standard deviation of a full window.
    pub fn sample_std(&self) -> Option<f64> {
        if !self.is_full() || self.capacity < 2 {
            return None;
        }
        let n = self.capacity as f64;
        if self.constant_value().is_some_and(f64::is_finite) {
            return Some(0.0);
        }
        if self.non_finite > 0 {
            let mean = self.values.iter().sum::<f64>() / n;
            let ss: f64 = self.values.iter().map(|v| (v - mean).powi(2)).sum();
            return Some((ss / (n - 1.0)).sqrt());
        }
        let variance = (self.sum_sq - self.sum * self.sum / n) / (n - 1.0);
        Some(variance.max(0.0).sqrt())
    }
}
