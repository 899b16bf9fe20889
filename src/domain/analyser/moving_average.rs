//! Mean of the last N closing prices.
//!
//! Closes are collected during the pass and averaged once in `result()`.
//! The sum is always divided by the configured window, so a history shorter
//! than the window yields a value biased towards zero. A window of zero is
//! caller misuse and yields NaN.

use crate::domain::analyser::Analyser;
use crate::domain::record::Record;

#[derive(Debug, Clone)]
pub struct MovingAverage {
    window: usize,
    closes: Vec<f64>,
}

impl MovingAverage {
    pub fn new(window: usize) -> Self {
        Self {
            window,
            closes: Vec::new(),
        }
    }
}

impl Analyser for MovingAverage {
    type Output = f64;

    fn process(&mut self, record: &Record) {
        self.closes.push(record.close);
    }

    fn reset(&mut self) {
        self.closes.clear();
    }

    fn result(&self) -> f64 {
        let start = self.closes.len().saturating_sub(self.window);
        let sum: f64 = self.closes[start..].iter().sum();
        sum / self.window as f64
    }
}
