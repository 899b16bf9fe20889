//! Highest high and lowest low over a pass.

use crate::domain::analyser::Analyser;
use crate::domain::record::Record;

/// Tracks the extremes as `Option` so that a genuine zero low is never
/// confused with "no data yet".
#[derive(Debug, Clone, Default)]
pub struct HighLow {
    highest: Option<f64>,
    lowest: Option<f64>,
}

impl HighLow {
    /// Reported as the highest price when no record was processed.
    pub const UNSET_HIGH: f64 = 0.0;
    /// Reported as the lowest price when no record was processed.
    pub const UNSET_LOW: f64 = -1.0;

    pub fn new() -> Self {
        Self::default()
    }

    /// The extremes, or `None` before any record.
    pub fn range(&self) -> Option<(f64, f64)> {
        Some((self.highest?, self.lowest?))
    }
}

impl Analyser for HighLow {
    type Output = (f64, f64);

    fn process(&mut self, record: &Record) {
        self.highest = Some(self.highest.map_or(record.high, |h| h.max(record.high)));
        self.lowest = Some(self.lowest.map_or(record.low, |l| l.min(record.low)));
    }

    fn reset(&mut self) {
        self.highest = None;
        self.lowest = None;
    }

    /// `(highest, lowest)`; `(UNSET_HIGH, UNSET_LOW)` for an empty pass.
    fn result(&self) -> (f64, f64) {
        self.range().unwrap_or((Self::UNSET_HIGH, Self::UNSET_LOW))
    }
}
