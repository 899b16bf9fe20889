//! Running mean of daily volume.

use crate::domain::analyser::Analyser;
use crate::domain::record::Record;

#[derive(Debug, Clone, Default)]
pub struct AverageVolume {
    total: u128,
    days: u64,
}

impl AverageVolume {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Analyser for AverageVolume {
    type Output = f64;

    fn process(&mut self, record: &Record) {
        self.total += u128::from(record.volume);
        self.days += 1;
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    /// Mean volume, or 0.0 before any record.
    fn result(&self) -> f64 {
        if self.days == 0 {
            return 0.0;
        }
        self.total as f64 / self.days as f64
    }
}
