//! Most recent day opening at least `delta` away from the previous close.

use crate::domain::analyser::Analyser;
use crate::domain::record::Record;

#[derive(Debug, Clone)]
pub struct GapUp {
    delta: f64,
    previous_close: Option<f64>,
    latest: Option<Record>,
}

impl GapUp {
    pub fn new(delta: f64) -> Self {
        Self {
            delta,
            previous_close: None,
            latest: None,
        }
    }
}

impl Analyser for GapUp {
    type Output = Option<Record>;

    fn process(&mut self, record: &Record) {
        // the first record of a pass only seeds the previous close
        if let Some(previous_close) = self.previous_close {
            if (record.open - previous_close).abs() >= self.delta {
                self.latest = Some(record.clone());
            }
        }
        self.previous_close = Some(record.close);
    }

    fn reset(&mut self) {
        self.previous_close = None;
        self.latest = None;
    }

    fn result(&self) -> Option<Record> {
        self.latest.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str, open: f64, close: f64) -> Record {
        Record::new(date, open, open.max(close), open.min(close), close, 500)
    }

    #[test]
    fn detects_gap_on_second_day() {
        let mut gap = GapUp::new(0.01);
        gap.process(&day("2020-02-03", 1.0, 1.0));
        gap.process(&day("2020-02-04", 1.03, 1.02));
        let found = gap.result().expect("gap expected");
        assert_eq!(found.date, "2020-02-04");
        assert_eq!(found, day("2020-02-04", 1.03, 1.02));
    }

    #[test]
    fn below_threshold_is_none() {
        let mut gap = GapUp::new(0.5);
        gap.process(&day("d1", 10.0, 10.0));
        gap.process(&day("d2", 10.1, 10.2));
        gap.process(&day("d3", 10.3, 10.1));
        assert!(gap.result().is_none());
    }

    #[test]
    fn first_day_never_qualifies() {
        let mut gap = GapUp::new(0.0);
        gap.process(&day("d1", 50.0, 1.0));
        assert!(gap.result().is_none());
    }

    #[test]
    fn keeps_most_recent_gap_in_either_direction() {
        let mut gap = GapUp::new(1.0);
        gap.process(&day("d1", 10.0, 10.0));
        gap.process(&day("d2", 12.0, 12.0));
        gap.process(&day("d3", 12.2, 12.0));
        gap.process(&day("d4", 10.5, 10.0));
        gap.process(&day("d5", 10.2, 10.0));
        assert_eq!(gap.result().unwrap().date, "d4");
    }

    #[test]
    fn gap_equal_to_delta_qualifies() {
        let mut gap = GapUp::new(0.5);
        gap.process(&day("d1", 1.0, 2.0));
        gap.process(&day("d2", 2.5, 2.5));
        assert_eq!(gap.result().unwrap().date, "d2");
    }

    #[test]
    fn reset_clears_seed_and_result() {
        let mut gap = GapUp::new(0.5);
        gap.process(&day("d1", 1.0, 1.0));
        gap.process(&day("d2", 3.0, 3.0));
        assert!(gap.result().is_some());

        gap.reset();
        assert!(gap.result().is_none());
        gap.process(&day("e1", 100.0, 100.0));
        assert!(gap.result().is_none());
    }
}
