//! Daily trading record and its incremental builder.

/// One trading day for one symbol.
///
/// The date is kept as the token found in the source file; the core never
/// interprets it.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl Record {
    pub fn new(
        date: impl Into<String>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Self {
        Self {
            date: date.into(),
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Record under construction, filled one field at a time.
///
/// Only becomes a [`Record`] once every field is present.
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    date: Option<String>,
    open: Option<f64>,
    high: Option<f64>,
    low: Option<f64>,
    close: Option<f64>,
    volume: Option<u64>,
}

impl RecordBuilder {
    pub const FIELD_COUNT: usize = 6;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = Some(date.into());
    }

    pub fn set_open(&mut self, open: f64) {
        self.open = Some(open);
    }

    pub fn set_high(&mut self, high: f64) {
        self.high = Some(high);
    }

    pub fn set_low(&mut self, low: f64) {
        self.low = Some(low);
    }

    pub fn set_close(&mut self, close: f64) {
        self.close = Some(close);
    }

    pub fn set_volume(&mut self, volume: u64) {
        self.volume = Some(volume);
    }

    /// Number of fields populated so far (0..=6).
    pub fn filled(&self) -> usize {
        [
            self.date.is_some(),
            self.open.is_some(),
            self.high.is_some(),
            self.low.is_some(),
            self.close.is_some(),
            self.volume.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    pub fn is_complete(&self) -> bool {
        self.filled() == Self::FIELD_COUNT
    }

    pub fn is_empty(&self) -> bool {
        self.filled() == 0
    }

    pub fn build(&self) -> Option<Record> {
        Some(Record {
            date: self.date.clone()?,
            open: self.open?,
            high: self.high?,
            low: self.low?,
            close: self.close?,
            volume: self.volume?,
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_builder() -> RecordBuilder {
        let mut b = RecordBuilder::new();
        b.set_date("2020-02-03");
        b.set_open(10.0);
        b.set_high(12.0);
        b.set_low(9.5);
        b.set_close(11.0);
        b.set_volume(40_000);
        b
    }

    #[test]
    fn new_builder_is_empty() {
        let b = RecordBuilder::new();
        assert!(b.is_empty());
        assert_eq!(b.filled(), 0);
        assert!(b.build().is_none());
    }

    #[test]
    fn filled_counts_distinct_fields() {
        let mut b = RecordBuilder::new();
        b.set_open(1.0);
        b.set_open(2.0);
        b.set_close(3.0);
        assert_eq!(b.filled(), 2);
        assert!(!b.is_complete());
    }

    #[test]
    fn build_requires_every_field() {
        let mut b = full_builder();
        assert!(b.is_complete());
        assert_eq!(
            b.build(),
            Some(Record::new("2020-02-03", 10.0, 12.0, 9.5, 11.0, 40_000))
        );

        b.clear();
        b.set_date("2020-02-04");
        b.set_open(1.0);
        b.set_high(1.0);
        b.set_low(1.0);
        b.set_close(1.0);
        assert!(b.build().is_none());
    }

    #[test]
    fn zero_values_count_as_set() {
        let mut b = RecordBuilder::new();
        b.set_low(0.0);
        b.set_volume(0);
        assert_eq!(b.filled(), 2);
    }

    #[test]
    fn clear_discards_partial_data() {
        let mut b = full_builder();
        b.clear();
        assert!(b.is_empty());
    }
}
