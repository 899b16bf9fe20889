//! Source format port: turns an open reader into records.

use crate::domain::collection::StockCollection;
use crate::domain::error::StockError;
use std::io::Read;

/// A line-oriented file format.
///
/// Implementations consume the whole reader under their own iteration
/// policy, append complete records to `collection`, and record every
/// recovered problem in `report`. Only an unreadable source is an `Err`.
pub trait RecordFormat {
    /// Short format name used in messages, e.g. `csv`.
    fn name(&self) -> &'static str;

    /// Text a file name must contain to be accepted, e.g. `.csv`.
    fn marker(&self) -> &'static str;

    fn process(
        &mut self,
        reader: &mut dyn Read,
        collection: &mut StockCollection,
        report: &mut LoadReport,
    ) -> Result<(), StockError>;
}

/// Outcome of loading one source.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub source: String,
    pub format: &'static str,
    pub appended: usize,
    pub issues: Vec<StockError>,
}

impl LoadReport {
    pub fn new(source: impl Into<String>, format: &'static str) -> Self {
        Self {
            source: source.into(),
            format,
            ..Self::default()
        }
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Log and keep a recovered problem.
    pub fn reject(&mut self, issue: StockError) {
        log::warn!("{} input {}: {}", self.format, self.source, issue);
        self.issues.push(issue);
    }
}
