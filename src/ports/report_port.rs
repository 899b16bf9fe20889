//! Analysis report port.

use crate::domain::analyser::{AnalysisKind, AnalysisResult};
use crate::domain::error::StockError;

/// Sink for analysis results, one call per analysis invocation.
pub trait ReportPort {
    fn report(
        &mut self,
        symbol: &str,
        kind: &AnalysisKind,
        result: &AnalysisResult,
    ) -> Result<(), StockError>;
}
