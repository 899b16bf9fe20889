//! Analysis jobs and the run plan built from configuration.

use crate::domain::analyser::AnalysisKind;
use crate::domain::error::StockError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// One analysis to run against one symbol, written `SYMBOL:kind`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisJob {
    pub symbol: String,
    pub kind: AnalysisKind,
}

impl FromStr for AnalysisJob {
    type Err = StockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (symbol, kind) = s.split_once(':').ok_or_else(|| StockError::AnalysisSpec {
            spec: s.trim().to_string(),
            reason: "expected SYMBOL:analysis".to_string(),
        })?;
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(StockError::AnalysisSpec {
                spec: s.trim().to_string(),
                reason: "missing symbol".to_string(),
            });
        }
        Ok(Self {
            symbol: symbol.to_string(),
            kind: kind.parse()?,
        })
    }
}

impl fmt::Display for AnalysisJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.symbol, self.kind)
    }
}

#[derive(Debug, Clone)]
pub struct RunPlan {
    pub sources: Vec<PathBuf>,
    pub jobs: Vec<AnalysisJob>,
}
