#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use stockalyse::domain::analyser::{AnalysisKind, AnalysisResult};
use stockalyse::domain::error::StockError;
pub use stockalyse::domain::record::Record;
use stockalyse::ports::report_port::ReportPort;
use tempfile::TempDir;

/// Report sink that keeps every result for inspection.
#[derive(Default)]
pub struct CapturingReport {
    pub entries: Vec<(String, AnalysisKind, AnalysisResult)>,
}

impl ReportPort for CapturingReport {
    fn report(
        &mut self,
        symbol: &str,
        kind: &AnalysisKind,
        result: &AnalysisResult,
    ) -> Result<(), StockError> {
        self.entries.push((symbol.to_string(), *kind, result.clone()));
        Ok(())
    }
}

pub fn make_record(date: &str, open: f64, close: f64) -> Record {
    Record::new(date, open, open.max(close) + 1.0, open.min(close) - 1.0, close, 1000)
}

pub fn csv_line(symbol: &str, r: &Record) -> String {
    format!(
        "{},{},{},{},{},{},{}\n",
        symbol, r.date, r.open, r.high, r.low, r.close, r.volume
    )
}

/// Triplet lines for `r`, emitted in the given tag order.
pub fn triplet_lines(symbol: &str, r: &Record, order: &[&str]) -> String {
    order
        .iter()
        .map(|tag| {
            let value = match *tag {
                "DA" => r.date.clone(),
                "OP" => r.open.to_string(),
                "HI" => r.high.to_string(),
                "LO" => r.low.to_string(),
                "CL" => r.close.to_string(),
                "VO" => r.volume.to_string(),
                other => panic!("unknown tag {other}"),
            };
            format!("{}:{}:{}\n", symbol, tag, value)
        })
        .collect()
}

pub const TAGS: [&str; 6] = ["DA", "OP", "HI", "LO", "CL", "VO"];

pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}
