//! Stateful per-record analysers.
//!
//! - `Analyser`: the visitor contract driven by [`SymbolHistory::analyse`]
//! - `AnalysisKind`: analysis identity + parameters, parsed from text such as
//!   `moving_average(10)`
//! - `AnalysisResult`: the output of one pass, whatever the kind

pub mod average_volume;
pub mod gap_up;
pub mod high_low;
pub mod moving_average;

use crate::domain::collection::SymbolHistory;
use crate::domain::error::StockError;
use crate::domain::record::Record;
use std::fmt;
use std::str::FromStr;

pub use average_volume::AverageVolume;
pub use gap_up::GapUp;
pub use high_low::HighLow;
pub use moving_average::MovingAverage;

/// Accumulator fed one record at a time, oldest first.
pub trait Analyser {
    type Output;

    fn process(&mut self, record: &Record);

    /// Return to the state the analyser was constructed in.
    fn reset(&mut self);

    fn result(&self) -> Self::Output;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnalysisKind {
    AverageVolume,
    HighLow,
    MovingAverage(usize),
    GapUp(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisResult {
    AverageVolume(f64),
    HighLow { highest: f64, lowest: f64 },
    MovingAverage(f64),
    GapUp(Option<Record>),
}

impl AnalysisKind {
    /// Run one fresh pass of this analysis over `history`.
    pub fn run(&self, history: &SymbolHistory) -> AnalysisResult {
        match *self {
            AnalysisKind::AverageVolume => {
                let mut analyser = AverageVolume::new();
                history.analyse(&mut analyser);
                AnalysisResult::AverageVolume(analyser.result())
            }
            AnalysisKind::HighLow => {
                let mut analyser = HighLow::new();
                history.analyse(&mut analyser);
                let (highest, lowest) = analyser.result();
                AnalysisResult::HighLow { highest, lowest }
            }
            AnalysisKind::MovingAverage(window) => {
                let mut analyser = MovingAverage::new(window);
                history.analyse(&mut analyser);
                AnalysisResult::MovingAverage(analyser.result())
            }
            AnalysisKind::GapUp(delta) => {
                let mut analyser = GapUp::new(delta);
                history.analyse(&mut analyser);
                AnalysisResult::GapUp(analyser.result())
            }
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisKind::AverageVolume => write!(f, "average_volume"),
            AnalysisKind::HighLow => write!(f, "high_low"),
            AnalysisKind::MovingAverage(window) => write!(f, "moving_average({})", window),
            AnalysisKind::GapUp(delta) => write!(f, "gap_up({})", delta),
        }
    }
}

impl FromStr for AnalysisKind {
    type Err = StockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = s.trim();
        let invalid = |reason: &str| StockError::AnalysisSpec {
            spec: spec.to_string(),
            reason: reason.to_string(),
        };

        let (name, arg) = match spec.find('(') {
            Some(open) => {
                let inner = spec[open + 1..]
                    .strip_suffix(')')
                    .ok_or_else(|| invalid("missing closing parenthesis"))?;
                (spec[..open].trim(), Some(inner.trim()))
            }
            None => (spec, None),
        };

        match (name.to_ascii_lowercase().as_str(), arg) {
            ("average_volume", None) => Ok(AnalysisKind::AverageVolume),
            ("high_low", None) => Ok(AnalysisKind::HighLow),
            ("moving_average", Some(arg)) => arg
                .parse::<usize>()
                .map(AnalysisKind::MovingAverage)
                .map_err(|_| invalid("window must be a non-negative integer")),
            ("gap_up", Some(arg)) => arg
                .parse::<f64>()
                .map(AnalysisKind::GapUp)
                .map_err(|_| invalid("delta must be a number")),
            ("average_volume" | "high_low", Some(_)) => Err(invalid("takes no parameter")),
            ("moving_average", None) => Err(invalid("expected moving_average(<days>)")),
            ("gap_up", None) => Err(invalid("expected gap_up(<delta>)")),
            _ => Err(invalid("unknown analysis")),
        }
    }
}
