//! Plain-text report adapter: one line per analysis.

use crate::domain::analyser::{AnalysisKind, AnalysisResult};
use crate::domain::error::StockError;
use crate::ports::report_port::ReportPort;
use std::io::Write;

pub struct TextReportAdapter<W: Write> {
    out: W,
}

impl<W: Write> TextReportAdapter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportPort for TextReportAdapter<W> {
    fn report(
        &mut self,
        symbol: &str,
        kind: &AnalysisKind,
        result: &AnalysisResult,
    ) -> Result<(), StockError> {
        writeln!(self.out, "{}", render_line(symbol, kind, result))?;
        Ok(())
    }
}

pub fn render_line(symbol: &str, kind: &AnalysisKind, result: &AnalysisResult) -> String {
    match (kind, result) {
        (_, AnalysisResult::AverageVolume(avg)) => {
            format!("Average volume of {} is {:.2}", symbol, avg)
        }
        (_, AnalysisResult::HighLow { highest, lowest }) => format!(
            "Highest & lowest trading price of {} is ({}, {})",
            symbol, highest, lowest
        ),
        (AnalysisKind::MovingAverage(window), AnalysisResult::MovingAverage(avg)) => format!(
            "Moving average of {} over last {} days is {:.2}",
            symbol, window, avg
        ),
        (_, AnalysisResult::GapUp(Some(record))) => {
            format!("Last gap up date of {} is {}", symbol, record.date)
        }
        (AnalysisKind::GapUp(delta), AnalysisResult::GapUp(None)) => {
            format!("No gap up found for {} with delta {}", symbol, delta)
        }
        (kind, result) => format!("{} of {}: {:?}", kind, symbol, result),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Record;

    #[test]
    fn renders_each_kind() {
        assert_eq!(
            render_line(
                "ADV",
                &AnalysisKind::AverageVolume,
                &AnalysisResult::AverageVolume(12345.678)
            ),
            "Average volume of ADV is 12345.68"
        );
        assert_eq!(
            render_line(
                "ADV",
                &AnalysisKind::HighLow,
                &AnalysisResult::HighLow {
                    highest: 12.5,
                    lowest: 3.1
                }
            ),
            "Highest & lowest trading price of ADV is (12.5, 3.1)"
        );
        assert_eq!(
            render_line(
                "ADV",
                &AnalysisKind::MovingAverage(10),
                &AnalysisResult::MovingAverage(1.2)
            ),
            "Moving average of ADV over last 10 days is 1.20"
        );
        assert_eq!(
            render_line(
                "YOW",
                &AnalysisKind::GapUp(0.011),
                &AnalysisResult::GapUp(Some(Record::new("20170203", 1.0, 1.0, 1.0, 1.0, 1)))
            ),
            "Last gap up date of YOW is 20170203"
        );
        assert_eq!(
            render_line("YOW", &AnalysisKind::GapUp(0.011), &AnalysisResult::GapUp(None)),
            "No gap up found for YOW with delta 0.011"
        );
    }

    #[test]
    fn writes_one_line_per_report() {
        let mut adapter = TextReportAdapter::new(Vec::new());
        adapter
            .report("A", &AnalysisKind::AverageVolume, &AnalysisResult::AverageVolume(1.0))
            .unwrap();
        adapter
            .report("B", &AnalysisKind::AverageVolume, &AnalysisResult::AverageVolume(2.0))
            .unwrap();

        let text = String::from_utf8(adapter.into_inner()).unwrap();
        assert_eq!(
            text,
            "Average volume of A is 1.00\nAverage volume of B is 2.00\n"
        );
    }
}
