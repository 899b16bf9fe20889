//! Fixed-field CSV format: `symbol,date,open,high,low,close,volume`.

use crate::adapters::field_parse::{decode_row, parse_price, parse_volume, reader_builder, row_line};
use crate::domain::collection::StockCollection;
use crate::domain::error::StockError;
use crate::domain::record::Record;
use crate::domain::source_format::SourceFormat;
use crate::ports::record_format::{LoadReport, RecordFormat};
use std::io::Read;

const FIELDS: usize = 7;

#[derive(Debug, Default)]
pub struct CsvFormat;

impl CsvFormat {
    pub fn new() -> Self {
        Self
    }

    fn parse_row(row: &csv::StringRecord) -> Result<(String, Record), StockError> {
        let line = row_line(row);
        let symbol = row.get(0).unwrap_or_default().to_string();

        if row.len() != FIELDS {
            return Err(StockError::MalformedLine {
                line,
                symbol,
                reason: format!("expected {} fields, found {}", FIELDS, row.len()),
            });
        }

        let malformed = |field: &str, reason: String| StockError::MalformedLine {
            line,
            symbol: symbol.clone(),
            reason: format!("invalid {} value {}", field, reason),
        };

        let open = parse_price(&row[2]).map_err(|r| malformed("open", r))?;
        let high = parse_price(&row[3]).map_err(|r| malformed("high", r))?;
        let low = parse_price(&row[4]).map_err(|r| malformed("low", r))?;
        let close = parse_price(&row[5]).map_err(|r| malformed("close", r))?;
        let volume = parse_volume(&row[6]).map_err(|r| malformed("volume", r))?;

        let record = Record::new(&row[1], open, high, low, close, volume);
        Ok((symbol, record))
    }
}

impl RecordFormat for CsvFormat {
    fn name(&self) -> &'static str {
        SourceFormat::Csv.name()
    }

    fn marker(&self) -> &'static str {
        SourceFormat::Csv.marker()
    }

    fn process(
        &mut self,
        reader: &mut dyn Read,
        collection: &mut StockCollection,
        report: &mut LoadReport,
    ) -> Result<(), StockError> {
        let mut rdr = reader_builder(b',').from_reader(reader);

        // Raw rows only fail on I/O; decoding happens per row below.
        for result in rdr.byte_records() {
            let raw = result.map_err(|e| StockError::FileRead {
                path: report.source.clone(),
                reason: e.to_string(),
            })?;

            match decode_row(raw).and_then(|row| Self::parse_row(&row)) {
                Ok((symbol, record)) => {
                    collection.get_or_create(&symbol).append(record);
                    report.appended += 1;
                }
                Err(issue) => report.reject(issue),
            }
        }

        Ok(())
    }
}
