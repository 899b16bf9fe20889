//! Incremental triplet format: one `symbol:tag:value` assignment per line.
//!
//! Six assignments (DA, OP, HI, LO, CL, VO) make up one record. The
//! in-progress record is held in a [`RecordBuilder`]; its filled-field count
//! is the parser state. A record is appended as soon as every field is set,
//! and any bad value throws away the whole record in progress.

use crate::adapters::field_parse::{decode_row, parse_price, parse_volume, reader_builder, row_line};
use crate::domain::collection::StockCollection;
use crate::domain::error::StockError;
use crate::domain::record::RecordBuilder;
use crate::domain::source_format::SourceFormat;
use crate::ports::record_format::{LoadReport, RecordFormat};
use std::io::Read;

const FIELDS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTag {
    Date,
    Open,
    High,
    Low,
    Close,
    Volume,
}

impl FieldTag {
    /// Tags are case-sensitive; anything else is `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "DA" => Some(FieldTag::Date),
            "OP" => Some(FieldTag::Open),
            "HI" => Some(FieldTag::High),
            "LO" => Some(FieldTag::Low),
            "CL" => Some(FieldTag::Close),
            "VO" => Some(FieldTag::Volume),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            FieldTag::Date => "DA",
            FieldTag::Open => "OP",
            FieldTag::High => "HI",
            FieldTag::Low => "LO",
            FieldTag::Close => "CL",
            FieldTag::Volume => "VO",
        }
    }
}

#[derive(Debug, Default)]
pub struct TripletFormat {
    pending: RecordBuilder,
}

impl TripletFormat {
    pub fn new() -> Self {
        Self::default()
    }

    fn assign(&mut self, field: FieldTag, value: &str) -> Result<(), String> {
        match field {
            FieldTag::Date => self.pending.set_date(value),
            FieldTag::Open => self.pending.set_open(parse_price(value)?),
            FieldTag::High => self.pending.set_high(parse_price(value)?),
            FieldTag::Low => self.pending.set_low(parse_price(value)?),
            FieldTag::Close => self.pending.set_close(parse_price(value)?),
            FieldTag::Volume => self.pending.set_volume(parse_volume(value)?),
        }
        Ok(())
    }

    fn discard_pending(&mut self) {
        if !self.pending.is_empty() {
            log::debug!(
                "discarding partial record with {} of {} fields",
                self.pending.filled(),
                RecordBuilder::FIELD_COUNT
            );
        }
        self.pending.clear();
    }
}

impl RecordFormat for TripletFormat {
    fn name(&self) -> &'static str {
        SourceFormat::Triplet.name()
    }

    fn marker(&self) -> &'static str {
        SourceFormat::Triplet.marker()
    }

    fn process(
        &mut self,
        reader: &mut dyn Read,
        collection: &mut StockCollection,
        report: &mut LoadReport,
    ) -> Result<(), StockError> {
        let mut rdr = reader_builder(b':').from_reader(reader);

        for result in rdr.byte_records() {
            let raw = match result {
                Ok(raw) => raw,
                Err(e) => {
                    self.pending.clear();
                    return Err(StockError::FileRead {
                        path: report.source.clone(),
                        reason: e.to_string(),
                    });
                }
            };
            let row = match decode_row(raw) {
                Ok(row) => row,
                Err(issue) => {
                    report.reject(issue);
                    self.discard_pending();
                    continue;
                }
            };
            let line = row_line(&row);

            if row.len() != FIELDS {
                report.reject(StockError::MalformedLine {
                    line,
                    symbol: row.get(0).unwrap_or_default().to_string(),
                    reason: format!("expected {} fields, found {}", FIELDS, row.len()),
                });
                self.discard_pending();
                continue;
            }

            let (symbol, tag, value) = (&row[0], &row[1], &row[2]);
            let Some(field) = FieldTag::from_tag(tag) else {
                continue;
            };

            if self.assign(field, value).is_err() {
                report.reject(StockError::MalformedField {
                    line,
                    symbol: symbol.to_string(),
                    tag: field.tag().to_string(),
                    value: value.to_string(),
                });
                self.discard_pending();
                continue;
            }

            if !self.pending.is_complete() {
                continue;
            }
            if let Some(record) = self.pending.build() {
                collection.get_or_create(symbol).append(record);
                report.appended += 1;
            }
            self.pending.clear();
        }

        self.discard_pending();
        Ok(())
    }
}
