//! Row decoding and numeric field conversion shared by the source formats.

use crate::domain::error::StockError;

/// Reader setup common to both formats. Quotes carry no meaning and
/// whitespace is significant outside numeric tokens.
pub fn reader_builder(delimiter: u8) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .quoting(false);
    builder
}

/// Decode a raw row as UTF-8. A row that is not valid UTF-8 becomes a
/// `MalformedLine` carrying its symbol as far as it can be read.
pub fn decode_row(row: csv::ByteRecord) -> Result<csv::StringRecord, StockError> {
    let line = row.position().map_or(0, csv::Position::line);
    csv::StringRecord::from_byte_record(row).map_err(|e| {
        let reason = format!("not valid UTF-8: {}", e.utf8_error());
        let row = e.into_byte_record();
        StockError::MalformedLine {
            line,
            symbol: row
                .get(0)
                .map(|field| String::from_utf8_lossy(field).into_owned())
                .unwrap_or_default(),
            reason,
        }
    })
}

/// Parse a price token. Surrounding whitespace is ignored; non-finite
/// values are rejected.
pub fn parse_price(token: &str) -> Result<f64, String> {
    match token.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(_) => Err(format!("{token:?} is not a finite price")),
        Err(e) => Err(format!("{token:?}: {e}")),
    }
}

pub fn parse_volume(token: &str) -> Result<u64, String> {
    token.trim().parse::<u64>().map_err(|e| format!("{token:?}: {e}"))
}

/// 1-based line of a parsed row, or 0 when the reader did not track it.
pub fn row_line(row: &csv::StringRecord) -> u64 {
    row.position().map_or(0, csv::Position::line)
}
