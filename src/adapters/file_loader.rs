//! File lifecycle around a [`RecordFormat`].

use crate::adapters::csv_format::CsvFormat;
use crate::adapters::triplet_format::TripletFormat;
use crate::domain::collection::StockCollection;
use crate::domain::error::StockError;
use crate::domain::source_format::SourceFormat;
use crate::ports::record_format::{LoadReport, RecordFormat};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Opens a source file and hands it to its format.
///
/// The file name must contain the format's marker; this is checked before
/// the file is opened. The handle lives only for the duration of `load`.
pub struct FileLoader<F: RecordFormat> {
    format: F,
}

impl<F: RecordFormat> FileLoader<F> {
    pub fn new(format: F) -> Self {
        Self { format }
    }

    pub fn load(
        &mut self,
        path: &Path,
        collection: &mut StockCollection,
    ) -> Result<LoadReport, StockError> {
        let source = path.display().to_string();
        if !source.contains(self.format.marker()) {
            return Err(StockError::FormatMismatch {
                path: source,
                expected: self.format.name().to_string(),
            });
        }

        let file = File::open(path).map_err(|e| StockError::FileRead {
            path: source.clone(),
            reason: e.to_string(),
        })?;
        let mut reader = BufReader::new(file);

        let mut report = LoadReport::new(source, self.format.name());
        self.format.process(&mut reader, collection, &mut report)?;

        log::info!(
            "loaded {} records from {} ({} rejected)",
            report.appended,
            report.source,
            report.issues.len()
        );
        Ok(report)
    }
}

/// Load `path` as `format`.
pub fn load_as(
    format: SourceFormat,
    path: &Path,
    collection: &mut StockCollection,
) -> Result<LoadReport, StockError> {
    match format {
        SourceFormat::Csv => FileLoader::new(CsvFormat::new()).load(path, collection),
        SourceFormat::Triplet => FileLoader::new(TripletFormat::new()).load(path, collection),
    }
}

/// Load `path` with the format its name selects.
pub fn load_source(path: &Path, collection: &mut StockCollection) -> Result<LoadReport, StockError> {
    let format = SourceFormat::from_path(path).ok_or_else(|| StockError::FormatMismatch {
        path: path.display().to_string(),
        expected: "csv or trp".to_string(),
    })?;
    load_as(format, path, collection)
}
