//! Source file kinds, identified by a marker in the file name.

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Triplet,
}

impl SourceFormat {
    pub const ALL: [SourceFormat; 2] = [SourceFormat::Csv, SourceFormat::Triplet];

    pub fn name(self) -> &'static str {
        match self {
            SourceFormat::Csv => "csv",
            SourceFormat::Triplet => "trp",
        }
    }

    /// Text a file name must contain, anywhere, to be read as this format.
    pub fn marker(self) -> &'static str {
        match self {
            SourceFormat::Csv => ".csv",
            SourceFormat::Triplet => ".trp",
        }
    }

    /// The first format whose marker appears in `path`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.to_string_lossy();
        Self::ALL
            .into_iter()
            .find(|format| name.contains(format.marker()))
    }
}
