//! Domain error types.

/// Top-level error type for stockalyse.
///
/// `FormatMismatch` and `FileRead` abort a load. `MalformedLine` and
/// `MalformedField` are recovered by the loaders and collected into a
/// [`LoadReport`](crate::ports::record_format::LoadReport).
#[derive(Debug, thiserror::Error)]
pub enum StockError {
    #[error("{path} is not a {expected} file")]
    FormatMismatch { path: String, expected: String },

    #[error("failed to read {path}: {reason}")]
    FileRead { path: String, reason: String },

    #[error("line {line}: malformed record for {symbol}: {reason}")]
    MalformedLine {
        line: u64,
        symbol: String,
        reason: String,
    },

    #[error("line {line}: bad value {value:?} for {tag} of {symbol}")]
    MalformedField {
        line: u64,
        symbol: String,
        tag: String,
        value: String,
    },

    #[error("invalid analysis {spec:?}: {reason}")]
    AnalysisSpec { spec: String, reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("no data for {symbol}")]
    NoData { symbol: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&StockError> for std::process::ExitCode {
    fn from(err: &StockError) -> Self {
        let code: u8 = match err {
            StockError::Io(_) | StockError::FileRead { .. } => 1,
            StockError::ConfigParse { .. }
            | StockError::ConfigMissing { .. }
            | StockError::ConfigInvalid { .. } => 2,
            StockError::FormatMismatch { .. } => 3,
            StockError::AnalysisSpec { .. } => 4,
            StockError::NoData { .. } => 5,
            StockError::MalformedLine { .. } | StockError::MalformedField { .. } => 6,
        };
        std::process::ExitCode::from(code)
    }
}
