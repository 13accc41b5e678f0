use thiserror::Error;

#[derive(Error, Debug)]
pub enum UiError {
    #[error("column {column} out of range for row {row} ({width} cells)")]
    ColumnIndexOutOfRange {
        row: usize,
        column: usize,
        width: usize,
    },

    #[error("CSV export error: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("storage format error: {0}")]
    StorageFormatError(String),

    #[error("invalid shortcut '{combo}': {reason}")]
    InvalidShortcut { combo: String, reason: String },

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("HTTP transport error: {source}")]
    HttpError {
        #[from]
        source: reqwest::Error,
    },

    // Catch-all for anyhow errors when direct conversion is suitable
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
