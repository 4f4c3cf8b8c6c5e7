//! Error types for easycsv-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in easycsv-core
#[derive(Debug, Error)]
pub enum Error {
    /// A record's field count differs from the header's
    #[error("record {record} has {found} fields, header has {expected}")]
    LengthMismatch {
        record: usize,
        expected: usize,
        found: usize,
    },

    /// Column index outside the header
    #[error("column index {index} out of range for {columns} column(s)")]
    IndexOutOfRange { index: usize, columns: usize },

    /// No header field with the requested name
    #[error("column '{0}' not found")]
    ColumnNotFound(String),

    /// Document has no header columns to write
    #[error("document has no header columns")]
    EmptyHeader,

    /// Malformed CSV syntax the csv crate tolerates
    #[error("failed to parse CSV '{path}': {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Source contained no header line
    #[error("no header found in '{path}'")]
    MissingHeader { path: PathBuf },

    /// Failed to open a file for reading
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create or flush a file for writing
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV error from the csv crate
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Unusable dialect settings
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
