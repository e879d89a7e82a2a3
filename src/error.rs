//! Typed failures raised by the matching core and the table loader.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchError {
    /// The input table has fewer than the two columns the comparison needs.
    #[error("the spreadsheet must contain at least two columns of data (found {found})")]
    InsufficientColumns { found: usize },

    /// The loader does not understand this file type.
    #[error("unsupported file format '{extension}' for {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// A cell could not be turned into a token. Indicates a defect, not bad input.
    #[error("cannot canonicalize cell: {detail}")]
    Canonicalization { detail: String },

    /// Columns of one table disagree on their row count.
    #[error("column '{column}' has {found} row(s), expected {expected}")]
    RaggedTable {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("row {row} has {found} field(s) but the header declares {expected}")]
    RowTooWide {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("failed to decode text with encoding {encoding}")]
    Decode { encoding: &'static str },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse delimited input: {0}")]
    Csv(#[from] csv::Error),
}
