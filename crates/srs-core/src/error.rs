//! Error types for srs-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in srs-core
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read a report file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// More sections than the I / IA / II labels can describe
    #[error("found {found} sections, at most 3 (I, IA, II) are supported")]
    UnsupportedSectionCount { found: usize },

    /// Hemisphere letter in a location cell is not N/S or W/E
    #[error("invalid hemisphere '{letter}' in location '{value}' at row {row}")]
    InvalidHemisphere {
        row: usize,
        value: String,
        letter: char,
    },

    /// Location cell is too short or its magnitudes are not numeric
    #[error("malformed location '{value}' at row {row}")]
    InvalidCoordinate { row: usize, value: String },

    /// A column required by an operation is not in the table
    #[error("column '{0}' not found")]
    MissingColumn(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
