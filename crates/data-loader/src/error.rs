//! Error types for the data-loader crate.
//!
//! Every variant here means the catalog could not be built at all. Row-level
//! problems (blank titles, garbled numbers, undecodable lines) are not
//! errors: those rows are cleaned or skipped and logged.

use thiserror::Error;

/// Errors that can occur while loading the movie catalog
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// Dataset file could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the dataset
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV stream itself is unreadable (bad header, broken encoding, ...)
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Nothing usable was left after cleaning
    #[error("No usable movie rows in {source_name}")]
    EmptyCatalog { source_name: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
