//! Error types for ouidb.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for ouidb operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Error reading an input source
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// Error answering a lookup query
    #[error("query error: {0}")]
    Query(#[from] QueryError),

    /// Error writing the SQLite artifact
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to input source files.
#[derive(Error, Debug)]
pub enum SourceError {
    /// A required source file is missing
    #[error("required source file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// A source file exists but could not be read
    #[error("failed to read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The historical-date source is not valid JSON
    #[error("invalid history JSON: {0}")]
    InvalidHistory(#[from] serde_json::Error),
}

/// Errors related to lookup queries.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The query string does not contain enough hex digits to form a key.
    ///
    /// Distinct from an unknown-vendor result: the input could not even be
    /// reduced to a 24-bit prefix.
    #[error("invalid MAC address: {input:?}")]
    InvalidMac { input: String },

    /// The lookup database artifact is missing
    #[error("database not found: {path} (run `ouidb build` first)")]
    DatabaseNotFound { path: PathBuf },

    /// The lookup database artifact could not be parsed
    #[error("failed to parse database: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
