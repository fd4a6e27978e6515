// Rust guideline compliant 2026-10-19

//! Error types for the csvmerge core library.

use thiserror::Error;

/// Result type alias for csvmerge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for csvmerge operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited-text parse or write error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// No candidate input files were found.
    #[error("No candidate files found: {0}")]
    Discovery(String),

    /// A file or column selection was invalid or missing.
    #[error("Invalid selection: {0}")]
    Selection(String),

    /// A table is structurally unusable.
    #[error("Format error: {0}")]
    Format(String),

    /// A single row could not be merged.
    #[error("Row {row}: {reason}")]
    RowProcessing {
        /// 1-based data row number within the first table.
        row: usize,
        /// Human-readable failure reason.
        reason: String,
    },

    /// Invalid configuration value.
    #[error("Invalid config: {0}")]
    Config(String),
}
