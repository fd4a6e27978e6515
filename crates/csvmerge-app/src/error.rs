// Rust guideline compliant 2026-10-19

//! Error handling for csvmerge application services.

use csvmerge_core::Error as CoreError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for JSON responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// No candidate input files were found.
    DiscoveryError,
    /// A file or column selection was invalid or missing.
    SelectionError,
    /// An input table is structurally unusable.
    FormatError,
    /// IO failure while reading or writing files.
    IoError,
    /// Delimited-text parsing or writing failed.
    CsvError,
    /// The configuration is invalid.
    ConfigError,
    /// The working directory does not exist.
    WorkdirNotFound,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Working directory is missing.
    #[error("Working directory not found: {}", path.display())]
    WorkdirNotFound {
        /// Directory that was expected to exist.
        path: PathBuf,
    },

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::WorkdirNotFound { .. } => ErrorCode::WorkdirNotFound,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Csv(_) => ErrorCode::CsvError,
                CoreError::Discovery(_) => ErrorCode::DiscoveryError,
                CoreError::Selection(_) => ErrorCode::SelectionError,
                CoreError::Format(_) | CoreError::RowProcessing { .. } => ErrorCode::FormatError,
                CoreError::Config(_) => ErrorCode::ConfigError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::WorkdirNotFound { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::Io(_) => None,
            AppError::Core(_) => None,
        }
    }
}
