// Rust guideline compliant 2026-10-19

//! JSON envelopes wrapping csvmerge results and failures.
//!
//! A run summary or file listing is emitted as `{"status": "ok", "result": ...}`
//! on stdout; a failed run as `{"status": "error", "code": ..., "message": ...}`
//! on stderr.

use crate::error::{AppError, ErrorCode};
use serde::Serialize;

/// Envelope around a successful command result.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<T> {
    /// Always `"ok"`.
    pub status: &'static str,
    /// A merge summary or a candidate file listing.
    pub result: T,
}

impl<T> SuccessEnvelope<T> {
    /// Wraps `result` with an `"ok"` status.
    #[must_use]
    pub fn new(result: T) -> Self {
        Self { status: "ok", result }
    }
}

/// Envelope describing why a run could not complete.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Always `"error"`.
    pub status: &'static str,
    /// Stable code such as `discovery_error` or `selection_error`.
    pub code: ErrorCode,
    /// The error's display text.
    pub message: String,
    /// Extra context, such as the missing working directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Builds the envelope for a failed run.
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        Self {
            status: "error",
            code: error.code(),
            message: error.to_string(),
            details: error.details(),
        }
    }
}
