// Rust guideline compliant 2026-10-19

//! Shared application services for csvmerge.
//!
//! This crate wires the core join into a complete run: working directory
//! and configuration resolution, candidate discovery, file and column
//! selection, output naming, and standardized response envelopes.

pub mod context;
pub mod discovery;
pub mod error;
pub mod response;
pub mod run;
pub mod time;

pub use context::RunContext;
pub use discovery::{candidate_label, discover_candidates};
pub use error::{AppError, ErrorCode, Result};
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use run::{run_merge, run_merge_at, KeyColumn, MergePlan, MergeSummary};
pub use time::{output_file_name, run_stamp, unmatched_file_name};
