// Rust guideline compliant 2026-10-19

//! Command implementations for the csvmerge CLI.

pub mod files;
pub mod merge;
