// Rust guideline compliant 2026-10-19

//! csvmerge Core Library
//!
//! This crate provides the foundational components for merging two delimited
//! tables on a key column:
//! - Data models (Row, Table)
//! - Table reading and writing
//! - Key normalization and the second-table group index
//! - The join engine and its per-row failure report
//! - Unmatched-row collection
//! - The pluggable selection capability
//! - Configuration and error types

pub mod config;
pub mod error;
pub mod index;
pub mod join;
pub mod key;
pub mod models;
pub mod selector;
pub mod table_io;
pub mod unmatched;

pub use config::{parse_delimiter, Config, OutputFormat, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use index::GroupIndex;
pub use join::{join_tables, JoinEngine, JoinReport, JoinStats, MatchOutcome, RowFailure};
pub use key::normalize_key;
pub use models::{Row, Table};
pub use selector::{ScriptedSelector, SelectionKind, SelectionRequest, SelectionResult, Selector};
pub use table_io::{read_table, write_table, TableOptions};
pub use unmatched::collect_unmatched;
