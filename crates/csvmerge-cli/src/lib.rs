// Rust guideline compliant 2026-10-19

//! csvmerge CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod terminal;

pub use output::{create_formatter, OutputFormatter};
pub use prompt::PromptSelector;
pub use terminal::should_use_color;
