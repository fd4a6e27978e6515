// Rust guideline compliant 2026-10-19

//! Implementation of the `csvmerge merge` command.
//!
//! Runs a merge, prompting on the terminal for anything the plan leaves
//! open, or declining every prompt in batch mode.

use crate::prompt::PromptSelector;
use crate::terminal::print_warning;
use csvmerge_app::{run_merge, MergePlan, MergeSummary, Result, RunContext};
use csvmerge_core::{parse_delimiter, Config, ScriptedSelector};
use std::path::PathBuf;

/// Per-run overrides of the loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct MergeOverrides {
    /// Output directory override.
    pub output_dir: Option<PathBuf>,
    /// Delimiter override (single character or `tab`).
    pub delimiter: Option<String>,
    /// Enforce header width on every row.
    pub strict_width: bool,
}

impl MergeOverrides {
    /// Applies the overrides to `config` and re-validates it.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting configuration is invalid.
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(delimiter) = &self.delimiter {
            config.delimiter = parse_delimiter(delimiter)?;
        }
        if self.strict_width {
            config.strict_width = true;
        }
        config.validate()?;
        Ok(())
    }
}

/// Runs a merge.
///
/// # Arguments
///
/// * `ctx` - Working directory and configuration
/// * `plan` - Pre-selected files and key columns
/// * `batch` - Decline every prompt instead of asking on the terminal
///
/// # Returns
///
/// The summary of the completed run.
///
/// # Errors
///
/// Returns an error if:
/// - No candidate files are found
/// - A file or column selection is missing or invalid
/// - An input file cannot be read or has no header
/// - An output file cannot be written
pub fn execute(ctx: &RunContext, plan: &MergePlan, batch: bool) -> Result<MergeSummary> {
    if batch {
        run_merge(ctx, plan, &mut ScriptedSelector::declining())
    } else {
        run_merge(ctx, plan, &mut PromptSelector::stdio())
    }
}

/// Warns on stderr when rows were dropped from the merged output.
pub fn warn_dropped(summary: &MergeSummary, use_color: bool) {
    if !summary.failures.is_empty() {
        print_warning(
            &format!(
                "{} row(s) could not be merged and were left out of {}",
                summary.failures.len(),
                summary.output_path.display()
            ),
            use_color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply_to_config() {
        let mut config = Config::default();
        let overrides = MergeOverrides {
            output_dir: Some(PathBuf::from("out")),
            delimiter: Some("tab".to_string()),
            strict_width: true,
        };
        overrides.apply(&mut config).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.delimiter, '\t');
        assert!(config.strict_width);
    }

    #[test]
    fn test_empty_overrides_keep_config() {
        let mut config = Config::default();
        MergeOverrides::default().apply(&mut config).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_delimiter_override() {
        let mut config = Config::default();
        let overrides = MergeOverrides {
            delimiter: Some("\"".to_string()),
            ..MergeOverrides::default()
        };
        assert!(overrides.apply(&mut config).is_err());
    }
}
