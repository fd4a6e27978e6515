// Rust guideline compliant 2026-10-19

//! Output formatting module for the csvmerge CLI.
//!
//! This module renders run summaries, candidate listings, and errors either
//! as JSON envelopes or as human-readable tables.

use csvmerge_app::{candidate_label, AppError, ErrorEnvelope, MergeSummary, SuccessEnvelope};
use csvmerge_core::OutputFormat;
use serde_json::json;
use std::io::Write;
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Output formatter trait.
///
/// Defines the interface for rendering command results.
pub trait OutputFormatter {
    /// Formats the summary of a completed merge.
    fn format_summary(&self, summary: &MergeSummary) -> String;

    /// Formats the list of candidate input files.
    fn format_candidates(&self, candidates: &[PathBuf]) -> String;

    /// Formats an error for display.
    fn format_error(&self, error: &AppError) -> String;
}

/// JSON output formatter.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_summary(&self, summary: &MergeSummary) -> String {
        serde_json::to_string_pretty(&SuccessEnvelope::new(summary))
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize summary" }).to_string())
    }

    fn format_candidates(&self, candidates: &[PathBuf]) -> String {
        let output = SuccessEnvelope::new(json!({
            "files": candidates,
            "total": candidates.len(),
        }));
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize file list" }).to_string())
    }

    fn format_error(&self, error: &AppError) -> String {
        serde_json::to_string(&ErrorEnvelope::from_error(error))
            .unwrap_or_else(|_| json!({ "error": error.to_string() }).to_string())
    }
}

/// Table output formatter.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_summary(&self, summary: &MergeSummary) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Data merged successfully into {}.\n",
            summary.output_path.display()
        ));
        output.push_str(&format!(
            "Unmatched rows saved to {}.\n",
            summary.unmatched_path.display()
        ));
        output.push_str(&format!(
            "Keys: {} ({}) = {} ({})\n\n",
            summary.first_key.name,
            candidate_label(&summary.first_file),
            summary.second_key.name,
            candidate_label(&summary.second_file)
        ));

        let stats = &summary.stats;
        let mut builder = Builder::default();
        builder.push_record(["Outcome", "Rows"]);
        for (label, count) in [
            ("matched", stats.matched),
            ("no match", stats.no_match),
            ("ambiguous (skipped)", stats.ambiguous),
            ("disambiguated", stats.disambiguated),
            ("declined", stats.declined),
            ("dropped", stats.failed),
            ("unmatched (second file)", summary.unmatched_rows),
        ] {
            builder.push_record([label.to_string(), count.to_string()]);
        }
        let mut table = builder.build();
        table.with(Style::modern());
        output.push_str(&table.to_string());

        if !summary.failures.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(["Row", "Reason", "Fields"]);
            for failure in &summary.failures {
                builder.push_record([
                    failure.row.to_string(),
                    failure.reason.clone(),
                    failure.fields.fields().join(", "),
                ]);
            }
            let mut table = builder.build();
            table.with(Style::modern());
            output.push_str("\n\nDropped rows:\n");
            output.push_str(&table.to_string());
        }

        output
    }

    fn format_candidates(&self, candidates: &[PathBuf]) -> String {
        if candidates.is_empty() {
            return "No candidate files found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "File"]);
        for (i, path) in candidates.iter().enumerate() {
            builder.push_record([(i + 1).to_string(), candidate_label(path)]);
        }
        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_error(&self, error: &AppError) -> String {
        if self.use_color {
            let mut buffer = Buffer::ansi();
            let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
            let _ = write!(buffer, "Error:");
            let _ = buffer.reset();
            let _ = write!(buffer, " {}", error);
            String::from_utf8_lossy(buffer.as_slice()).into_owned()
        } else {
            format!("Error: {}", error)
        }
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
/// * `use_color` - Whether to use colored output (ignored for JSON)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: OutputFormat, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter::new(use_color)),
    }
}
