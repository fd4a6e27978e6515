// Rust guideline compliant 2026-10-19

//! End-to-end merge run: select inputs, join, and write both outputs.
//!
//! Inputs and key columns can be fixed up front through a [`MergePlan`];
//! anything left open is asked through the [`Selector`]. Nothing is written
//! until the whole first table has been processed, and a run that fails
//! while writing leaves no output file behind.

use crate::context::RunContext;
use crate::discovery::candidate_label;
use crate::error::Result;
use crate::time::{now_local, output_file_name, run_stamp, unmatched_file_name};
use chrono::NaiveDateTime;
use csvmerge_core::{
    collect_unmatched, read_table, write_table, Error as CoreError, GroupIndex, JoinEngine,
    JoinStats, Row, RowFailure, SelectionKind, SelectionRequest, SelectionResult, Selector, Table,
    TableOptions,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Choices fixed before the run starts.
#[derive(Debug, Clone, Default)]
pub struct MergePlan {
    /// First input file; selected interactively when absent.
    pub first: Option<PathBuf>,
    /// Second input file; selected interactively when absent.
    pub second: Option<PathBuf>,
    /// First key column, by name or 1-based number.
    pub first_key: Option<String>,
    /// Second key column, by name or 1-based number.
    pub second_key: Option<String>,
}

/// A resolved key column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyColumn {
    /// 0-based column index.
    pub index: usize,
    /// Header name of the column.
    pub name: String,
}

/// Outcome of a completed merge run.
#[derive(Debug, Clone, Serialize)]
pub struct MergeSummary {
    /// First input file.
    pub first_file: PathBuf,
    /// Second input file.
    pub second_file: PathBuf,
    /// Key column of the first file.
    pub first_key: KeyColumn,
    /// Key column of the second file.
    pub second_key: KeyColumn,
    /// Path of the merged output file.
    pub output_path: PathBuf,
    /// Path of the unmatched-rows file.
    pub unmatched_path: PathBuf,
    /// Rows written to the merged output.
    pub merged_rows: usize,
    /// Rows written to the unmatched file.
    pub unmatched_rows: usize,
    /// Per-outcome row counts.
    pub stats: JoinStats,
    /// First-table rows dropped from the output.
    pub failures: Vec<RowFailure>,
}

/// Runs a merge stamped with the current local time.
///
/// # Errors
///
/// See [`run_merge_at`].
pub fn run_merge<S: Selector + ?Sized>(
    ctx: &RunContext,
    plan: &MergePlan,
    selector: &mut S,
) -> Result<MergeSummary> {
    run_merge_at(ctx, plan, selector, now_local())
}

/// Runs a merge whose output names use the given timestamp.
///
/// # Arguments
///
/// * `ctx` - Working directory and configuration
/// * `plan` - Pre-selected files and key columns
/// * `selector` - Answers every choice the plan leaves open
/// * `at` - Timestamp embedded in the output file names
///
/// # Returns
///
/// A summary of the written outputs and the join report.
///
/// # Errors
///
/// Returns an error if:
/// - No candidate files exist when a file must be selected
/// - A file or column selection is missing or invalid
/// - An input file cannot be read or has no header
/// - A second-table row is too short for its key column
/// - An output file cannot be written
pub fn run_merge_at<S: Selector + ?Sized>(
    ctx: &RunContext,
    plan: &MergePlan,
    selector: &mut S,
    at: NaiveDateTime,
) -> Result<MergeSummary> {
    let mut candidates: Option<Vec<PathBuf>> = None;

    let first_file = match &plan.first {
        Some(path) => ctx.resolve_input(path),
        None => choose_file(
            "Choose the first CSV file",
            candidate_list(ctx, &mut candidates)?,
            selector,
        )?,
    };
    let second_file = match &plan.second {
        Some(path) => ctx.resolve_input(path),
        None => choose_file(
            "Choose the second CSV file",
            candidate_list(ctx, &mut candidates)?,
            selector,
        )?,
    };

    let options = ctx.config().table_options();
    let first = read_table(&first_file, &options)?;
    let second = read_table(&second_file, &options)?;

    let first_key = choose_column(&first, &first_file, plan.first_key.as_deref(), selector)?;
    let second_key = choose_column(&second, &second_file, plan.second_key.as_deref(), selector)?;
    info!(
        first = %first_file.display(),
        second = %second_file.display(),
        first_key = %first_key.name,
        second_key = %second_key.name,
        "starting merge"
    );

    let index = GroupIndex::build(&second, second_key.index)?;
    let report = JoinEngine::new(&index, first_key.index).run(&first, selector);
    let unmatched = collect_unmatched(&index, &report.rows, first_key.index);

    let mut header = first.header.clone();
    header.extend(second.header.iter().cloned());

    let output_dir = ctx.output_dir();
    std::fs::create_dir_all(&output_dir)?;
    let stamp = run_stamp(at);
    let output_path = output_dir.join(output_file_name(&stamp));
    let unmatched_path = output_dir.join(unmatched_file_name(&stamp));

    write_outputs(
        [
            (output_path.as_path(), header.as_slice(), report.rows.as_slice()),
            (
                unmatched_path.as_path(),
                second.header.as_slice(),
                unmatched.as_slice(),
            ),
        ],
        &options,
    )?;
    info!(
        output = %output_path.display(),
        unmatched = %unmatched_path.display(),
        merged_rows = report.rows.len(),
        unmatched_rows = unmatched.len(),
        dropped_rows = report.failures.len(),
        "merge complete"
    );

    Ok(MergeSummary {
        first_file,
        second_file,
        first_key,
        second_key,
        output_path,
        unmatched_path,
        merged_rows: report.rows.len(),
        unmatched_rows: unmatched.len(),
        stats: report.stats,
        failures: report.failures,
    })
}

/// Writes every output table, or none of them.
///
/// Each table goes to a `.tmp` sibling first. The temporaries are renamed
/// into place only after all writes succeed, and anything already placed
/// is removed again if a later rename fails.
fn write_outputs(
    outputs: [(&Path, &[String], &[Row]); 2],
    options: &TableOptions,
) -> Result<()> {
    let temps: Vec<PathBuf> = outputs
        .iter()
        .map(|(path, _, _)| path.with_extension("csv.tmp"))
        .collect();

    let written = outputs
        .iter()
        .zip(&temps)
        .try_for_each(|((_, header, rows), temp)| write_table(temp, header, rows, options));
    if let Err(err) = written {
        remove_files(&temps);
        return Err(err.into());
    }

    let mut placed: Vec<PathBuf> = Vec::new();
    for ((path, _, _), temp) in outputs.iter().zip(&temps) {
        if let Err(err) = std::fs::rename(temp, path) {
            warn!(path = %path.display(), error = %err, "removing partial output");
            remove_files(&temps);
            remove_files(&placed);
            return Err(err.into());
        }
        placed.push(path.to_path_buf());
    }
    Ok(())
}

fn remove_files(paths: &[PathBuf]) {
    for path in paths {
        let _ = std::fs::remove_file(path);
    }
}

fn candidate_list<'a>(
    ctx: &RunContext,
    cache: &'a mut Option<Vec<PathBuf>>,
) -> Result<&'a [PathBuf]> {
    if cache.is_none() {
        let found = ctx.candidates()?;
        if found.is_empty() {
            return Err(CoreError::Discovery(format!(
                "no .{} files in {}",
                ctx.config().extension(),
                ctx.workdir().display()
            ))
            .into());
        }
        *cache = Some(found);
    }
    Ok(cache.as_deref().unwrap_or_default())
}

fn choose_file<S: Selector + ?Sized>(
    prompt: &str,
    candidates: &[PathBuf],
    selector: &mut S,
) -> Result<PathBuf> {
    let labels: Vec<String> = candidates.iter().map(|p| candidate_label(p)).collect();
    let request = SelectionRequest {
        kind: SelectionKind::File,
        prompt,
        options: &labels,
    };
    let index = resolve_selection(selector.select(&request), labels.len(), "file")?;
    Ok(candidates[index].clone())
}

fn choose_column<S: Selector + ?Sized>(
    table: &Table,
    path: &Path,
    preset: Option<&str>,
    selector: &mut S,
) -> Result<KeyColumn> {
    let index = match preset {
        Some(reference) => table.column_index(reference).ok_or_else(|| {
            CoreError::Selection(format!(
                "column '{}' not found in {}",
                reference,
                path.display()
            ))
        })?,
        None => {
            let prompt = format!(
                "Choose the primary key column in {} based on these headers:",
                candidate_label(path)
            );
            let request = SelectionRequest {
                kind: SelectionKind::Column,
                prompt: &prompt,
                options: &table.header,
            };
            resolve_selection(selector.select(&request), table.width(), "column")?
        }
    };
    Ok(KeyColumn {
        index,
        name: table.header[index].clone(),
    })
}

fn resolve_selection(result: SelectionResult, option_count: usize, what: &str) -> Result<usize> {
    match result.bounded(option_count) {
        SelectionResult::Selected(index) => Ok(index),
        SelectionResult::NoSelection => {
            Err(CoreError::Selection(format!("no {} selected", what)).into())
        }
        SelectionResult::Invalid(reason) => Err(CoreError::Selection(reason).into()),
    }
}
