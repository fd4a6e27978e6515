// Rust guideline compliant 2026-10-19

//! Key-based join of the first table against the second table's group index.
//!
//! Candidate detection compares normalized keys, but the group that is
//! actually merged is fetched by the first row's raw key. A raw key that is
//! only normalized-equal to an indexed key therefore fails for that row.
//! When a raw group holds several rows and the key is non-empty, the row is
//! passed through without a match and without asking. Only the empty key
//! is disambiguated through the [`Selector`].

use crate::index::GroupIndex;
use crate::selector::{SelectionKind, SelectionRequest, SelectionResult, Selector};
use crate::{Error, Result, Row, Table};
use serde::Serialize;
use tracing::{debug, warn};

/// How a single first-table row was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    /// Exactly one second-table row was merged.
    Matched,
    /// No normalized-equal key exists; the row passed through.
    NoMatch,
    /// Several rows share a non-empty key; the row passed through.
    Ambiguous,
    /// An empty-key candidate was chosen through the selector.
    Disambiguated,
    /// The selector declined; the row passed through.
    Declined,
}

/// A first-table row dropped from the merged output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowFailure {
    /// 1-based data row number within the first table.
    pub row: usize,
    /// The dropped row as read.
    pub fields: Row,
    /// Why the row could not be merged.
    pub reason: String,
}

/// Per-outcome row counts for a join.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct JoinStats {
    /// Rows merged with a single match.
    pub matched: usize,
    /// Rows with no candidate key.
    pub no_match: usize,
    /// Rows skipped because their non-empty key was ambiguous.
    pub ambiguous: usize,
    /// Empty-key rows merged with a selected candidate.
    pub disambiguated: usize,
    /// Empty-key rows where no candidate was selected.
    pub declined: usize,
    /// Rows dropped after a processing failure.
    pub failed: usize,
}

impl JoinStats {
    fn record(&mut self, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::Matched => self.matched += 1,
            MatchOutcome::NoMatch => self.no_match += 1,
            MatchOutcome::Ambiguous => self.ambiguous += 1,
            MatchOutcome::Disambiguated => self.disambiguated += 1,
            MatchOutcome::Declined => self.declined += 1,
        }
    }
}

/// Result of joining the first table against the group index.
#[derive(Debug, Clone, Default)]
pub struct JoinReport {
    /// Merged or passed-through rows, in first-table order.
    pub rows: Vec<Row>,
    /// Rows that failed and were dropped.
    pub failures: Vec<RowFailure>,
    /// Outcome counts.
    pub stats: JoinStats,
}

/// Joins first-table rows against a second-table index.
pub struct JoinEngine<'a> {
    index: &'a GroupIndex,
    first_key: usize,
}

impl<'a> JoinEngine<'a> {
    /// Creates an engine for the given index and first-table key column.
    ///
    /// # Arguments
    ///
    /// * `index` - Group index of the second table
    /// * `first_key` - 0-based key column in the first table
    pub fn new(index: &'a GroupIndex, first_key: usize) -> Self {
        Self { index, first_key }
    }

    /// Runs the join over every row of `first`.
    ///
    /// Per-row failures never abort the join; they are collected in the
    /// report and the offending rows are left out of `rows`.
    ///
    /// # Arguments
    ///
    /// * `first` - The first table
    /// * `selector` - Consulted for empty-key disambiguation
    ///
    /// # Returns
    ///
    /// A report holding merged rows, failures, and outcome counts.
    pub fn run<S: Selector + ?Sized>(&self, first: &Table, selector: &mut S) -> JoinReport {
        let mut report = JoinReport::default();
        for (position, row) in first.rows.iter().enumerate() {
            let number = position + 1;
            match self.merge_row(number, row, selector) {
                Ok((merged, outcome)) => {
                    debug!(row = number, ?outcome, "row resolved");
                    report.stats.record(outcome);
                    report.rows.push(merged);
                }
                Err(err) => {
                    warn!(row = number, error = %err, "dropping row");
                    let reason = match err {
                        Error::RowProcessing { reason, .. } => reason,
                        other => other.to_string(),
                    };
                    report.stats.failed += 1;
                    report.failures.push(RowFailure {
                        row: number,
                        fields: row.clone(),
                        reason,
                    });
                }
            }
        }
        report
    }

    /// Resolves a single first-table row.
    ///
    /// # Errors
    ///
    /// Returns `Error::RowProcessing` if the key column is missing, the raw
    /// key has no exact group, or the disambiguation answer is unusable.
    pub fn merge_row<S: Selector + ?Sized>(
        &self,
        number: usize,
        row: &Row,
        selector: &mut S,
    ) -> Result<(Row, MatchOutcome)> {
        let fail = |reason: String| Error::RowProcessing {
            row: number,
            reason,
        };

        let key = row.get(self.first_key).ok_or_else(|| {
            fail(format!(
                "key column {} is out of range for a row with {} fields",
                self.first_key + 1,
                row.len()
            ))
        })?;

        if !self.index.contains_normalized(key) {
            return Ok((row.clone(), MatchOutcome::NoMatch));
        }

        let group = self
            .index
            .get(key)
            .ok_or_else(|| fail(format!("no group for raw key '{}'", key)))?;

        match group {
            [single] => Ok((row.concat(single), MatchOutcome::Matched)),
            _ if !key.is_empty() => Ok((row.clone(), MatchOutcome::Ambiguous)),
            candidates => {
                let options: Vec<String> = candidates
                    .iter()
                    .map(|candidate| candidate.fields().join(", "))
                    .collect();
                let prompt = format!("Multiple matches found for key '{}'", key);
                let request = SelectionRequest {
                    kind: SelectionKind::Match,
                    prompt: &prompt,
                    options: &options,
                };
                match selector.select(&request).bounded(candidates.len()) {
                    SelectionResult::Selected(choice) => Ok((
                        row.concat(&candidates[choice]),
                        MatchOutcome::Disambiguated,
                    )),
                    SelectionResult::NoSelection => Ok((row.clone(), MatchOutcome::Declined)),
                    SelectionResult::Invalid(reason) => Err(fail(reason)),
                }
            }
        }
    }
}

/// Joins `first` against `index` on `first_key`.
///
/// Convenience wrapper around [`JoinEngine::run`].
pub fn join_tables<S: Selector + ?Sized>(
    first: &Table,
    first_key: usize,
    index: &GroupIndex,
    selector: &mut S,
) -> JoinReport {
    JoinEngine::new(index, first_key).run(first, selector)
}
