// Rust guideline compliant 2026-10-19

//! Pluggable selection capability.
//!
//! Every choice a run needs (input files, key columns, and disambiguation of
//! empty-key matches) goes through a [`Selector`]. The CLI provides an
//! interactive implementation; [`ScriptedSelector`] replays fixed answers for
//! tests and batch runs.

use std::collections::VecDeque;

/// What a selection request is choosing between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    /// An input file from the discovered candidates.
    File,
    /// A key column from a table header.
    Column,
    /// A second-table row among several candidates for one key.
    Match,
}

/// A labeled list of options presented to a [`Selector`].
#[derive(Debug, Clone)]
pub struct SelectionRequest<'a> {
    /// What is being selected.
    pub kind: SelectionKind,
    /// Prompt shown above the options.
    pub prompt: &'a str,
    /// Option labels, in display order.
    pub options: &'a [String],
}

/// Outcome of a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionResult {
    /// A 0-based index into the request's options.
    Selected(usize),
    /// The user declined to choose.
    NoSelection,
    /// The answer could not be interpreted.
    Invalid(String),
}

impl SelectionResult {
    /// Checks a selection against the number of options.
    ///
    /// Out-of-range indices become `Invalid`.
    pub fn bounded(self, option_count: usize) -> Self {
        match self {
            SelectionResult::Selected(index) if index >= option_count => {
                SelectionResult::Invalid(format!(
                    "choice {} is out of range (1-{})",
                    index + 1,
                    option_count
                ))
            }
            other => other,
        }
    }
}

/// Chooses one option from a request.
pub trait Selector {
    /// Presents `request` and returns the chosen option.
    fn select(&mut self, request: &SelectionRequest<'_>) -> SelectionResult;
}

impl<S: Selector + ?Sized> Selector for &mut S {
    fn select(&mut self, request: &SelectionRequest<'_>) -> SelectionResult {
        (**self).select(request)
    }
}

/// Selector that replays a fixed sequence of answers.
///
/// Once the script is exhausted every request yields `NoSelection`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSelector {
    answers: VecDeque<SelectionResult>,
    asked: Vec<SelectionKind>,
}

impl ScriptedSelector {
    /// Creates a selector that answers with `answers` in order.
    pub fn new(answers: impl IntoIterator<Item = SelectionResult>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Creates a selector that declines every request.
    pub fn declining() -> Self {
        Self::default()
    }

    /// Returns the kinds of every request seen so far.
    pub fn asked(&self) -> &[SelectionKind] {
        &self.asked
    }

    /// Returns the number of unused answers.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Selector for ScriptedSelector {
    fn select(&mut self, request: &SelectionRequest<'_>) -> SelectionResult {
        self.asked.push(request.kind);
        self.answers
            .pop_front()
            .unwrap_or(SelectionResult::NoSelection)
    }
}
