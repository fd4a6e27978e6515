// Rust guideline compliant 2026-10-19

//! Group index over the second table.
//!
//! Rows are grouped under their exact raw key. Keys are remembered in the
//! order they were first seen so that traversal is deterministic.

use crate::key::normalize_key;
use crate::{Error, Result, Row, Table};
use std::collections::HashMap;

/// Mapping from raw key to the ordered rows sharing that key.
#[derive(Debug, Clone, Default)]
pub struct GroupIndex {
    /// Raw keys in first-seen order.
    keys: Vec<String>,
    /// Rows per raw key, in table order.
    groups: HashMap<String, Vec<Row>>,
}

impl GroupIndex {
    /// Builds an index by grouping `table` rows on the raw value at `key_column`.
    ///
    /// # Arguments
    ///
    /// * `table` - The table to index
    /// * `key_column` - 0-based key column index
    ///
    /// # Returns
    ///
    /// The populated index.
    ///
    /// # Errors
    ///
    /// Returns `Error::Format` if any row is too short to contain `key_column`.
    pub fn build(table: &Table, key_column: usize) -> Result<Self> {
        let mut index = Self::default();
        for (position, row) in table.rows.iter().enumerate() {
            let key = row.get(key_column).ok_or_else(|| {
                Error::Format(format!(
                    "row {} has {} fields, key column {} is out of range",
                    position + 1,
                    row.len(),
                    key_column + 1
                ))
            })?;
            index.insert(key.to_string(), row.clone());
        }
        Ok(index)
    }

    /// Appends `row` to the group for `key`, creating the group on first use.
    pub fn insert(&mut self, key: String, row: Row) {
        match self.groups.get_mut(&key) {
            Some(group) => group.push(row),
            None => {
                self.keys.push(key.clone());
                self.groups.insert(key, vec![row]);
            }
        }
    }

    /// Returns the group stored under the exact raw `key`.
    pub fn get(&self, key: &str) -> Option<&[Row]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Returns true if any raw key is normalized-equal to `key`.
    ///
    /// This is a linear scan over the raw keys.
    pub fn contains_normalized(&self, key: &str) -> bool {
        let wanted = normalize_key(key);
        self.keys.iter().any(|raw| normalize_key(raw) == wanted)
    }

    /// Iterates `(raw_key, group)` pairs in first-seen key order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[Row])> {
        self.keys.iter().filter_map(move |key| {
            self.groups
                .get(key)
                .map(|group| (key.as_str(), group.as_slice()))
        })
    }

    /// Returns the number of distinct raw keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the index holds no groups.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the total number of indexed rows.
    pub fn row_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}
