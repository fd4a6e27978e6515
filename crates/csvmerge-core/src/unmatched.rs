// Rust guideline compliant 2026-10-19

//! Collection of second-table rows that never reached the merged output.

use crate::index::GroupIndex;
use crate::Row;
use std::collections::HashSet;

/// Returns every indexed row whose raw key is absent from the merged output.
///
/// A group counts as used when its raw key appears verbatim at `first_key`
/// in any merged row. The comparison is literal: keys that only match after
/// normalization are not considered used, and every row of a used group is
/// excluded even if only one of them was merged.
///
/// # Arguments
///
/// * `index` - Group index of the second table
/// * `merged` - Rows produced by the join
/// * `first_key` - 0-based key column in the first table
///
/// # Returns
///
/// Unmatched rows in first-seen key order, then row order within each group.
pub fn collect_unmatched(index: &GroupIndex, merged: &[Row], first_key: usize) -> Vec<Row> {
    let used: HashSet<&str> = merged.iter().filter_map(|row| row.get(first_key)).collect();

    index
        .groups()
        .filter(|(key, _)| !used.contains(key))
        .flat_map(|(_, group)| group.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Table;

    fn index(rows: Vec<Vec<&str>>) -> GroupIndex {
        let table = Table::new(
            vec!["id".to_string(), "email".to_string()],
            rows.into_iter().map(Row::from).collect(),
        );
        GroupIndex::build(&table, 0).unwrap()
    }

    #[test]
    fn test_used_keys_are_excluded() {
        let idx = index(vec![vec!["1", "a"], vec!["2", "b"], vec!["3", "c"]]);
        let merged = vec![Row::from(vec!["1", "alice", "1", "a"])];
        let unmatched = collect_unmatched(&idx, &merged, 0);
        assert_eq!(
            unmatched,
            vec![Row::from(vec!["2", "b"]), Row::from(vec!["3", "c"])]
        );
    }

    #[test]
    fn test_passthrough_rows_still_mark_key_used() {
        // an ambiguous pass-through row carries the key, so its group is hidden
        let idx = index(vec![vec!["1", "a"], vec!["1", "b"]]);
        let merged = vec![Row::from(vec!["1", "alice"])];
        assert!(collect_unmatched(&idx, &merged, 0).is_empty());
    }

    #[test]
    fn test_comparison_is_literal() {
        let idx = index(vec![vec!["Alice", "a"]]);
        let merged = vec![Row::from(vec!["alice", "x"])];
        assert_eq!(collect_unmatched(&idx, &merged, 0).len(), 1);
    }

    #[test]
    fn test_short_merged_rows_are_ignored() {
        let idx = index(vec![vec!["1", "a"]]);
        let merged = vec![Row::from(vec!["x"])];
        assert_eq!(collect_unmatched(&idx, &merged, 1).len(), 1);
    }
}
