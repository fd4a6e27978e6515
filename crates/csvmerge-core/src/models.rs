// Rust guideline compliant 2026-10-19

//! Data models for csvmerge: rows and tables.

use serde::{Deserialize, Serialize};

/// A single record of a delimited table.
///
/// Fields are positional: field `i` belongs to header column `i` of the
/// table the row was read from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: Vec<String>,
}

impl Row {
    /// Creates a row from owned field values.
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Returns the field at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Returns all fields in order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns a new row holding this row's fields followed by `other`'s.
    pub fn concat(&self, other: &Row) -> Row {
        let mut fields = Vec::with_capacity(self.len() + other.len());
        fields.extend_from_slice(&self.fields);
        fields.extend_from_slice(&other.fields);
        Row { fields }
    }
}

impl From<Vec<String>> for Row {
    fn from(fields: Vec<String>) -> Self {
        Self::new(fields)
    }
}

impl From<Vec<&str>> for Row {
    fn from(fields: Vec<&str>) -> Self {
        Self::new(fields.into_iter().map(str::to_string).collect())
    }
}

/// A delimited table: a header plus ordered data rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Column names, in file order.
    pub header: Vec<String>,
    /// Data rows, in file order.
    pub rows: Vec<Row>,
}

impl Table {
    /// Creates a table from a header and rows.
    pub fn new(header: Vec<String>, rows: Vec<Row>) -> Self {
        Self { header, rows }
    }

    /// Returns the header width.
    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Returns the number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Resolves a column reference against the header.
    ///
    /// Accepts an exact column name first, then a 1-based column number.
    ///
    /// # Arguments
    ///
    /// * `reference` - Column name or 1-based number
    ///
    /// # Returns
    ///
    /// The 0-based column index, or None if nothing matches.
    pub fn column_index(&self, reference: &str) -> Option<usize> {
        if let Some(index) = self.header.iter().position(|name| name == reference) {
            return Some(index);
        }
        match reference.trim().parse::<usize>() {
            Ok(number) if number >= 1 && number <= self.header.len() => Some(number - 1),
            _ => None,
        }
    }
}
