// Rust guideline compliant 2026-10-19

//! Delimited-file reading and writing.
//!
//! Tables are read whole: the first record is the header and every later
//! record is a data row. Writers accept rows of any width so that
//! pass-through rows shorter than the merged header are kept verbatim.

use crate::{Error, Result, Row, Table};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

/// Options controlling how tables are parsed and written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Reject rows whose width differs from the header.
    pub strict_width: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            strict_width: false,
        }
    }
}

/// Reads a table from a file path.
///
/// # Arguments
///
/// * `path` - Path to the delimited file
/// * `options` - Parsing options
///
/// # Returns
///
/// The parsed table.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened (`Error::Io`)
/// - The content is not valid delimited text (`Error::Csv`)
/// - The file has no header record or a ragged row under `strict_width`
///   (`Error::Format`)
pub fn read_table(path: &Path, options: &TableOptions) -> Result<Table> {
    let file = File::open(path)?;
    let table = read_table_from(file, options)
        .map_err(|err| match err {
            Error::Format(msg) => Error::Format(format!("{}: {}", path.display(), msg)),
            other => other,
        })?;
    debug!(
        path = %path.display(),
        columns = table.width(),
        rows = table.len(),
        "table loaded"
    );
    Ok(table)
}

/// Reads a table from any reader.
///
/// # Errors
///
/// See [`read_table`].
pub fn read_table_from<R: Read>(reader: R, options: &TableOptions) -> Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(options.delimiter)
        .flexible(true)
        .from_reader(reader);

    let mut records = rdr.records();
    let header: Vec<String> = match records.next() {
        Some(record) => record_fields(&record?),
        None => return Err(Error::Format("file has no header record".to_string())),
    };
    if header.is_empty() || header.iter().all(String::is_empty) {
        return Err(Error::Format("header record is empty".to_string()));
    }

    let mut rows = Vec::new();
    for (position, record) in records.enumerate() {
        let record = record?;
        if options.strict_width && record.len() != header.len() {
            return Err(Error::Format(format!(
                "record {} has {} fields, header has {}",
                position + 2,
                record.len(),
                header.len()
            )));
        }
        rows.push(Row::new(record_fields(&record)));
    }

    Ok(Table::new(header, rows))
}

fn record_fields(record: &StringRecord) -> Vec<String> {
    record.iter().map(str::to_string).collect()
}

/// Writes a header and rows to a file path, replacing any existing file.
///
/// # Arguments
///
/// * `path` - Destination path
/// * `header` - Header record
/// * `rows` - Data rows; widths may differ from the header
/// * `options` - Writer options (only the delimiter is used)
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_table(
    path: &Path,
    header: &[String],
    rows: &[Row],
    options: &TableOptions,
) -> Result<()> {
    let file = File::create(path)?;
    write_table_to(file, header, rows, options)?;
    debug!(path = %path.display(), rows = rows.len(), "table written");
    Ok(())
}

/// Writes a header and rows to any writer.
///
/// # Errors
///
/// Returns an error if a record cannot be written or flushed.
pub fn write_table_to<W: Write>(
    writer: W,
    header: &[String],
    rows: &[Row],
    options: &TableOptions,
) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(options.delimiter)
        .flexible(true)
        .from_writer(writer);

    wtr.write_record(header)?;
    for row in rows {
        wtr.write_record(row.fields())?;
    }
    wtr.flush()?;
    Ok(())
}
