/// CSV threshold filter
///
/// The header row always passes through. Each data row is kept when the
/// field at `column` parsed as an integer is strictly greater than the
/// threshold. Empty rows are skipped; a short row or a non-numeric field is
/// a `Parse` error carrying the 1-based line number of the row.
///
/// The threshold column is chosen by 0-based index or by header name.

use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use log::{info, warn};
use serde::Deserialize;

use crate::error::{Result, ToolError};
use crate::utils::file_utils::read_text;

/// Header plus the rows that passed the threshold
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub header: Option<StringRecord>,
    pub rows: Vec<StringRecord>,
    /// Number of data rows examined, empty rows excluded
    pub examined: usize,
}

/// Which field holds the amount: `1` or `"Amount"` in JSON
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Column {
    Index(usize),
    Name(String),
}

impl Column {
    /// Resolve to a 0-based index using the header row
    pub fn resolve(&self, header: &StringRecord, line: usize) -> Result<usize> {
        match self {
            Column::Index(idx) => Ok(*idx),
            Column::Name(name) => header
                .iter()
                .position(|field| field.trim() == name.as_str())
                .ok_or_else(|| ToolError::parse(line, format!("header has no column named {:?}", name))),
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Column::Index(idx) => write!(f, "#{}", idx),
            Column::Name(name) => write!(f, "{:?}", name),
        }
    }
}

/// Parse the threshold column of `record`
fn amount_of(record: &StringRecord, column: usize, line: usize) -> Result<i64> {
    let field = record.get(column).ok_or_else(|| {
        ToolError::parse(
            line,
            format!("row has {} field(s), no column {}", record.len(), column),
        )
    })?;
    field
        .trim()
        .parse()
        .map_err(|e| ToolError::parse(line, format!("invalid amount {:?}: {}", field, e)))
}

fn is_empty_row(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}

/// 1-based line on which `record` starts, counting lines the reader skipped
fn line_of(record: &StringRecord, fallback: usize) -> usize {
    record
        .position()
        .map(|pos| pos.line() as usize)
        .unwrap_or(fallback)
}

pub fn filter_rows<R: Read>(reader: R, column: &Column, threshold: i64) -> Result<FilterOutcome> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut header: Option<(StringRecord, usize)> = None;
    let mut rows = Vec::new();
    let mut examined = 0;

    for (idx, record) in csv_reader.records().enumerate() {
        let record = record?;
        let line = line_of(&record, idx + 1);

        let resolved = header.as_ref().map(|(_, index)| *index);
        let Some(index) = resolved else {
            let index = column.resolve(&record, line)?;
            header = Some((record, index));
            continue;
        };
        if is_empty_row(&record) {
            continue;
        }

        examined += 1;
        if amount_of(&record, index, line)? > threshold {
            rows.push(record);
        }
    }

    if header.is_none() {
        warn!("CSV input has no header row");
    }

    Ok(FilterOutcome {
        header: header.map(|(record, _)| record),
        rows,
        examined,
    })
}

/// Write the header and retained rows as CSV, one `\n`-terminated record each
pub fn write_outcome<W: Write>(writer: W, outcome: &FilterOutcome) -> Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    if let Some(header) = &outcome.header {
        csv_writer.write_record(header)?;
    }
    for row in &outcome.rows {
        csv_writer.write_record(row)?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn filter_csv_file(
    input: &Path,
    output: &Path,
    column: &Column,
    threshold: i64,
) -> Result<FilterOutcome> {
    let text = read_text(input)?;
    let outcome = filter_rows(text.as_bytes(), column, threshold)?;

    let file = std::fs::File::create(output).map_err(|e| ToolError::from_io(output, e))?;
    write_outcome(file, &outcome)?;

    info!(
        "Kept {} of {} row(s) from {} with column {} > {}",
        outcome.rows.len(),
        outcome.examined,
        input.display(),
        column,
        threshold
    );
    Ok(outcome)
}
