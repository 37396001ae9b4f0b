/// Student report generator
///
/// Parses `name,marks` records and classifies each as Pass or Fail against a
/// pass mark. Blank lines are skipped; any other malformed line aborts the
/// run with a `Parse` error naming its line number.

use std::fmt;
use std::path::Path;

use log::info;

use crate::error::{Result, ToolError};
use crate::utils::file_utils::{read_text, write_text};
use crate::utils::output_formatter::render_report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pass,
    Fail,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pass => write!(f, "Pass"),
            Status::Fail => write!(f, "Fail"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub name: String,
    pub marks: i64,
    pub status: Status,
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.status)
    }
}

pub fn classify(marks: i64, pass_mark: i64) -> Status {
    if marks >= pass_mark {
        Status::Pass
    } else {
        Status::Fail
    }
}

/// Parse a single `name,marks` record
///
/// # Arguments
///
/// * `line` - The raw record
/// * `line_no` - 1-based line number, used in error messages
/// * `pass_mark` - Marks at or above this value pass
pub fn parse_record(line: &str, line_no: usize, pass_mark: i64) -> Result<ReportEntry> {
    let (name, marks) = line
        .split_once(',')
        .ok_or_else(|| ToolError::parse(line_no, format!("expected `name,marks`, got {:?}", line)))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(ToolError::parse(line_no, "student name is empty"));
    }

    let marks: i64 = marks
        .trim()
        .parse()
        .map_err(|e| ToolError::parse(line_no, format!("invalid marks {:?}: {}", marks.trim(), e)))?;

    Ok(ReportEntry {
        name: name.to_string(),
        marks,
        status: classify(marks, pass_mark),
    })
}

/// Build report entries for every non-blank line, preserving input order
pub fn generate_report(text: &str, pass_mark: i64) -> Result<Vec<ReportEntry>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_record(line, idx + 1, pass_mark))
        .collect()
}

pub fn report_file(input: &Path, output: &Path, pass_mark: i64) -> Result<Vec<ReportEntry>> {
    let text = read_text(input)?;
    let entries = generate_report(&text, pass_mark)?;
    write_text(output, &render_report(&entries))?;

    let passed = entries.iter().filter(|e| e.status == Status::Pass).count();
    info!(
        "Report for {}: {} passed, {} failed",
        input.display(),
        passed,
        entries.len() - passed
    );
    Ok(entries)
}
