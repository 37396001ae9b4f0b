/// Output formatter for utility results
///
/// Renders reports and frequency tables as the plain text written to
/// output files, exports frequency tables as JSON, and builds the colored
/// one-line summaries printed by the command-line tool.

use std::path::Path;

use colored::Colorize;

use crate::core::frequency::FrequencyTable;
use crate::core::report::ReportEntry;
use crate::error::Result;
use crate::utils::file_utils::write_text;

/// `name: Status` per entry, each followed by a newline
pub fn render_report(entries: &[ReportEntry]) -> String {
    entries.iter().map(|entry| format!("{}\n", entry)).collect()
}

/// `token: count` per entry in first-seen order
pub fn render_frequency(table: &FrequencyTable) -> String {
    table
        .iter()
        .map(|(token, count)| format!("{}: {}\n", token, count))
        .collect()
}

/// Export a frequency table to a JSON file
///
/// # Arguments
///
/// * `table` - The counts to export
/// * `output_path` - Path where the JSON will be written
pub fn export_frequency_json(table: &FrequencyTable, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(table)?;
    write_text(output_path, &json)
}

/// A colored `label value` line for console summaries
pub fn summary_line(label: &str, value: impl std::fmt::Display) -> String {
    format!("{} {}", format!("{}:", label).green(), value)
}
