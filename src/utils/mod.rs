/// Utility modules for the toolkit
///
/// File access helpers shared by every utility, and output formatting.

pub mod file_utils;
pub mod output_formatter;
