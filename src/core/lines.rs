/// Line-oriented readers and filters
///
/// Echo, count, blank-line stripping, reversal and marker extraction. The
/// pure functions work on in-memory text; the `*_file` variants wrap them
/// with reads and writes through `file_utils`.

use std::path::Path;

use log::info;

use crate::error::Result;
use crate::utils::file_utils::{read_text, split_lines_inclusive, write_lines, write_text};

/// Every line of `text` with surrounding whitespace removed
pub fn trimmed_lines(text: &str) -> Vec<String> {
    text.lines().map(|line| line.trim().to_string()).collect()
}

/// Read a file and return its trimmed lines
pub fn echo_file(input: &Path) -> Result<Vec<String>> {
    Ok(trimmed_lines(&read_text(input)?))
}

/// Number of lines in a file
pub fn count_lines(input: &Path) -> Result<usize> {
    Ok(read_text(input)?.lines().count())
}

/// Keep every line whose trimmed form is non-empty, terminators included
pub fn strip_blank_lines(text: &str) -> Vec<&str> {
    split_lines_inclusive(text)
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .collect()
}

pub fn strip_blank_lines_file(input: &Path, output: &Path) -> Result<usize> {
    let text = read_text(input)?;
    let kept = strip_blank_lines(&text);
    write_lines(output, &kept)?;
    info!(
        "Stripped blank lines from {}: kept {} line(s)",
        input.display(),
        kept.len()
    );
    Ok(kept.len())
}

/// Reverse the order of the lines in `text`
///
/// A trailing newline on the input stays a trailing newline on the output,
/// so reversing twice gives back the original text.
pub fn reverse_lines(text: &str) -> String {
    let trailing_newline = text.ends_with('\n');
    let body = text.strip_suffix('\n').unwrap_or(text);
    if body.is_empty() && !trailing_newline {
        return String::new();
    }

    let mut reversed: Vec<&str> = body.split('\n').collect();
    reversed.reverse();

    let mut output = reversed.join("\n");
    if trailing_newline {
        output.push('\n');
    }
    output
}

pub fn reverse_file(input: &Path, output: &Path) -> Result<()> {
    let text = read_text(input)?;
    write_text(output, &reverse_lines(&text))
}

/// Lines containing `marker` as a literal substring, terminators included
pub fn extract_matching<'a>(text: &'a str, marker: &str) -> Vec<&'a str> {
    split_lines_inclusive(text)
        .into_iter()
        .filter(|line| line.contains(marker))
        .collect()
}

/// Copy the lines of `input` that contain `marker` into `output`
///
/// # Returns
///
/// The number of matching lines
pub fn extract_errors_file(input: &Path, output: &Path, marker: &str) -> Result<usize> {
    let text = read_text(input)?;
    let matches = extract_matching(&text, marker);
    write_lines(output, &matches)?;
    info!("Found {} line(s) containing {:?}", matches.len(), marker);
    Ok(matches.len())
}
