/// Whole-content transforms: literal find-and-replace and uppercasing

use std::path::Path;

use log::info;

use crate::error::{Result, ToolError};
use crate::utils::file_utils::{read_text, write_text};

/// Replace every non-overlapping occurrence of `from` with `to`, left to right
///
/// # Returns
///
/// The new text and the number of replacements made
pub fn replace_literal(text: &str, from: &str, to: &str) -> Result<(String, usize)> {
    if from.is_empty() {
        return Err(ToolError::InvalidArgument(
            "search string must not be empty".to_string(),
        ));
    }
    let count = text.matches(from).count();
    Ok((text.replace(from, to), count))
}

/// Apply `replace_literal` to a file; `output` may be the same path as `input`
pub fn replace_in_file(input: &Path, output: &Path, from: &str, to: &str) -> Result<usize> {
    let content = read_text(input)?;
    let (updated, count) = replace_literal(&content, from, to)?;
    write_text(output, &updated)?;
    info!(
        "Replaced {} occurrence(s) of {:?} in {}",
        count,
        from,
        input.display()
    );
    Ok(count)
}

pub fn uppercase(text: &str) -> String {
    text.to_uppercase()
}

pub fn uppercase_file(input: &Path, output: &Path) -> Result<()> {
    let content = read_text(input)?;
    write_text(output, &uppercase(&content))
}
