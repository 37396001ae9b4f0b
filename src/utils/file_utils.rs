/// File handling utilities
///
/// Every utility opens files through these helpers so that a missing path
/// always surfaces as `ToolError::FileNotFound` and any other failure as
/// `ToolError::Io`. Handles never outlive the helper call.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, warn};

use crate::error::{Result, ToolError};

/// Read the full content of a text file.
///
/// # Arguments
///
/// * `file_path` - Path to the file
///
/// # Returns
///
/// The content of the file, or `FileNotFound` if it does not exist
pub fn read_text(file_path: &Path) -> Result<String> {
    let content = fs::read_to_string(file_path).map_err(|e| ToolError::from_io(file_path, e))?;
    debug!("Read {} bytes from {}", content.len(), file_path.display());
    Ok(content)
}

/// Read a file only if it is present.
///
/// Returns `Ok(None)` instead of failing when the path does not exist.
pub fn read_if_exists(file_path: &Path) -> Result<Option<String>> {
    if !file_path.exists() {
        warn!("{} does not exist", file_path.display());
        return Ok(None);
    }
    read_text(file_path).map(Some)
}

/// Create or overwrite a file with the given content
pub fn write_text(file_path: &Path, content: &str) -> Result<()> {
    fs::write(file_path, content).map_err(|e| ToolError::from_io(file_path, e))?;
    debug!("Wrote {} bytes to {}", content.len(), file_path.display());
    Ok(())
}

/// Create or overwrite a file with the given lines, written verbatim
///
/// Lines are not given terminators; callers pass them in already terminated.
pub fn write_lines<S: AsRef<str>>(file_path: &Path, lines: &[S]) -> Result<()> {
    let file = File::create(file_path).map_err(|e| ToolError::from_io(file_path, e))?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writer
            .write_all(line.as_ref().as_bytes())
            .map_err(|e| ToolError::from_io(file_path, e))?;
    }
    writer.flush().map_err(|e| ToolError::from_io(file_path, e))?;
    Ok(())
}

/// Append content to a file, creating it when absent
pub fn append_text(file_path: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(file_path)
        .map_err(|e| ToolError::from_io(file_path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| ToolError::from_io(file_path, e))?;
    Ok(())
}

/// Split text into lines while keeping each line's terminator
pub fn split_lines_inclusive(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}
