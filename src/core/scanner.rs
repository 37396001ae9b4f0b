/// Directory scanner
///
/// Lists regular files directly inside a directory whose names end with one
/// of an allowed set of suffixes. No recursion; subdirectories are skipped.

use std::path::Path;

use log::{debug, error};
use regex::Regex;
use walkdir::WalkDir;

use crate::error::{Result, ToolError};

/// Build one anchored, case-sensitive regex matching any of `suffixes`
///
/// `None` when the set is empty: nothing can match.
fn suffix_matcher<S: AsRef<str>>(suffixes: &[S]) -> Result<Option<Regex>> {
    if suffixes.is_empty() {
        return Ok(None);
    }
    let alternatives: Vec<String> = suffixes
        .iter()
        .map(|suffix| regex::escape(suffix.as_ref()))
        .collect();
    let pattern = format!("(?:{})$", alternatives.join("|"));
    Regex::new(&pattern)
        .map(Some)
        .map_err(|e| ToolError::InvalidArgument(e.to_string()))
}

/// Names of files in `dir` that end with one of `suffixes`, sorted by name
pub fn scan_directory<S: AsRef<str>>(dir: &Path, suffixes: &[S]) -> Result<Vec<String>> {
    if !dir.is_dir() {
        error!("Directory not found: {}", dir.display());
        return Err(ToolError::FileNotFound {
            path: dir.to_path_buf(),
        });
    }

    let Some(matcher) = suffix_matcher(suffixes)? else {
        return Ok(Vec::new());
    };
    let mut names = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "directory walk failed"));
            ToolError::from_io(dir, source)
        })?;

        // follows symlinks, so a link to a directory is skipped too
        if entry.path().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if matcher.is_match(&name) {
            names.push(name.into_owned());
        } else {
            debug!("Skipping {}", name);
        }
    }

    Ok(names)
}
