/// File merger
///
/// All sources are read before the destination is opened, so a missing
/// source leaves the destination untouched.

use std::path::Path;

use log::info;

use crate::error::Result;
use crate::utils::file_utils::{read_text, write_text};

/// Concatenate `contents` in order, one `\n` after each
pub fn merge_contents<S: AsRef<str>>(contents: &[S]) -> String {
    let mut merged = String::new();
    for content in contents {
        merged.push_str(content.as_ref());
        merged.push('\n');
    }
    merged
}

pub fn merge_files<P: AsRef<Path>>(sources: &[P], destination: &Path) -> Result<()> {
    let contents = sources
        .iter()
        .map(|source| read_text(source.as_ref()))
        .collect::<Result<Vec<String>>>()?;

    write_text(destination, &merge_contents(&contents))?;
    info!(
        "Merged {} file(s) into {}",
        sources.len(),
        destination.display()
    );
    Ok(())
}
