/// Reminder list writer

use std::path::Path;

use log::info;

use crate::error::Result;
use crate::utils::file_utils::{append_text, write_lines};

pub const DEFAULT_TASKS: [&str; 5] = [
    "Complete homework",
    "Buy groceries",
    "Call mom",
    "Go for a walk",
    "Read a book",
];

pub const DEFAULT_NEW_TASK: &str = "Water the plants";

/// Create or overwrite `path` with one task per line
pub fn write_reminders<S: AsRef<str>>(path: &Path, tasks: &[S]) -> Result<()> {
    let lines: Vec<String> = tasks
        .iter()
        .map(|task| format!("{}\n", task.as_ref()))
        .collect();
    write_lines(path, &lines)?;
    info!("Wrote {} reminder(s) to {}", tasks.len(), path.display());
    Ok(())
}

/// Append a single task to `path`, creating the file if needed
pub fn append_reminder(path: &Path, task: &str) -> Result<()> {
    append_text(path, &format!("{}\n", task))
}
