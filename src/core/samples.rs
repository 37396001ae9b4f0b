/// Sample input files for trying out each utility

use std::path::{Path, PathBuf};

use log::info;

use crate::error::{Result, ToolError};
use crate::utils::file_utils::write_text;

pub const SERVER_LOG: &str = "INFO: Server started successfully.
ERROR: Failed to connect to database.
INFO: New connection established.
ERROR: Timeout while fetching data.
WARNING: Disk space low.
INFO: Server running.
ERROR: Unexpected shutdown detected.";

pub const SALES_CSV: &str = "Date,Item,Amount
2024-04-01,Laptop,95000
2024-04-02,Mouse,750
2024-04-03,Monitor,12500
2024-04-04,Keyboard,2500
2024-04-05,Chair,10500
2024-04-06,Table,8900
2024-04-07,Headphones,12000";

pub const CHAPTERS: [(&str, &str); 3] = [
    (
        "chapter1.txt",
        "Chapter 1: The Beginning\nOnce upon a time in a small town, there lived a curious cat named Luna.",
    ),
    (
        "chapter2.txt",
        "Chapter 2: The Adventure\nLuna wandered far from home and discovered a hidden cave filled with glowing crystals.",
    ),
    (
        "chapter3.txt",
        "Chapter 3: The Return\nWith a heart full of stories, Luna returned to the town and became a legend.",
    ),
];

/// Write the sample files into `dir`, creating it if needed
///
/// # Returns
///
/// The paths written, in order
pub fn seed(dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).map_err(|e| ToolError::from_io(dir, e))?;

    let files = [("server.log", SERVER_LOG), ("sales.csv", SALES_CSV)]
        .into_iter()
        .chain(CHAPTERS);

    let mut written = Vec::new();
    for (name, content) in files {
        let path = dir.join(name);
        write_text(&path, content)?;
        written.push(path);
    }

    info!("Seeded {} sample file(s) in {}", written.len(), dir.display());
    Ok(written)
}
