/// Simple example demonstrating how to use the File Toolkit library

use anyhow::Result;
use file_toolkit::core::{frequency, report};
use file_toolkit::Config;

fn main() -> Result<()> {
    let config = Config::default();
    let work_dir = tempfile::tempdir()?;
    let story_path = work_dir.path().join("sample_story.txt");

    // Create sample file
    std::fs::write(
        &story_path,
        "The quick brown fox jumps over the lazy dog. The dog sleeps!\n",
    )?;

    let table = frequency::frequency_file(
        &story_path,
        &work_dir.path().join("sample_frequency.txt"),
        &config.punctuation,
    )?;

    println!("Word counts for {}:", story_path.display());
    for (word, count) in table.iter() {
        println!("  {}: {}", word, count);
    }

    let entries = report::generate_report("Alice,72\nBob,40\n", config.pass_mark)?;
    println!("\nReport:");
    for entry in entries {
        println!("  {}", entry);
    }

    Ok(())
}
