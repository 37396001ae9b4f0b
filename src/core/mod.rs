/// Core module for the file utilities
///
/// Each submodule is an independent utility: a pure function over text plus
/// a file-level entry point that reads its input and writes its output.

pub mod frequency;
pub mod lines;
pub mod merge;
pub mod reminders;
pub mod report;
pub mod sales;
pub mod samples;
pub mod scanner;
pub mod transform;
