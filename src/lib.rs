/// File Toolkit - small single-shot utilities for text files
///
/// This library provides line filters, whole-content transforms, a student
/// report generator, a word frequency counter, a CSV threshold filter, a file
/// merger and a directory scanner. Every utility takes explicit paths and
/// parameters; defaults live in [`config::Config`].

pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::config::Config;
pub use crate::core::frequency::{count_words, FrequencyTable};
pub use crate::core::report::{generate_report, ReportEntry, Status};
pub use crate::core::sales::Column;
pub use crate::error::{Result, ToolError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
