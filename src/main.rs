/// File Toolkit - small single-shot utilities for text files
///
/// The main entry point for the command-line tool. It parses arguments, sets
/// up logging, loads configuration and dispatches to one utility.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use log::{debug, LevelFilter};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;

use file_toolkit::config::Config;
use file_toolkit::core::sales::Column;
use file_toolkit::core::{
    frequency, lines, merge, reminders, report, sales, samples, scanner, transform,
};
use file_toolkit::utils::file_utils;
use file_toolkit::utils::output_formatter::{export_frequency_json, summary_line};

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "file_toolkit",
    version,
    about = "Small single-shot utilities for text files",
    long_about = "Each subcommand reads its input files, applies one transformation and writes
the result. Thresholds and defaults can be set in a JSON configuration file
and overridden per command."
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Path to configuration file (JSON)
    #[arg(long = "config", global = true)]
    config: Option<PathBuf>,

    /// Set logging level (default: warn)
    #[arg(long = "log-level", default_value = "warn", global = true)]
    log_level: LevelFilter,

    /// Log file path (default: stderr)
    #[arg(long = "log-file", global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every line of a file, trimmed
    Echo {
        #[arg(default_value = "notes.txt")]
        input: PathBuf,
    },
    /// Print the number of lines in a file
    Count {
        #[arg(default_value = "poem.txt")]
        input: PathBuf,
    },
    /// Write a reminder list, then append one more task
    Remind {
        #[arg(long, default_value = "reminder.txt")]
        output: PathBuf,
        /// Task to write (repeatable; default: the built-in list)
        #[arg(long = "task", action = ArgAction::Append)]
        tasks: Vec<String>,
        /// Task appended after the list is written
        #[arg(long, default_value = reminders::DEFAULT_NEW_TASK)]
        append: String,
    },
    /// Print a file's contents if it exists
    Show {
        #[arg(default_value = "data.txt")]
        input: PathBuf,
    },
    /// Copy a file without its blank lines
    StripBlank {
        #[arg(default_value = "input.txt")]
        input: PathBuf,
        #[arg(default_value = "cleaned.txt")]
        output: PathBuf,
    },
    /// Replace every literal occurrence of one string with another
    Replace {
        #[arg(long, default_value = "Python")]
        from: String,
        #[arg(long, default_value = "PYTHON")]
        to: String,
        #[arg(default_value = "article.txt")]
        input: PathBuf,
        /// Output path (default: rewrite the input in place)
        output: Option<PathBuf>,
    },
    /// Write an uppercased copy of a file
    Upper {
        #[arg(default_value = "input.txt")]
        input: PathBuf,
        #[arg(default_value = "output.txt")]
        output: PathBuf,
    },
    /// Classify `name,marks` records as Pass or Fail
    Report {
        #[arg(default_value = "students.txt")]
        input: PathBuf,
        #[arg(default_value = "report.txt")]
        output: PathBuf,
        /// Marks at or above this pass
        #[arg(long)]
        pass_mark: Option<i64>,
    },
    /// Write a file's lines in reverse order
    Reverse {
        #[arg(default_value = "quotes.txt")]
        input: PathBuf,
        #[arg(default_value = "reversed_quotes.txt")]
        output: PathBuf,
    },
    /// Extract the lines containing a marker from a log
    Errors {
        #[arg(default_value = "server.log")]
        input: PathBuf,
        #[arg(default_value = "errors_only.log")]
        output: PathBuf,
        #[arg(long)]
        marker: Option<String>,
    },
    /// Count word occurrences in first-seen order
    Freq {
        #[arg(default_value = "story.txt")]
        input: PathBuf,
        #[arg(default_value = "frequency.txt")]
        output: PathBuf,
        /// Characters trimmed from token edges
        #[arg(long)]
        punctuation: Option<String>,
        /// Also export the counts as JSON
        #[arg(long = "json")]
        json: Option<PathBuf>,
    },
    /// Keep the CSV header and the rows whose amount exceeds a threshold
    CsvFilter {
        #[arg(default_value = "sales.csv")]
        input: PathBuf,
        #[arg(default_value = "high_sales.csv")]
        output: PathBuf,
        /// 0-based column index of the amount
        #[arg(long, conflicts_with = "column_name")]
        column: Option<usize>,
        /// Header name of the amount column
        #[arg(long = "column-name")]
        column_name: Option<String>,
        #[arg(long)]
        threshold: Option<i64>,
    },
    /// Concatenate files in order, one newline after each
    Merge {
        #[arg(long, short, default_value = "full_book.txt")]
        output: PathBuf,
        #[arg(default_values = ["chapter1.txt", "chapter2.txt", "chapter3.txt"])]
        sources: Vec<PathBuf>,
    },
    /// List files in a directory with an allowed extension
    Scan {
        #[arg(default_value = ".")]
        dir: PathBuf,
        /// Allowed suffix (repeatable; default from config)
        #[arg(long = "suffix", action = ArgAction::Append)]
        suffixes: Vec<String>,
    },
    /// Write the sample input files into a directory
    Seed {
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

/// Main entry point function
fn main() {
    let args = Args::parse();

    if let Err(e) = setup_logging(&args) {
        eprintln!("{} {:#}", "Warning: logging unavailable:".yellow(), e);
    }

    if let Err(e) = run(args) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

/// Set up logging with file or console output
fn setup_logging(args: &Args) -> Result<()> {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(args.log_level);

    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(log_file) = &args.log_file {
        let file = File::create(log_file)
            .with_context(|| format!("cannot create log file {}", log_file.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init()?;
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let config = Config::load(args.config.as_deref()).context("failed to load configuration")?;
    debug!("Using configuration: {:?}", config);

    match args.command {
        Command::Echo { input } => {
            for line in lines::echo_file(&input)? {
                println!("{}", line);
            }
        }
        Command::Count { input } => {
            println!("Number of lines: {}", lines::count_lines(&input)?);
        }
        Command::Remind {
            output,
            tasks,
            append,
        } => {
            if tasks.is_empty() {
                reminders::write_reminders(&output, &reminders::DEFAULT_TASKS)?;
            } else {
                reminders::write_reminders(&output, &tasks)?;
            }
            reminders::append_reminder(&output, &append)?;
            println!("{}", summary_line("Reminders written to", output.display()));
        }
        Command::Show { input } => match file_utils::read_if_exists(&input)? {
            Some(content) => {
                println!("File contents:");
                println!("{}", content);
            }
            None => println!("{} does not exist.", input.display()),
        },
        Command::StripBlank { input, output } => {
            let kept = lines::strip_blank_lines_file(&input, &output)?;
            println!("{}", summary_line("Lines kept", kept));
        }
        Command::Replace {
            from,
            to,
            input,
            output,
        } => {
            let output = output.unwrap_or_else(|| input.clone());
            let count = transform::replace_in_file(&input, &output, &from, &to)?;
            println!("{}", summary_line("Replacements", count));
        }
        Command::Upper { input, output } => {
            transform::uppercase_file(&input, &output)?;
            println!("{}", summary_line("Uppercased copy written to", output.display()));
        }
        Command::Report {
            input,
            output,
            pass_mark,
        } => {
            let pass_mark = pass_mark.unwrap_or(config.pass_mark);
            let entries = report::report_file(&input, &output, pass_mark)?;
            println!("{}", summary_line("Students reported", entries.len()));
        }
        Command::Reverse { input, output } => {
            lines::reverse_file(&input, &output)?;
            println!("{}", summary_line("Reversed lines written to", output.display()));
        }
        Command::Errors {
            input,
            output,
            marker,
        } => {
            let marker = marker.unwrap_or(config.error_marker);
            let count = lines::extract_errors_file(&input, &output, &marker)?;
            println!("Total {}s found: {}", marker, count);
        }
        Command::Freq {
            input,
            output,
            punctuation,
            json,
        } => {
            let punctuation = punctuation.unwrap_or(config.punctuation);
            let table = frequency::frequency_file(&input, &output, &punctuation)?;
            if let Some(json_path) = json {
                export_frequency_json(&table, &json_path)?;
            }
            println!("{}", summary_line("Distinct words", table.len()));
        }
        Command::CsvFilter {
            input,
            output,
            column,
            column_name,
            threshold,
        } => {
            let column = match (column, column_name) {
                (Some(idx), _) => Column::Index(idx),
                (None, Some(name)) => Column::Name(name),
                (None, None) => config.sales_column,
            };
            let threshold = threshold.unwrap_or(config.sales_threshold);
            let outcome = sales::filter_csv_file(&input, &output, &column, threshold)?;
            println!(
                "{}",
                summary_line(
                    &format!("Rows with {} > {}", column, threshold),
                    outcome.rows.len()
                )
            );
        }
        Command::Merge { output, sources } => {
            merge::merge_files(&sources, &output)?;
            println!("{}", summary_line("Merged into", output.display()));
        }
        Command::Scan { dir, suffixes } => {
            let suffixes = if suffixes.is_empty() {
                config.scan_suffixes
            } else {
                suffixes
            };
            for name in scanner::scan_directory(&dir, &suffixes)? {
                println!("{}", name);
            }
        }
        Command::Seed { dir } => {
            for path in samples::seed(&dir)? {
                println!("{}", display_relative(&path, &dir));
            }
        }
    }

    Ok(())
}

fn display_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}
