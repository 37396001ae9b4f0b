/// Integration tests for the file toolkit
///
/// These tests run each utility end to end against files in a temporary
/// directory and check the properties the outputs must satisfy.

use std::fs;
use std::path::Path;

use file_toolkit::config::Config;
use file_toolkit::core::sales::Column;
use file_toolkit::core::{frequency, lines, merge, report, sales, samples, scanner, transform};
use file_toolkit::ToolError;

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

#[test]
fn test_strip_blank_lines_file() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input = write(temp_dir.path(), "input.txt", "alpha\n\n  \nbeta\n\n\tgamma\n");
    let output = temp_dir.path().join("cleaned.txt");

    let kept = lines::strip_blank_lines_file(&input, &output).unwrap();
    assert_eq!(kept, 3);
    assert_eq!(fs::read_to_string(&output).unwrap(), "alpha\nbeta\n\tgamma\n");
}

#[test]
fn test_missing_input_is_file_not_found() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let err = lines::reverse_file(
        &temp_dir.path().join("quotes.txt"),
        &temp_dir.path().join("out.txt"),
    )
    .unwrap_err();
    assert!(matches!(err, ToolError::FileNotFound { .. }));
    assert!(!temp_dir.path().join("out.txt").exists());
}

#[test]
fn test_reverse_file_twice() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let original = "first quote\nsecond quote\nthird quote\n";
    let input = write(temp_dir.path(), "quotes.txt", original);
    let once = temp_dir.path().join("reversed.txt");
    let twice = temp_dir.path().join("restored.txt");

    lines::reverse_file(&input, &once).unwrap();
    assert_eq!(
        fs::read_to_string(&once).unwrap(),
        "third quote\nsecond quote\nfirst quote\n"
    );

    lines::reverse_file(&once, &twice).unwrap();
    assert_eq!(fs::read_to_string(&twice).unwrap(), original);
}

#[test]
fn test_replace_in_place() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let article = write(temp_dir.path(), "article.txt", "Python rocks. Python!");

    let count = transform::replace_in_file(&article, &article, "Python", "PYTHON").unwrap();
    assert_eq!(count, 2);
    assert_eq!(fs::read_to_string(&article).unwrap(), "PYTHON rocks. PYTHON!");
}

#[test]
fn test_uppercase_file() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input = write(temp_dir.path(), "input.txt", "mixed Case\ntext 123\n");
    let output = temp_dir.path().join("output.txt");

    transform::uppercase_file(&input, &output).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "MIXED CASE\nTEXT 123\n");
}

#[test]
fn test_student_report_file() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input = write(temp_dir.path(), "students.txt", "Alice,72\nBob,40\n");
    let output = temp_dir.path().join("report.txt");

    let entries = report::report_file(&input, &output, Config::default().pass_mark).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(fs::read_to_string(&output).unwrap(), "Alice: Pass\nBob: Fail\n");
}

#[test]
fn test_malformed_report_writes_nothing() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input = write(temp_dir.path(), "students.txt", "Alice,72\nBob,forty\n");
    let output = temp_dir.path().join("report.txt");

    let err = report::report_file(&input, &output, 50).unwrap_err();
    assert!(matches!(err, ToolError::Parse { line: 2, .. }));
    assert!(!output.exists());
}

#[test]
fn test_error_extraction_on_seeded_log() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    samples::seed(temp_dir.path()).unwrap();
    let output = temp_dir.path().join("errors_only.log");

    let count =
        lines::extract_errors_file(&temp_dir.path().join("server.log"), &output, "ERROR").unwrap();
    assert_eq!(count, 3);

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.lines().all(|line| line.starts_with("ERROR:")));
}

#[test]
fn test_word_frequency_file() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let story = "The cat sat. The cat ran!\n\"Run,\" said the dog -- (quickly).";
    let input = write(temp_dir.path(), "story.txt", story);
    let output = temp_dir.path().join("frequency.txt");

    let table = frequency::frequency_file(&input, &output, &Config::default().punctuation).unwrap();
    assert_eq!(table.get("the"), Some(3));
    assert_eq!(table.get("cat"), Some(2));
    assert_eq!(table.get("run"), Some(1));
    assert_eq!(table.get("--"), Some(1));
    assert_eq!(table.total() + table.discarded, story.split_whitespace().count());

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("the: 3\ncat: 2\nsat: 1\n"));
}

#[test]
fn test_csv_filter_on_seeded_sales() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    samples::seed(temp_dir.path()).unwrap();
    let output = temp_dir.path().join("high_sales.csv");
    let config = Config::default();

    let outcome = sales::filter_csv_file(
        &temp_dir.path().join("sales.csv"),
        &output,
        &config.sales_column,
        config.sales_threshold,
    )
    .unwrap();
    assert_eq!(outcome.rows.len(), 4);

    let written = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Date,Item,Amount",
            "2024-04-01,Laptop,95000",
            "2024-04-03,Monitor,12500",
            "2024-04-05,Chair,10500",
            "2024-04-07,Headphones,12000",
        ]
    );
}

#[test]
fn test_csv_filter_header_always_kept() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input = write(temp_dir.path(), "sales.csv", "Item,Amount\nPen,3\nCup,8\n");
    let output = temp_dir.path().join("high.csv");

    let outcome = sales::filter_csv_file(&input, &output, &Column::Index(1), 10_000).unwrap();
    assert!(outcome.rows.is_empty());
    assert_eq!(fs::read_to_string(&output).unwrap(), "Item,Amount\n");
}

#[test]
fn test_merge_files() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let sources = vec![
        write(temp_dir.path(), "a.txt", "A"),
        write(temp_dir.path(), "b.txt", "B"),
        write(temp_dir.path(), "c.txt", "C"),
    ];
    let output = temp_dir.path().join("merged.txt");

    merge::merge_files(&sources, &output).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "A\nB\nC\n");
}

#[test]
fn test_merge_missing_source_is_all_or_nothing() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = write(temp_dir.path(), "full_book.txt", "previous");
    let sources = vec![
        write(temp_dir.path(), "chapter1.txt", "one"),
        temp_dir.path().join("chapter2.txt"),
    ];

    let err = merge::merge_files(&sources, &output).unwrap_err();
    assert!(matches!(err, ToolError::FileNotFound { .. }));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
}

#[test]
fn test_scan_directory() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write(temp_dir.path(), "notes.txt", "");
    write(temp_dir.path(), "sales.csv", "");
    write(temp_dir.path(), "image.png", "");
    fs::create_dir(temp_dir.path().join("nested.txt")).unwrap();
    write(&temp_dir.path().join("nested.txt"), "deep.txt", "");

    let names = scanner::scan_directory(temp_dir.path(), &Config::default().scan_suffixes).unwrap();
    assert_eq!(names, vec!["notes.txt", "sales.csv"]);
}

#[test]
fn test_scan_missing_directory() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let err = scanner::scan_directory(&temp_dir.path().join("nope"), &[".txt"]).unwrap_err();
    assert!(matches!(err, ToolError::FileNotFound { .. }));
}
