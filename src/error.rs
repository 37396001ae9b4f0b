/// Error types shared by every utility in the toolkit

use std::io;
use std::path::{Path, PathBuf};

/// Errors raised while reading, transforming or writing files
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// The source path does not exist
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// A numeric field or record could not be parsed
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Any other filesystem failure (permissions, disk, ...)
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ToolError>;

impl ToolError {
    /// Classify an I/O error raised while touching `path`
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            ToolError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ToolError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        ToolError::Parse {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_classified() {
        let err = ToolError::from_io(
            Path::new("missing.txt"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, ToolError::FileNotFound { .. }));
        assert_eq!(err.to_string(), "File not found: missing.txt");
    }

    #[test]
    fn test_json_errors_have_own_variant() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ToolError::from(source);
        assert!(matches!(err, ToolError::Json(_)));
        assert!(err.to_string().starts_with("JSON error: "));
    }

    #[test]
    fn test_other_io_errors_keep_source() {
        let err = ToolError::from_io(
            Path::new("locked.txt"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, ToolError::Io { .. }));
    }
}
