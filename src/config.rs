/// Configuration for the toolkit
///
/// Every threshold and default the utilities use lives here, so nothing is
/// hardcoded at the call sites. Values can be overridden from a JSON file.

use std::path::Path;

use log::{error, info};
use serde::Deserialize;

use crate::core::sales::Column;
use crate::error::{Result, ToolError};

/// Marks at or above this value pass
pub const DEFAULT_PASS_MARK: i64 = 50;
/// Header of the amount column in sales data
pub const DEFAULT_SALES_COLUMN: &str = "Amount";
/// Rows with an amount strictly above this are kept
pub const DEFAULT_SALES_THRESHOLD: i64 = 10_000;
pub const DEFAULT_ERROR_MARKER: &str = "ERROR";
/// Characters trimmed from the edges of each token
pub const DEFAULT_PUNCTUATION: &str = ".,!?\"'()";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pass_mark: i64,
    pub sales_column: Column,
    pub sales_threshold: i64,
    pub error_marker: String,
    pub punctuation: String,
    pub scan_suffixes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pass_mark: DEFAULT_PASS_MARK,
            sales_column: Column::Name(DEFAULT_SALES_COLUMN.to_string()),
            sales_threshold: DEFAULT_SALES_THRESHOLD,
            error_marker: DEFAULT_ERROR_MARKER.to_string(),
            punctuation: DEFAULT_PUNCTUATION.to_string(),
            scan_suffixes: vec![".txt".to_string(), ".csv".to_string()],
        }
    }
}

impl Config {
    /// Parse a configuration from JSON text; absent fields keep their defaults
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| ToolError::Config(e.to_string()))
    }

    /// Load configuration from file if provided
    ///
    /// A missing file is logged and the defaults are used. A file that exists
    /// but holds invalid JSON is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        if !path.exists() {
            error!("Configuration file not found: {}", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|e| ToolError::from_io(path, e))?;
        let config = Self::from_json(&text)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "pass_mark": 40 }"#).unwrap();
        assert_eq!(config.pass_mark, 40);
        assert_eq!(config.sales_threshold, DEFAULT_SALES_THRESHOLD);
        assert_eq!(config.scan_suffixes, vec![".txt", ".csv"]);
    }

    #[test]
    fn test_sales_column_by_index_or_name() {
        let config = Config::from_json(r#"{ "sales_column": 1 }"#).unwrap();
        assert_eq!(config.sales_column, Column::Index(1));
        let config = Config::from_json(r#"{ "sales_column": "Total" }"#).unwrap();
        assert_eq!(config.sales_column, Column::Name("Total".to_string()));
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = Config::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ToolError::Config(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = Config::load(Some(Path::new("definitely/not/here.json"))).unwrap();
        assert_eq!(config, Config::default());
    }
}
