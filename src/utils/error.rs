//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors raised by the analytics core (metrics, aggregation, recommendations)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// A required field is missing, non-numeric or of the wrong type
    #[error("Invalid data in row {row}, field '{field}': {reason}")]
    Data {
        /// 1-based data row (header excluded)
        row: usize,
        field: String,
        reason: String,
    },

    #[error("Cannot {0}: dataset is empty")]
    EmptyDataset(String),

    #[error("Unknown dimension: {0}")]
    InvalidDimension(String),

    #[error("Unknown metric: {0}")]
    InvalidMetric(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("No {dimension} named '{value}' in dataset")]
    UnknownValue { dimension: String, value: String },
}

impl AnalyticsError {
    /// Shorthand for a data error on a given row/field
    pub fn data(row: usize, field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Data {
            row,
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Errors that can occur while loading the ad dataset
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to open dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error(transparent)]
    Data(#[from] AnalyticsError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Failed to write CSV: {0}")]
    CsvFailed(#[from] csv::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while loading an impact configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Impact config TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
