//! Output writers for analysis results.
//!
//! This module handles writing data in various formats:
//! - JSON reports
//! - CSV exports of the enriched table
//! - Colored terminal summaries

pub mod export;
pub mod json;
pub mod report;
pub mod terminal;

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

// Re-export main functions
pub use export::{write_records, write_records_csv};
pub use json::{read_report, write_report};
pub use report::{AnalysisReport, DimensionReport, TopPerformersReport};
pub use terminal::{format_currency, format_percent, render_budget_shift, render_terminal_summary};

/// Validate that an output path is writable
///
/// **Public** - shared by all writers
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Validate a path and create its parent directories
pub(crate) fn prepare_output_path(path: &Path) -> Result<(), OutputError> {
    validate_path(path)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!("Cannot create directory {}: {}", parent.display(), e))
            })?;
        }
    }

    Ok(())
}

/// File size in bytes, 0 if unavailable
pub(crate) fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
