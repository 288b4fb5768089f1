//! CSV loader for the ad-campaign table.
//!
//! Reads a headered CSV into typed `AdRecord`s. Column order does not
//! matter and unknown columns are ignored, but every column listed in
//! `REQUIRED_COLUMNS` must be present. Counter cells written as integral
//! floats (`500.0`) are accepted.

use super::schema::AdRecord;
use crate::utils::config::{COUNT_COLUMNS, REQUIRED_COLUMNS};
use crate::utils::error::{AnalyticsError, ParseError};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Load ad records from a CSV file
///
/// **Public** - main entry point for dataset loading
///
/// # Errors
/// * `ParseError::Io` - File cannot be opened
/// * `ParseError::MissingColumn` - Header lacks a required column
/// * `ParseError::Data` - A cell is empty, non-numeric or not a date
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<AdRecord>, ParseError> {
    let path = path.as_ref();

    info!("Loading ad data from: {}", path.display());

    let file = File::open(path)?;
    let records = parse_records(BufReader::new(file))?;

    info!("Loaded {} records", records.len());

    Ok(records)
}

/// Parse ad records from any CSV reader
///
/// **Public** - useful for in-memory data and tests
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<AdRecord>, ParseError> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = rdr.headers()?.clone();
    validate_headers(&headers)?;

    let count_columns: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| COUNT_COLUMNS.contains(h))
        .map(|(i, _)| i)
        .collect();

    let mut records = Vec::new();
    for (index, result) in rdr.records().enumerate() {
        let row = index + 1;
        let raw = result.map_err(|e| to_data_error(row, e, &headers))?;
        let normalized = normalize_counts(&raw, &count_columns);

        let record: AdRecord = normalized
            .as_ref()
            .unwrap_or(&raw)
            .deserialize(Some(&headers))
            .map_err(|e| to_data_error(row, e, &headers))?;
        records.push(record);
    }

    debug!("Parsed {} rows with {} columns", records.len(), headers.len());

    Ok(records)
}

/// Check that every required column is present in the header
///
/// **Private** - internal validation
fn validate_headers(headers: &StringRecord) -> Result<(), ParseError> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(ParseError::MissingColumn(column.to_string()));
        }
    }
    Ok(())
}

/// Rewrite integral float counters (`500.0`) as integers
///
/// Returns `None` when the row needs no change. Anything that is not an
/// integral, non-negative float is left for the deserializer to reject.
fn normalize_counts(raw: &StringRecord, count_columns: &[usize]) -> Option<StringRecord> {
    let needs_rewrite = count_columns
        .iter()
        .any(|&i| raw.get(i).and_then(integral_count).is_some());
    if !needs_rewrite {
        return None;
    }

    Some(
        raw.iter()
            .enumerate()
            .map(|(i, cell)| {
                if count_columns.contains(&i) {
                    integral_count(cell).unwrap_or_else(|| cell.to_string())
                } else {
                    cell.to_string()
                }
            })
            .collect(),
    )
}

fn integral_count(cell: &str) -> Option<String> {
    if cell.parse::<u64>().is_ok() {
        return None;
    }

    let value: f64 = cell.parse().ok()?;
    let integral = value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64;
    integral.then(|| (value as u64).to_string())
}

/// Turn a row-level failure into a DataError
///
/// A short row names the first missing column. I/O failures stay CSV errors.
fn to_data_error(row: usize, err: csv::Error, headers: &StringRecord) -> ParseError {
    match err.kind() {
        csv::ErrorKind::UnequalLengths { expected_len, len, .. } => {
            let field = headers.get(*len as usize).unwrap_or("unknown");
            let reason = format!("row has {} cells, header has {}", len, expected_len);
            AnalyticsError::data(row, field, reason).into()
        }
        csv::ErrorKind::Deserialize { err: de, .. } => {
            let field = de
                .field()
                .and_then(|i| headers.get(i as usize))
                .unwrap_or("unknown");
            AnalyticsError::data(row, field, de.kind().to_string()).into()
        }
        _ => ParseError::Csv(err),
    }
}
