//! Per-record performance metrics.
//!
//! Every ratio is guarded: a zero denominator yields 0 rather than
//! infinity or NaN, since zero spend/clicks/impressions are routine in
//! sparse ad data.

use crate::parser::schema::{AdRecord, DerivedMetrics, EnrichedRecord};
use crate::utils::error::AnalyticsError;
use log::debug;

/// Enrich records with derived metrics
///
/// **Public** - main entry point for metrics calculation
///
/// # Arguments
/// * `records` - Raw ad records
///
/// # Returns
/// Enriched records, same length and order as the input
///
/// # Errors
/// * `AnalyticsError::Data` - a monetary field is NaN or infinite
pub fn compute_metrics(records: &[AdRecord]) -> Result<Vec<EnrichedRecord>, AnalyticsError> {
    debug!("Computing metrics for {} records", records.len());

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            validate_record(index + 1, record)?;
            Ok(EnrichedRecord::from_record(record.clone()))
        })
        .collect()
}

/// Derive all metrics from one record's counters
///
/// **Public** - pure formula, no validation
pub fn derive_metrics(record: &AdRecord) -> DerivedMetrics {
    let impressions = record.impressions as f64;
    let clicks = record.clicks as f64;
    let conversions = record.conversions as f64;
    let engagements = record
        .clicks
        .saturating_add(record.conversions)
        .saturating_add(record.video_views) as f64;

    DerivedMetrics {
        ctr: ratio(clicks, impressions),
        conversion_rate: ratio(conversions, clicks),
        roas: ratio(record.revenue, record.spend),
        cpa: ratio(record.spend, conversions),
        profit: record.revenue - record.spend,
        roi: ratio(record.revenue - record.spend, record.spend),
        engagement_rate: ratio(engagements, impressions),
    }
}

/// Divide, resolving a zero denominator to 0
pub(crate) fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

impl EnrichedRecord {
    /// Enrich a single record
    pub fn from_record(record: AdRecord) -> Self {
        let metrics = derive_metrics(&record);
        Self { record, metrics }
    }
}

/// Reject records whose monetary fields cannot take part in arithmetic
///
/// **Private** - count fields are unsigned integers and always valid
fn validate_record(row: usize, record: &AdRecord) -> Result<(), AnalyticsError> {
    let money = [
        ("spend", record.spend),
        ("revenue", record.revenue),
        ("cpc", record.cpc),
        ("cpm", record.cpm),
    ];

    for (field, value) in money {
        if !value.is_finite() {
            return Err(AnalyticsError::data(row, field, format!("not a finite number: {}", value)));
        }
    }

    Ok(())
}
