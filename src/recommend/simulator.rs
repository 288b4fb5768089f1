//! Budget reallocation simulator.
//!
//! Estimates the extra revenue from moving a share of the current spend
//! to one platform, assuming the platform keeps its historical ROI.

use super::schema::BudgetShiftOutcome;
use crate::aggregator::{aggregate_by_dimension, find_summary};
use crate::parser::schema::{Dimension, EnrichedRecord};
use crate::utils::error::AnalyticsError;
use log::debug;

/// Simulate shifting `shift_percent` of the current spend to `platform`
///
/// **Public** - what-if analysis
///
/// # Arguments
/// * `selection` - Records whose spend is being reallocated (usually filtered)
/// * `reference` - Records the platform ROI is measured on (usually unfiltered)
/// * `platform` - Platform receiving the budget
/// * `shift_percent` - Share of current spend to move, 0..=100
///
/// # Errors
/// * `AnalyticsError::InvalidParameter` - percentage out of range
/// * `AnalyticsError::EmptyDataset` - reference set is empty
/// * `AnalyticsError::UnknownValue` - platform absent from reference set
pub fn simulate_budget_shift(
    selection: &[EnrichedRecord],
    reference: &[EnrichedRecord],
    platform: &str,
    shift_percent: f64,
) -> Result<BudgetShiftOutcome, AnalyticsError> {
    if !(0.0..=100.0).contains(&shift_percent) {
        return Err(AnalyticsError::InvalidParameter(format!(
            "shift percentage must be between 0 and 100, got {}",
            shift_percent
        )));
    }

    if reference.is_empty() {
        return Err(AnalyticsError::EmptyDataset("simulate budget shift".to_string()));
    }

    let platforms = aggregate_by_dimension(reference, Dimension::Platform);
    let target = find_summary(&platforms, platform).ok_or_else(|| AnalyticsError::UnknownValue {
        dimension: Dimension::Platform.to_string(),
        value: platform.to_string(),
    })?;

    let current_spend: f64 = selection.iter().map(|r| r.record().spend).sum();
    let shifted_spend = current_spend * (shift_percent / 100.0);
    let additional_revenue = shifted_spend * target.roi;

    debug!(
        "Shifting {:.2} of {:.2} to {} at ROI {:.4}",
        shifted_spend, current_spend, platform, target.roi
    );

    Ok(BudgetShiftOutcome {
        platform: platform.to_string(),
        current_spend,
        shift_percent,
        shifted_spend,
        target_roi: target.roi,
        additional_revenue,
    })
}
