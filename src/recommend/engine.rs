//! Core recommendation logic.
//!
//! Aggregates by platform, campaign and audience and turns the top group
//! of each into an action.

use super::config::ImpactConfig;
use super::schema::{Recommendation, RecommendationType};
use crate::aggregator::{aggregate_by_dimension, DimensionSummary};
use crate::parser::schema::{Dimension, EnrichedRecord};
use crate::utils::error::AnalyticsError;
use log::{debug, info};

/// Generate recommendations with the default impact levels
///
/// **Public** - main entry point
///
/// # Returns
/// Exactly three recommendations: Platform, Campaign, Audience
///
/// # Errors
/// * `AnalyticsError::EmptyDataset` - there is no best group to pick
pub fn generate_recommendations(records: &[EnrichedRecord]) -> Result<Vec<Recommendation>, AnalyticsError> {
    generate_recommendations_with(records, &ImpactConfig::default())
}

/// Generate recommendations with custom impact levels
pub fn generate_recommendations_with(
    records: &[EnrichedRecord],
    impacts: &ImpactConfig,
) -> Result<Vec<Recommendation>, AnalyticsError> {
    if records.is_empty() {
        return Err(AnalyticsError::EmptyDataset("generate recommendations".to_string()));
    }

    info!("Generating recommendations from {} records", records.len());

    let kinds = [
        RecommendationType::Platform,
        RecommendationType::Campaign,
        RecommendationType::Audience,
    ];

    kinds
        .into_iter()
        .map(|kind| {
            let dimension = dimension_for(kind);
            let summaries = aggregate_by_dimension(records, dimension);
            let best = best_group(&summaries, dimension)?;

            debug!("Best {}: {} (ROI {:.4})", dimension, best.value, best.roi);

            Ok(Recommendation {
                kind,
                action: action_text(kind, best),
                impact: impacts.impact_for(kind),
                target: best.value.clone(),
                roi: best.roi,
            })
        })
        .collect()
}

/// Dimension inspected for a recommendation type
pub fn dimension_for(kind: RecommendationType) -> Dimension {
    match kind {
        RecommendationType::Platform => Dimension::Platform,
        RecommendationType::Campaign => Dimension::Campaign,
        RecommendationType::Audience => Dimension::Audience,
    }
}

/// First summary of an ROI-sorted aggregation
///
/// **Private** - internal helper
fn best_group(summaries: &[DimensionSummary], dimension: Dimension) -> Result<&DimensionSummary, AnalyticsError> {
    summaries
        .first()
        .ok_or_else(|| AnalyticsError::EmptyDataset(format!("pick best {}", dimension)))
}

/// Action wording per recommendation type
fn action_text(kind: RecommendationType, best: &DimensionSummary) -> String {
    match kind {
        RecommendationType::Platform => {
            format!("Increase budget on {} (ROI: {:.2})", best.value, best.roi)
        }
        RecommendationType::Campaign => {
            format!("Focus on {} campaigns (ROI: {:.2})", best.value, best.roi)
        }
        RecommendationType::Audience => {
            format!("Target {} audience more aggressively", best.value)
        }
    }
}
