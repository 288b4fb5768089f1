//! Group enriched records by a categorical dimension.
//!
//! Each group carries summed spend/revenue/conversions/clicks and
//! recomputed ROI, CPA and CTR. Groups come back ranked by ROI.

use super::metrics::ratio;
use crate::parser::schema::{Dimension, EnrichedRecord};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate performance of one dimension value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionSummary {
    /// Dimension the records were grouped by
    pub dimension: Dimension,

    /// Distinct value of that dimension
    pub value: String,

    /// Number of records in the group
    pub record_count: usize,

    pub spend: f64,
    pub revenue: f64,
    pub conversions: u64,
    pub clicks: u64,

    pub roi: f64,
    pub cpa: f64,

    /// Group clicks over impressions of the *whole* input
    pub ctr: f64,
}

/// Running sums for one group
#[derive(Default)]
struct GroupTotals {
    record_count: usize,
    spend: f64,
    revenue: f64,
    conversions: u64,
    clicks: u64,
}

/// Aggregate records by a dimension
///
/// **Public** - main entry point for dimensional analysis
///
/// # Arguments
/// * `records` - Enriched records (already filtered by the caller)
/// * `dimension` - Categorical field to group by
///
/// # Returns
/// One summary per distinct value, sorted by ROI (descending). Groups with
/// equal ROI keep ascending value order.
///
/// # Note
/// CTR divides the group's clicks by the impressions of all `records`, not
/// of the group. Callers comparing CTR across groups get click share of
/// total impressions.
pub fn aggregate_by_dimension(records: &[EnrichedRecord], dimension: Dimension) -> Vec<DimensionSummary> {
    debug!("Aggregating {} records by {}", records.len(), dimension);

    let total_impressions = records
        .iter()
        .fold(0u64, |acc, r| acc.saturating_add(r.record().impressions));

    // BTreeMap gives ascending key order, which is the tie-break order below
    let mut groups: BTreeMap<String, GroupTotals> = BTreeMap::new();
    for enriched in records {
        let record = enriched.record();
        let totals = groups
            .entry(dimension.value_of(record).into_owned())
            .or_default();

        totals.record_count += 1;
        totals.spend += record.spend;
        totals.revenue += record.revenue;
        totals.conversions = totals.conversions.saturating_add(record.conversions);
        totals.clicks = totals.clicks.saturating_add(record.clicks);
    }

    let mut summaries: Vec<DimensionSummary> = groups
        .into_iter()
        .map(|(value, totals)| DimensionSummary {
            dimension,
            value,
            record_count: totals.record_count,
            spend: totals.spend,
            revenue: totals.revenue,
            conversions: totals.conversions,
            clicks: totals.clicks,
            roi: ratio(totals.revenue - totals.spend, totals.spend),
            cpa: ratio(totals.spend, totals.conversions as f64),
            ctr: ratio(totals.clicks as f64, total_impressions as f64),
        })
        .collect();

    // Stable sort keeps key order among equal ROI
    summaries.sort_by(|a, b| b.roi.partial_cmp(&a.roi).unwrap_or(std::cmp::Ordering::Equal));

    debug!("Built {} {} groups", summaries.len(), dimension);

    summaries
}

/// Find one value's summary in an aggregation
///
/// **Public** - convenience lookup
pub fn find_summary<'a>(summaries: &'a [DimensionSummary], value: &str) -> Option<&'a DimensionSummary> {
    summaries.iter().find(|s| s.value == value)
}
