//! Select the highest-scoring records by a metric.

use crate::parser::schema::{EnrichedRecord, Metric};
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Display row for a selected record
///
/// Carries the columns a ranking table shows; the full record is
/// available from `top_performers` itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPerformer {
    /// 1-based position in the ranking
    pub rank: usize,
    pub campaign: String,
    pub platform: String,
    pub audience: String,
    pub metric: Metric,
    pub value: f64,
    pub spend: f64,
    pub revenue: f64,
}

/// Return the `n` records with the largest `metric` value
///
/// **Public** - main entry point for ranking
///
/// Records with equal values keep their input order. Asking for more rows
/// than exist returns every row.
pub fn top_performers(records: &[EnrichedRecord], metric: Metric, n: usize) -> Vec<EnrichedRecord> {
    debug!("Selecting top {} of {} records by {}", n, records.len(), metric);

    let mut ranked: Vec<&EnrichedRecord> = records.iter().collect();

    // sort_by is stable, so ties stay in input order
    ranked.sort_by(|a, b| {
        metric
            .value_of(b)
            .partial_cmp(&metric.value_of(a))
            .unwrap_or(Ordering::Equal)
    });

    ranked.into_iter().take(n).cloned().collect()
}

/// Project ranked records into display rows
///
/// **Public** - used when building reports
pub fn to_top_performer_rows(records: &[EnrichedRecord], metric: Metric) -> Vec<TopPerformer> {
    records
        .iter()
        .enumerate()
        .map(|(i, enriched)| {
            let r = enriched.record();
            TopPerformer {
                rank: i + 1,
                campaign: r.campaign.clone(),
                platform: r.platform.clone(),
                audience: r.audience.clone(),
                metric,
                value: metric.value_of(enriched),
                spend: r.spend,
                revenue: r.revenue,
            }
        })
        .collect()
}
