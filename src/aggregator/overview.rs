//! Dataset-wide KPIs and the daily spend/revenue trend.

use super::metrics::ratio;
use crate::parser::schema::EnrichedRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Headline totals for a (filtered) dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceOverview {
    pub record_count: usize,
    pub total_spend: f64,
    pub total_revenue: f64,

    /// (revenue - spend) / spend over the whole set, 0 without spend
    pub overall_roi: f64,

    pub total_conversions: u64,
    pub total_impressions: u64,
    pub total_clicks: u64,
}

impl PerformanceOverview {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Records: {} | Spend: {:.2} | Revenue: {:.2} | ROI: {:.1}% | Conversions: {}",
            self.record_count,
            self.total_spend,
            self.total_revenue,
            self.overall_roi * 100.0,
            self.total_conversions
        )
    }

    pub fn is_profitable(&self) -> bool {
        self.total_revenue > self.total_spend
    }
}

/// Spend and revenue for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub spend: f64,
    pub revenue: f64,

    /// Arithmetic mean of the day's per-record ROI
    pub mean_roi: f64,
}

/// Compute headline totals
///
/// **Public** - KPI cards
pub fn summarize(records: &[EnrichedRecord]) -> PerformanceOverview {
    if records.is_empty() {
        return PerformanceOverview::default();
    }

    let mut overview = PerformanceOverview {
        record_count: records.len(),
        ..Default::default()
    };

    for enriched in records {
        let r = enriched.record();
        overview.total_spend += r.spend;
        overview.total_revenue += r.revenue;
        // Counters saturate instead of overflowing
        overview.total_conversions = overview.total_conversions.saturating_add(r.conversions);
        overview.total_impressions = overview.total_impressions.saturating_add(r.impressions);
        overview.total_clicks = overview.total_clicks.saturating_add(r.clicks);
    }

    overview.overall_roi = ratio(overview.total_revenue - overview.total_spend, overview.total_spend);
    overview
}

/// Per-day spend, revenue and mean ROI, ascending by date
///
/// **Public** - trend charts
pub fn daily_trend(records: &[EnrichedRecord]) -> Vec<DailyPoint> {
    // date -> (spend, revenue, roi sum, count)
    let mut days: BTreeMap<NaiveDate, (f64, f64, f64, usize)> = BTreeMap::new();

    for enriched in records {
        let r = enriched.record();
        let day = days.entry(r.date).or_insert((0.0, 0.0, 0.0, 0));
        day.0 += r.spend;
        day.1 += r.revenue;
        day.2 += enriched.metrics().roi;
        day.3 += 1;
    }

    days.into_iter()
        .map(|(date, (spend, revenue, roi_sum, count))| DailyPoint {
            date,
            spend,
            revenue,
            mean_roi: ratio(roi_sum, count as f64),
        })
        .collect()
}
