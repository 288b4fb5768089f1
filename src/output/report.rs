//! Analysis report written to JSON.
//!
//! Schema is versioned to allow future evolution.

use crate::aggregator::{DailyPoint, DimensionSummary, PerformanceOverview, TopPerformer};
use crate::filter::RecordFilter;
use crate::parser::schema::{Dimension, Metric};
use crate::recommend::{BudgetShiftOutcome, Recommendation};
use serde::{Deserialize, Serialize};

/// Top-level report structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the report was generated (RFC 3339)
    pub generated_at: String,

    /// Data source the report was computed from
    pub source: String,

    /// Selection applied before analysis
    pub filter: RecordFilter,

    pub overview: PerformanceOverview,

    pub daily_trend: Vec<DailyPoint>,

    /// One breakdown per requested dimension
    pub dimensions: Vec<DimensionReport>,

    pub top_performers: TopPerformersReport,

    /// Empty when the selection had no records
    pub recommendations: Vec<Recommendation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_shift: Option<BudgetShiftOutcome>,
}

/// Breakdown of one dimension, ranked by ROI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionReport {
    pub dimension: Dimension,
    pub groups: Vec<DimensionSummary>,
}

/// Ranked records for one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPerformersReport {
    pub metric: Metric,
    pub rows: Vec<TopPerformer>,
}

impl AnalysisReport {
    /// Breakdown for a dimension, if it was requested
    pub fn dimension(&self, dimension: Dimension) -> Option<&DimensionReport> {
        self.dimensions.iter().find(|d| d.dimension == dimension)
    }
}
