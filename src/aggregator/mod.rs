//! Metrics calculation and aggregation over the ad table.
//!
//! This module transforms raw ad records into:
//! - Enriched records (per-row ROI, CTR, CPA, ...)
//! - Per-dimension summaries ranked by ROI
//! - Top performer rankings
//! - Dataset KPIs and daily trends

pub mod dimension;
pub mod metrics;
pub mod overview;
pub mod top_performers;

// Re-export main types and functions
pub use dimension::{aggregate_by_dimension, find_summary, DimensionSummary};
pub use metrics::{compute_metrics, derive_metrics};
pub use overview::{daily_trend, summarize, DailyPoint, PerformanceOverview};
pub use top_performers::{to_top_performer_rows, top_performers, TopPerformer};
