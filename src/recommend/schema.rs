//! Recommendation data structures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse severity attached to a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ImpactLevel::Low => "Low",
            ImpactLevel::Medium => "Medium",
            ImpactLevel::High => "High",
        };
        f.write_str(s)
    }
}

/// Area a recommendation is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationType {
    Platform,
    Campaign,
    Audience,
}

impl fmt::Display for RecommendationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RecommendationType::Platform => "Platform",
            RecommendationType::Campaign => "Campaign",
            RecommendationType::Audience => "Audience",
        };
        f.write_str(s)
    }
}

/// One optimization suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationType,

    /// Human-readable action
    pub action: String,

    pub impact: ImpactLevel,

    /// Dimension value the action targets (e.g. "Instagram")
    pub target: String,

    /// ROI of the targeted group
    pub roi: f64,
}

impl Recommendation {
    /// One-line rendering, e.g. "Platform: Increase budget on X (ROI: 0.50) (High Impact)"
    pub fn headline(&self) -> String {
        format!("{}: {} ({} Impact)", self.kind, self.action, self.impact)
    }
}

/// Result of a budget reallocation what-if
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetShiftOutcome {
    pub platform: String,

    /// Spend of the filtered selection
    pub current_spend: f64,

    pub shift_percent: f64,

    /// Amount moved to the platform
    pub shifted_spend: f64,

    /// ROI of the platform over the reference dataset
    pub target_roi: f64,

    pub additional_revenue: f64,
}
