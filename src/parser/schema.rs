//! Typed schema of the ad-campaign table.
//!
//! `AdRecord` mirrors one CSV row. `EnrichedRecord` pairs a record with the
//! metrics derived from it; it can only be built by the metrics calculator,
//! so derived values always match their base counters.

use crate::utils::error::AnalyticsError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// One row of raw campaign data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdRecord {
    pub date: NaiveDate,
    pub campaign: String,
    pub funnel_stage: String,
    pub ad_set: String,
    pub ad: String,
    pub creative_id: String,
    pub ad_type: String,
    pub platform: String,
    pub audience: String,
    pub audience_type: String,
    pub audience_size: String,

    pub impressions: u64,
    pub clicks: u64,
    pub spend: f64,
    pub cpc: f64,
    pub cpm: f64,
    pub video_views: u64,
    pub leads: u64,
    pub conversions: u64,
    pub revenue: f64,
}

/// Metrics derived from a single record's counters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DerivedMetrics {
    pub ctr: f64,
    pub conversion_rate: f64,
    pub roas: f64,
    pub cpa: f64,
    pub profit: f64,
    pub roi: f64,
    pub engagement_rate: f64,
}

/// A record together with its derived metrics
///
/// Fields are private: construct through `compute_metrics` or
/// `EnrichedRecord::from_record`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedRecord {
    #[serde(flatten)]
    pub(crate) record: AdRecord,

    #[serde(flatten)]
    pub(crate) metrics: DerivedMetrics,
}

impl EnrichedRecord {
    pub fn record(&self) -> &AdRecord {
        &self.record
    }

    pub fn metrics(&self) -> &DerivedMetrics {
        &self.metrics
    }
}

/// Categorical fields records can be grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Date,
    Campaign,
    FunnelStage,
    AdSet,
    Ad,
    CreativeId,
    AdType,
    Platform,
    Audience,
    AudienceType,
    AudienceSize,
}

impl Dimension {
    pub const ALL: [Dimension; 11] = [
        Dimension::Date,
        Dimension::Campaign,
        Dimension::FunnelStage,
        Dimension::AdSet,
        Dimension::Ad,
        Dimension::CreativeId,
        Dimension::AdType,
        Dimension::Platform,
        Dimension::Audience,
        Dimension::AudienceType,
        Dimension::AudienceSize,
    ];

    /// Column name of this dimension in the dataset
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Date => "date",
            Dimension::Campaign => "campaign",
            Dimension::FunnelStage => "funnel_stage",
            Dimension::AdSet => "ad_set",
            Dimension::Ad => "ad",
            Dimension::CreativeId => "creative_id",
            Dimension::AdType => "ad_type",
            Dimension::Platform => "platform",
            Dimension::Audience => "audience",
            Dimension::AudienceType => "audience_type",
            Dimension::AudienceSize => "audience_size",
        }
    }

    /// Human readable heading
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Date => "Date",
            Dimension::Campaign => "Campaign Type",
            Dimension::FunnelStage => "Funnel Stage",
            Dimension::AdSet => "Ad Set",
            Dimension::Ad => "Ad",
            Dimension::CreativeId => "Creative",
            Dimension::AdType => "Ad Type",
            Dimension::Platform => "Platform",
            Dimension::Audience => "Audience",
            Dimension::AudienceType => "Audience Type",
            Dimension::AudienceSize => "Audience Size",
        }
    }

    /// Value of this dimension on a record
    pub fn value_of<'a>(&self, record: &'a AdRecord) -> Cow<'a, str> {
        match self {
            Dimension::Date => Cow::Owned(record.date.to_string()),
            Dimension::Campaign => Cow::Borrowed(&record.campaign),
            Dimension::FunnelStage => Cow::Borrowed(&record.funnel_stage),
            Dimension::AdSet => Cow::Borrowed(&record.ad_set),
            Dimension::Ad => Cow::Borrowed(&record.ad),
            Dimension::CreativeId => Cow::Borrowed(&record.creative_id),
            Dimension::AdType => Cow::Borrowed(&record.ad_type),
            Dimension::Platform => Cow::Borrowed(&record.platform),
            Dimension::Audience => Cow::Borrowed(&record.audience),
            Dimension::AudienceType => Cow::Borrowed(&record.audience_type),
            Dimension::AudienceSize => Cow::Borrowed(&record.audience_size),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dimension {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Dimension::ALL
            .iter()
            .copied()
            .find(|d| d.name() == normalized)
            .ok_or_else(|| AnalyticsError::InvalidDimension(s.to_string()))
    }
}

/// Numeric columns a record can be ranked by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Roi,
    Roas,
    Ctr,
    ConversionRate,
    Cpa,
    Profit,
    EngagementRate,
    Spend,
    Revenue,
    Impressions,
    Clicks,
    Conversions,
    VideoViews,
    Leads,
}

impl Metric {
    pub const ALL: [Metric; 14] = [
        Metric::Roi,
        Metric::Roas,
        Metric::Ctr,
        Metric::ConversionRate,
        Metric::Cpa,
        Metric::Profit,
        Metric::EngagementRate,
        Metric::Spend,
        Metric::Revenue,
        Metric::Impressions,
        Metric::Clicks,
        Metric::Conversions,
        Metric::VideoViews,
        Metric::Leads,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Metric::Roi => "roi",
            Metric::Roas => "roas",
            Metric::Ctr => "ctr",
            Metric::ConversionRate => "conversion_rate",
            Metric::Cpa => "cpa",
            Metric::Profit => "profit",
            Metric::EngagementRate => "engagement_rate",
            Metric::Spend => "spend",
            Metric::Revenue => "revenue",
            Metric::Impressions => "impressions",
            Metric::Clicks => "clicks",
            Metric::Conversions => "conversions",
            Metric::VideoViews => "video_views",
            Metric::Leads => "leads",
        }
    }

    /// True for ratio metrics that read best as percentages
    pub fn is_ratio(&self) -> bool {
        matches!(
            self,
            Metric::Roi | Metric::Ctr | Metric::ConversionRate | Metric::EngagementRate
        )
    }

    /// Value of this metric on an enriched record
    pub fn value_of(&self, enriched: &EnrichedRecord) -> f64 {
        let r = &enriched.record;
        let m = &enriched.metrics;
        match self {
            Metric::Roi => m.roi,
            Metric::Roas => m.roas,
            Metric::Ctr => m.ctr,
            Metric::ConversionRate => m.conversion_rate,
            Metric::Cpa => m.cpa,
            Metric::Profit => m.profit,
            Metric::EngagementRate => m.engagement_rate,
            Metric::Spend => r.spend,
            Metric::Revenue => r.revenue,
            Metric::Impressions => r.impressions as f64,
            Metric::Clicks => r.clicks as f64,
            Metric::Conversions => r.conversions as f64,
            Metric::VideoViews => r.video_views as f64,
            Metric::Leads => r.leads as f64,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Metric::ALL
            .iter()
            .copied()
            .find(|m| m.name() == normalized)
            .ok_or_else(|| AnalyticsError::InvalidMetric(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_from_str() {
        assert_eq!("platform".parse::<Dimension>().unwrap(), Dimension::Platform);
        assert_eq!("Audience-Type".parse::<Dimension>().unwrap(), Dimension::AudienceType);
        assert_eq!(
            "region".parse::<Dimension>(),
            Err(AnalyticsError::InvalidDimension("region".to_string()))
        );
    }

    #[test]
    fn test_metric_from_str() {
        assert_eq!("roi".parse::<Metric>().unwrap(), Metric::Roi);
        assert_eq!("engagement_rate".parse::<Metric>().unwrap(), Metric::EngagementRate);
        assert!(matches!(
            "likes".parse::<Metric>(),
            Err(AnalyticsError::InvalidMetric(_))
        ));
    }

    #[test]
    fn test_dimension_names_round_trip() {
        for dim in Dimension::ALL {
            assert_eq!(dim.name().parse::<Dimension>().unwrap(), dim);
        }
    }
}
