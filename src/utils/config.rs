//! Configuration and constants for the CLI.

use crate::parser::schema::Dimension;

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default number of rows in the top performers table
pub const DEFAULT_TOP_N: usize = 10;
pub const MAX_TOP_N: usize = 1000;

/// Currency used when formatting monetary values
pub const CURRENCY_SYMBOL: &str = "₹";

/// Dimensions broken down by `analyze` when none are requested
pub const DEFAULT_DIMENSIONS: &[Dimension] = &[Dimension::Platform, Dimension::Campaign];

// Column names an input CSV must carry (order is irrelevant)
pub const REQUIRED_COLUMNS: &[&str] = &[
    "date",
    "campaign",
    "funnel_stage",
    "ad_set",
    "ad",
    "creative_id",
    "ad_type",
    "platform",
    "audience",
    "audience_type",
    "audience_size",
    "impressions",
    "clicks",
    "spend",
    "cpc",
    "cpm",
    "video_views",
    "leads",
    "conversions",
    "revenue",
];

/// Integer counter columns; integral floats such as `500.0` are accepted
pub const COUNT_COLUMNS: &[&str] = &["impressions", "clicks", "video_views", "leads", "conversions"];
