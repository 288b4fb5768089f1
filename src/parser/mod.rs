//! Dataset loading and schema definitions.
//!
//! This module handles:
//! - Reading the ad-campaign CSV table
//! - Reporting malformed cells as data errors
//! - Defining the record, dimension and metric types

pub mod ad_data;
pub mod schema;

// Re-export main types
pub use ad_data::{load_records, parse_records};
pub use schema::{AdRecord, DerivedMetrics, Dimension, EnrichedRecord, Metric};
