//! Ad ROI Optimizer
//!
//! Performance analytics for social media ad campaigns: per-record
//! ROI/CTR/CPA, ROI rankings by platform, campaign and audience, top
//! performers and budget recommendations.
//!
//! This crate provides the core implementation for the
//! `ad-optimizer` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! ad-optimizer analyze --input ads_data.csv --summary
//! ad-optimizer --help
//! ```
//!
//! ## Library use
//!
//! ```ignore
//! use ad_roi_optimizer::aggregator::{aggregate_by_dimension, compute_metrics};
//! use ad_roi_optimizer::parser::{load_records, Dimension};
//!
//! let records = load_records("ads_data.csv")?;
//! let enriched = compute_metrics(&records)?;
//! let by_platform = aggregate_by_dimension(&enriched, Dimension::Platform);
//! ```

pub mod aggregator;
pub mod cache;
pub mod commands;
pub mod filter;
pub mod output;
pub mod parser;
pub mod recommend;
pub mod utils;
