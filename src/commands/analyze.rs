//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Loads and enriches the ad data
//! 2. Applies the filter
//! 3. Aggregates by the requested dimensions
//! 4. Ranks top performers
//! 5. Generates recommendations
//! 6. Writes output files

use super::models::AnalyzeArgs;
use super::utils::{load_dataset, Dataset};
use crate::aggregator::{aggregate_by_dimension, daily_trend, summarize, to_top_performer_rows, top_performers};
use crate::cache::DatasetCache;
use crate::output::{render_terminal_summary, write_records_csv, write_report};
use crate::output::{AnalysisReport, DimensionReport, TopPerformersReport};
use crate::parser::schema::EnrichedRecord;
use crate::recommend::{generate_recommendations_with, load_impact_config, simulate_budget_shift, ImpactConfig};
use crate::utils::config::{MAX_TOP_N, SCHEMA_VERSION};
use crate::utils::error::AnalyticsError;
use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Analyze command arguments
/// * `cache` - Dataset cache shared across calls
///
/// # Returns
/// The report that was rendered/written
///
/// # Errors
/// * Missing or malformed input data
/// * Invalid impact configuration
/// * File write errors
pub fn execute_analyze(args: &AnalyzeArgs, cache: &mut DatasetCache) -> Result<AnalysisReport> {
    let start_time = Instant::now();

    info!("Starting analysis of: {}", args.input.display());

    // Step 1: Load data
    info!("Step 1/4: Loading and enriching ad data...");
    let dataset = load_dataset(cache, &args.input, &args.filter)?;

    if dataset.selected.is_empty() {
        warn!("No records match the current filter");
    }

    // Step 2: Impact levels
    let impacts = match &args.impact_config {
        Some(path) => load_impact_config(path)
            .with_context(|| format!("Failed to load impact config {}", path.display()))?,
        None => ImpactConfig::default(),
    };

    // Step 3: Build report
    info!("Step 2/4: Aggregating {} records...", dataset.selected.len());
    let report = build_report(args, &dataset, &impacts).context("Failed to build report")?;
    info!("Overview: {}", report.overview.summary());
    for rec in &report.recommendations {
        debug!("{}", rec.headline());
    }

    // Step 4: Write outputs
    info!("Step 3/4: Writing output files...");
    if let Some(path) = &args.output_json {
        write_report(&report, path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }

    if let Some(path) = &args.export_csv {
        write_records_csv(&dataset.selected, path).context("Failed to export filtered data")?;
        info!("✓ Filtered data exported to: {}", path.display());
    }

    info!("Step 4/4: Rendering summary...");
    if args.print_summary {
        println!("{}", render_terminal_summary(&report));
    }

    let elapsed = start_time.elapsed();
    info!("Analysis completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Compute every report section from a loaded dataset
///
/// **Public** - usable without touching the filesystem
pub fn build_report(
    args: &AnalyzeArgs,
    dataset: &Dataset,
    impacts: &ImpactConfig,
) -> Result<AnalysisReport, AnalyticsError> {
    let selected: &[EnrichedRecord] = &dataset.selected;

    let dimensions = args
        .dimensions
        .iter()
        .map(|&dimension| DimensionReport {
            dimension,
            groups: aggregate_by_dimension(selected, dimension),
        })
        .collect();

    let ranked = top_performers(selected, args.metric, args.top_n);
    debug!("Top performer by {}: {:?}", args.metric, ranked.first().map(|r| &r.record().campaign));

    // An empty selection has no best group; the report shows no recommendations
    let recommendations = if selected.is_empty() {
        Vec::new()
    } else {
        generate_recommendations_with(selected, impacts)?
    };

    let budget_shift = match &args.budget_shift {
        Some(shift) => Some(simulate_budget_shift(selected, &dataset.all, &shift.platform, shift.percent)?),
        None => None,
    };

    Ok(AnalysisReport {
        version: SCHEMA_VERSION.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        source: args.input.display().to_string(),
        filter: args.filter.clone(),
        overview: summarize(selected),
        daily_trend: daily_trend(selected),
        dimensions,
        top_performers: TopPerformersReport {
            metric: args.metric,
            rows: to_top_performer_rows(&ranked, args.metric),
        },
        recommendations,
        budget_shift,
    })
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.top_n == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if args.top_n > MAX_TOP_N {
        anyhow::bail!("top is too large (max {})", MAX_TOP_N);
    }

    if args.dimensions.is_empty() {
        anyhow::bail!("At least one dimension is required");
    }

    if let (Some(start), Some(end)) = (args.filter.start_date, args.filter.end_date) {
        if start > end {
            anyhow::bail!("Start date {} is after end date {}", start, end);
        }
    }

    if let Some(shift) = &args.budget_shift {
        if !(0.0..=100.0).contains(&shift.percent) {
            anyhow::bail!("Shift percentage must be between 0 and 100");
        }
    }

    Ok(())
}
