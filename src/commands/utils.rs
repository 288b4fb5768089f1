use crate::aggregator::compute_metrics;
use crate::cache::{CacheKey, DatasetCache};
use crate::filter::RecordFilter;
use crate::output::read_report;
use crate::parser::load_records;
use crate::parser::schema::EnrichedRecord;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Full and filtered views of one dataset
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Every record in the source
    pub all: Arc<[EnrichedRecord]>,

    /// Records matching the filter
    pub selected: Arc<[EnrichedRecord]>,
}

/// Load, enrich and filter a CSV through the cache
///
/// The unfiltered table is cached under an empty filter so several
/// selections over one file only parse it once.
pub fn load_dataset(cache: &mut DatasetCache, input: &Path, filter: &RecordFilter) -> Result<Dataset> {
    let all_key = CacheKey::for_file(input, &RecordFilter::default())
        .with_context(|| format!("Cannot read dataset {}", input.display()))?;

    let all = cache.get_or_try_insert_with(all_key, || -> Result<Vec<EnrichedRecord>> {
        let records = load_records(input).context("Failed to load ad data")?;
        let enriched = compute_metrics(&records).context("Failed to compute metrics")?;
        Ok(enriched)
    })?;

    if filter.is_empty() {
        return Ok(Dataset {
            selected: Arc::clone(&all),
            all,
        });
    }

    let selected_key = CacheKey::for_file(input, filter)?;
    let selected = cache.get_or_try_insert_with(selected_key, || -> Result<Vec<EnrichedRecord>> {
        Ok(filter.apply(&all))
    })?;

    debug!("Selected {} of {} records", selected.len(), all.len());

    Ok(Dataset { all, selected })
}

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    if report.version != SCHEMA_VERSION {
        anyhow::bail!(
            "Unsupported report version {} (expected {})",
            report.version,
            SCHEMA_VERSION
        );
    }

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Records: {}", report.overview.record_count);
    println!("  Dimensions: {}", report.dimensions.len());
    println!("  Top Performers: {}", report.top_performers.rows.len());
    println!("  Recommendations: {}", report.recommendations.len());

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Ad ROI Optimizer Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  generated_at: string       - RFC 3339 timestamp");
        println!("  source: string             - Input dataset path");
        println!("  filter: object             - Date range, platforms, campaigns applied");
        println!("  overview: object           - Total spend/revenue/conversions, overall ROI");
        println!("  daily_trend: array         - Per-day spend, revenue, mean ROI");
        println!("  dimensions: array          - ROI breakdown per dimension");
        println!("    dimension: string        - Grouping field (platform, campaign, ...)");
        println!("    groups: array            - One entry per value, sorted by ROI");
        println!("  top_performers: object     - Records ranked by a metric");
        println!("    metric: string           - Ranking metric");
        println!("    rows: array              - rank, campaign, platform, audience, value, spend, revenue");
        println!("  recommendations: array     - type, action, impact (Low/Medium/High)");
        println!("  budget_shift: object?      - Budget reallocation estimate (if requested)");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Ad ROI Optimizer v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("ROI, CTR and CPA analytics with budget recommendations for ad campaigns.");
}
