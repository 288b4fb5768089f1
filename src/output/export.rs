//! CSV export of enriched records.
//!
//! Base columns keep the input layout so an export can be loaded again;
//! derived metric columns follow.

use super::{calculate_file_size, prepare_output_path};
use crate::parser::schema::EnrichedRecord;
use crate::utils::config::REQUIRED_COLUMNS;
use crate::utils::error::OutputError;
use csv::Writer;
use log::info;
use std::io::Write;
use std::path::Path;

const DERIVED_COLUMNS: &[&str] = &[
    "ctr",
    "conversion_rate",
    "roas",
    "cpa",
    "profit",
    "roi",
    "engagement_rate",
];

/// Export enriched records to a CSV file
///
/// **Public** - "export filtered data"
pub fn write_records_csv(records: &[EnrichedRecord], output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Exporting {} records to: {}", records.len(), output_path.display());

    prepare_output_path(output_path)?;

    let writer = Writer::from_path(output_path)?;
    write_records(writer, records)?;

    info!("Export written successfully ({} bytes)", calculate_file_size(output_path));

    Ok(())
}

/// Write enriched records to any CSV writer
pub fn write_records<W: Write>(mut writer: Writer<W>, records: &[EnrichedRecord]) -> Result<(), OutputError> {
    writer.write_record(REQUIRED_COLUMNS.iter().chain(DERIVED_COLUMNS.iter()))?;

    for enriched in records {
        writer.write_record(&to_row(enriched))?;
    }

    writer.flush()?;
    Ok(())
}

/// Render one record as CSV cells, in header order
fn to_row(enriched: &EnrichedRecord) -> Vec<String> {
    let r = enriched.record();
    let m = enriched.metrics();

    vec![
        r.date.to_string(),
        r.campaign.clone(),
        r.funnel_stage.clone(),
        r.ad_set.clone(),
        r.ad.clone(),
        r.creative_id.clone(),
        r.ad_type.clone(),
        r.platform.clone(),
        r.audience.clone(),
        r.audience_type.clone(),
        r.audience_size.clone(),
        r.impressions.to_string(),
        r.clicks.to_string(),
        r.spend.to_string(),
        r.cpc.to_string(),
        r.cpm.to_string(),
        r.video_views.to_string(),
        r.leads.to_string(),
        r.conversions.to_string(),
        r.revenue.to_string(),
        m.ctr.to_string(),
        m.conversion_rate.to_string(),
        m.roas.to_string(),
        m.cpa.to_string(),
        m.profit.to_string(),
        m.roi.to_string(),
        m.engagement_rate.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::compute_metrics;
    use crate::aggregator::metrics::tests::record;

    #[test]
    fn test_header_and_row() {
        let records = compute_metrics(&[record("A", 100.0, 150.0, 10, 50, 1000)]).unwrap();
        let mut buffer = Vec::new();
        write_records(Writer::from_writer(&mut buffer), &records).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();

        let header = lines.next().unwrap();
        assert!(header.starts_with("date,campaign,"));
        assert!(header.ends_with(",roi,engagement_rate"));

        let row = lines.next().unwrap();
        assert!(row.starts_with("2024-01-01,Conversions,"));
        assert!(row.contains(",0.5,"));
        assert!(lines.next().is_none());
    }
}
