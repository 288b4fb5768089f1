use ad_roi_optimizer::aggregator::{compute_metrics, PerformanceOverview};
use ad_roi_optimizer::filter::RecordFilter;
use ad_roi_optimizer::output::{
    read_report, render_terminal_summary, validate_path, write_records_csv, write_report,
    AnalysisReport, TopPerformersReport,
};
use ad_roi_optimizer::parser::{load_records, AdRecord, Metric};
use ad_roi_optimizer::recommend::{ImpactLevel, Recommendation, RecommendationType};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::NamedTempFile;

fn create_test_report() -> AnalysisReport {
    AnalysisReport {
        version: "1.0.0".to_string(),
        generated_at: "2024-01-01T00:00:00+00:00".to_string(),
        source: "ads_data.csv".to_string(),
        filter: RecordFilter::new().with_platforms(vec!["Instagram".to_string()]),
        overview: PerformanceOverview {
            record_count: 2,
            total_spend: 300.0,
            total_revenue: 450.0,
            overall_roi: 0.5,
            total_conversions: 12,
            total_impressions: 2000,
            total_clicks: 60,
        },
        daily_trend: vec![],
        dimensions: vec![],
        top_performers: TopPerformersReport {
            metric: Metric::Roi,
            rows: vec![],
        },
        recommendations: vec![Recommendation {
            kind: RecommendationType::Platform,
            action: "Increase budget on Instagram (ROI: 0.50)".to_string(),
            impact: ImpactLevel::High,
            target: "Instagram".to_string(),
            roi: 0.5,
        }],
        budget_shift: None,
    }
}

fn sample_record() -> AdRecord {
    AdRecord {
        date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        campaign: "Retargeting".to_string(),
        funnel_stage: "Conversion".to_string(),
        ad_set: "Set_4".to_string(),
        ad: "Ad_19".to_string(),
        creative_id: "Creative_8".to_string(),
        ad_type: "Carousel".to_string(),
        platform: "Instagram".to_string(),
        audience: "Custom_List_Past_Purchasers".to_string(),
        audience_type: "Custom_List".to_string(),
        audience_size: "Medium".to_string(),
        impressions: 1010,
        clicks: 24,
        spend: 9.12,
        cpc: 0.38,
        cpm: 9.03,
        video_views: 0,
        leads: 1,
        conversions: 2,
        revenue: 61.4,
    }
}

#[test]
fn test_write_and_read_report() {
    let report = create_test_report();
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    write_report(&report, path).unwrap();
    let loaded = read_report(path).unwrap();

    assert_eq!(loaded, report);
}

#[test]
fn test_report_json_field_names() {
    let json = serde_json::to_value(create_test_report()).unwrap();

    assert_eq!(json["recommendations"][0]["type"], "Platform");
    assert_eq!(json["recommendations"][0]["impact"], "High");
    assert_eq!(json["top_performers"]["metric"], "roi");
    assert_eq!(json["filter"]["platforms"][0], "Instagram");
    assert!(json.get("budget_shift").is_none());
}

#[test]
fn test_validate_output_path_empty() {
    let result = validate_path(Path::new(""));
    assert!(result.is_err());
}

#[test]
fn test_validate_output_path_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let result = validate_path(temp_dir.path());
    assert!(result.is_err());
}

#[test]
fn test_write_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/dirs/report.json");

    write_report(&create_test_report(), &nested_path).unwrap();

    assert!(nested_path.exists());
}

#[test]
fn test_export_can_be_loaded_again() {
    let enriched = compute_metrics(&[sample_record()]).unwrap();
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("filtered_ads_data.csv");

    write_records_csv(&enriched, &path).unwrap();
    let reloaded = load_records(&path).unwrap();

    assert_eq!(reloaded, vec![sample_record()]);
}

#[test]
fn test_terminal_summary_mentions_key_figures() {
    colored::control::set_override(false);
    let text = render_terminal_summary(&create_test_report());

    assert!(text.contains("₹300"));
    assert!(text.contains("₹450"));
    assert!(text.contains("50.0%"));
    assert!(text.contains("Platform: Increase budget on Instagram (ROI: 0.50) (High Impact)"));
}
