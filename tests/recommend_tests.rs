use ad_roi_optimizer::aggregator::compute_metrics;
use ad_roi_optimizer::parser::{AdRecord, Dimension, Metric};
use ad_roi_optimizer::recommend::{
    generate_recommendations, load_impact_config, ImpactLevel, RecommendationType,
};
use ad_roi_optimizer::utils::error::{AnalyticsError, ConfigError};
use chrono::NaiveDate;
use std::io::Write;
use tempfile::NamedTempFile;

fn record(platform: &str, audience: &str, spend: f64, revenue: f64) -> AdRecord {
    AdRecord {
        date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        campaign: "Lead_Generation".to_string(),
        funnel_stage: "Consideration".to_string(),
        ad_set: "Set_5".to_string(),
        ad: "Ad_3".to_string(),
        creative_id: "Creative_11".to_string(),
        ad_type: "Image".to_string(),
        platform: platform.to_string(),
        audience: audience.to_string(),
        audience_type: "Interest".to_string(),
        audience_size: "Medium".to_string(),
        impressions: 1000,
        clicks: 20,
        spend,
        cpc: 0.5,
        cpm: 10.0,
        video_views: 0,
        leads: 2,
        conversions: 1,
        revenue,
    }
}

#[test]
fn test_only_profitable_platform_is_recommended() {
    let enriched = compute_metrics(&[
        record("Facebook", "Interest_In_Fashion", 100.0, 80.0),
        record("X", "Interest_In_Tech_Gadgets", 40.0, 100.0),
        record("LinkedIn", "Interest_In_Fashion", 120.0, 30.0),
    ])
    .unwrap();

    let recs = generate_recommendations(&enriched).unwrap();

    let kinds: Vec<RecommendationType> = recs.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![
            RecommendationType::Platform,
            RecommendationType::Campaign,
            RecommendationType::Audience
        ]
    );
    assert_eq!(recs[0].target, "X");
    assert_eq!(recs[0].action, "Increase budget on X (ROI: 1.50)");
    assert_eq!(recs[2].target, "Interest_In_Tech_Gadgets");
}

#[test]
fn test_losing_dataset_still_recommends_least_bad() {
    let enriched = compute_metrics(&[
        record("Facebook", "Broad_18-34_INDIA", 100.0, 50.0),
        record("TikTok", "Broad_18-34_INDIA", 100.0, 90.0),
    ])
    .unwrap();

    let recs = generate_recommendations(&enriched).unwrap();

    assert_eq!(recs[0].target, "TikTok");
    assert_eq!(recs[0].action, "Increase budget on TikTok (ROI: -0.10)");
}

#[test]
fn test_empty_input_is_rejected() {
    let result = generate_recommendations(&[]);
    assert!(matches!(result, Err(AnalyticsError::EmptyDataset(_))));
}

#[test]
fn test_impact_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "platform = \"Medium\"").unwrap();
    file.flush().unwrap();

    let config = load_impact_config(file.path()).unwrap();

    assert_eq!(config.impact_for(RecommendationType::Platform), ImpactLevel::Medium);
    assert_eq!(config.impact_for(RecommendationType::Campaign), ImpactLevel::High);
    assert_eq!(config.impact_for(RecommendationType::Audience), ImpactLevel::Medium);
}

#[test]
fn test_impact_config_missing_file() {
    let result = load_impact_config("/no/such/impact.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_unknown_names_are_rejected() {
    match "country".parse::<Dimension>() {
        Err(AnalyticsError::InvalidDimension(name)) => assert_eq!(name, "country"),
        other => panic!("expected invalid dimension, got {:?}", other),
    }

    assert!(matches!(
        "likes".parse::<Metric>(),
        Err(AnalyticsError::InvalidMetric(_))
    ));
}
