use ad_roi_optimizer::cache::DatasetCache;
use ad_roi_optimizer::commands::{
    execute_analyze, execute_simulate, load_dataset, AnalyzeArgs, ShiftArgs, SimulateArgs,
};
use ad_roi_optimizer::filter::RecordFilter;
use ad_roi_optimizer::output::read_report;
use ad_roi_optimizer::parser::{load_records, Dimension, Metric};
use ad_roi_optimizer::recommend::ImpactLevel;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const DATA: &str = "\
date,campaign,funnel_stage,ad_set,ad,creative_id,ad_type,platform,audience,audience_type,audience_size,impressions,clicks,spend,cpc,cpm,video_views,leads,conversions,revenue
2024-01-01,Conversions,Conversion,Set_1,Ad_1,Creative_1,Image,Facebook,Lookalike_Top_Spenders,Lookalike,Broad,1000,50,100.0,2.0,100.0,0,5,10,150.0
2024-01-01,Traffic,Consideration,Set_2,Ad_2,Creative_2,Video,TikTok,Broad_35-54_USA,Broad,Medium,500,20,200.0,10.0,400.0,0,2,5,100.0
2024-01-02,Conversions,Conversion,Set_1,Ad_3,Creative_3,Carousel,Instagram,Lookalike_Top_Spenders,Lookalike,Narrow,800,30,60.0,2.0,75.0,0,3,6,240.0
2024-01-03,Video_Views,Awareness,Set_3,Ad_4,Creative_4,Video,TikTok,Interest_In_Home_Fitness,Interest,Broad,1200,25,50.0,2.0,41.67,18,0,1,20.0
";

fn setup() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ads_data.csv");
    fs::write(&input, DATA).unwrap();
    (dir, input)
}

fn args_for(input: &Path) -> AnalyzeArgs {
    AnalyzeArgs {
        input: input.to_path_buf(),
        ..Default::default()
    }
}

#[test]
fn test_analyze_full_dataset() {
    let (_dir, input) = setup();
    let mut cache = DatasetCache::new();

    let report = execute_analyze(&args_for(&input), &mut cache).unwrap();

    assert_eq!(report.overview.record_count, 4);
    assert_eq!(report.dimensions.len(), 2);

    let platforms = report.dimension(Dimension::Platform).unwrap();
    assert_eq!(platforms.groups[0].value, "Instagram");
    assert_eq!(platforms.groups[0].roi, 3.0);

    assert_eq!(report.recommendations.len(), 3);
    assert_eq!(report.recommendations[0].action, "Increase budget on Instagram (ROI: 3.00)");
    assert_eq!(report.recommendations[1].target, "Conversions");
    assert_eq!(report.recommendations[2].target, "Lookalike_Top_Spenders");
    assert_eq!(report.recommendations[2].impact, ImpactLevel::Medium);

    assert_eq!(report.top_performers.rows.len(), 4);
    assert_eq!(report.top_performers.rows[0].platform, "Instagram");
    assert_eq!(report.daily_trend.len(), 3);
}

#[test]
fn test_analyze_with_filter_and_outputs() {
    let (dir, input) = setup();
    let mut cache = DatasetCache::new();
    let output = dir.path().join("out/report.json");
    let export = dir.path().join("out/filtered.csv");

    let args = AnalyzeArgs {
        filter: RecordFilter::new().with_platforms(vec!["TikTok".to_string()]),
        dimensions: vec![Dimension::Campaign, Dimension::AdType],
        metric: Metric::Spend,
        top_n: 1,
        output_json: Some(output.clone()),
        export_csv: Some(export.clone()),
        ..args_for(&input)
    };

    let report = execute_analyze(&args, &mut cache).unwrap();

    assert_eq!(report.overview.record_count, 2);
    assert_eq!(report.top_performers.rows.len(), 1);
    assert_eq!(report.top_performers.rows[0].value, 200.0);

    let written = read_report(&output).unwrap();
    assert_eq!(written.overview, report.overview);

    let exported = load_records(&export).unwrap();
    assert_eq!(exported.len(), 2);
    assert!(exported.iter().all(|r| r.platform == "TikTok"));
}

#[test]
fn test_analyze_empty_selection_has_no_recommendations() {
    let (_dir, input) = setup();
    let mut cache = DatasetCache::new();
    let args = AnalyzeArgs {
        filter: RecordFilter::new().with_date_range(NaiveDate::from_ymd_opt(2025, 1, 1), None),
        ..args_for(&input)
    };

    let report = execute_analyze(&args, &mut cache).unwrap();

    assert_eq!(report.overview.record_count, 0);
    assert!(report.recommendations.is_empty());
    assert!(report.dimensions.iter().all(|d| d.groups.is_empty()));
}

#[test]
fn test_analyze_with_impact_config() {
    let (dir, input) = setup();
    let config = dir.path().join("impact.toml");
    fs::write(&config, "audience = \"High\"\ncampaign = \"Low\"\n").unwrap();
    let mut cache = DatasetCache::new();

    let args = AnalyzeArgs {
        impact_config: Some(config),
        ..args_for(&input)
    };
    let report = execute_analyze(&args, &mut cache).unwrap();

    let impacts: Vec<ImpactLevel> = report.recommendations.iter().map(|r| r.impact).collect();
    assert_eq!(impacts, vec![ImpactLevel::High, ImpactLevel::Low, ImpactLevel::High]);
}

#[test]
fn test_analyze_budget_shift() {
    let (_dir, input) = setup();
    let mut cache = DatasetCache::new();
    let args = AnalyzeArgs {
        filter: RecordFilter::new().with_platforms(vec!["Facebook".to_string()]),
        budget_shift: Some(ShiftArgs {
            platform: "Instagram".to_string(),
            percent: 50.0,
        }),
        ..args_for(&input)
    };

    let report = execute_analyze(&args, &mut cache).unwrap();
    let shift = report.budget_shift.unwrap();

    assert_eq!(shift.current_spend, 100.0);
    assert_eq!(shift.target_roi, 3.0);
    assert_eq!(shift.additional_revenue, 150.0);
}

#[test]
fn test_dataset_cache_reuses_parsed_file() {
    let (_dir, input) = setup();
    let mut cache = DatasetCache::new();
    let tiktok = RecordFilter::new().with_platforms(vec!["TikTok".to_string()]);

    let first = load_dataset(&mut cache, &input, &tiktok).unwrap();
    assert_eq!(cache.misses(), 2);
    let campaigns: Vec<&str> = first.selected.iter().map(|r| r.record().campaign.as_str()).collect();
    assert_eq!(campaigns, vec!["Traffic", "Video_Views"]);

    let second = load_dataset(&mut cache, &input, &tiktok).unwrap();
    assert_eq!(cache.misses(), 2);
    assert_eq!(cache.hits(), 2);
    assert_eq!(first.selected.len(), second.selected.len());

    let everything = load_dataset(&mut cache, &input, &RecordFilter::new()).unwrap();
    assert_eq!(everything.selected.len(), 4);
    assert_eq!(cache.misses(), 2);
}

#[test]
fn test_simulate_command() {
    let (_dir, input) = setup();
    let mut cache = DatasetCache::new();
    let args = SimulateArgs {
        input,
        filter: RecordFilter::new(),
        shift: ShiftArgs {
            platform: "TikTok".to_string(),
            percent: 10.0,
        },
    };

    let outcome = execute_simulate(&args, &mut cache).unwrap();

    assert_eq!(outcome.current_spend, 410.0);
    assert!((outcome.target_roi - (120.0 - 250.0) / 250.0).abs() < 1e-12);
}

#[test]
fn test_analyze_missing_input() {
    let mut cache = DatasetCache::new();
    let args = args_for(Path::new("/no/such/dir/ads_data.csv"));

    assert!(execute_analyze(&args, &mut cache).is_err());
}
