use crate::filter::RecordFilter;
use crate::parser::schema::{Dimension, Metric};
use crate::utils::config::{DEFAULT_DIMENSIONS, DEFAULT_TOP_N};
use std::path::PathBuf;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Input CSV with ad records
    pub input: PathBuf,

    /// Selection applied before analysis
    pub filter: RecordFilter,

    /// Dimensions to break ROI down by
    pub dimensions: Vec<Dimension>,

    /// Metric the top performers are ranked by
    pub metric: Metric,

    /// Number of top performers to include
    pub top_n: usize,

    /// Output path for JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Output path for CSV export of the filtered, enriched data (optional)
    pub export_csv: Option<PathBuf>,

    /// TOML file overriding recommendation impact levels (optional)
    pub impact_config: Option<PathBuf>,

    /// Optional budget reallocation to simulate
    pub budget_shift: Option<ShiftArgs>,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("ads_data.csv"),
            filter: RecordFilter::default(),
            dimensions: DEFAULT_DIMENSIONS.to_vec(),
            metric: Metric::Roi,
            top_n: DEFAULT_TOP_N,
            output_json: None,
            export_csv: None,
            impact_config: None,
            budget_shift: None,
            print_summary: false,
        }
    }
}

/// Budget reallocation parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftArgs {
    /// Platform receiving the budget
    pub platform: String,

    /// Share of current spend to move (0-100)
    pub percent: f64,
}

/// Arguments for the simulate command
#[derive(Debug, Clone)]
pub struct SimulateArgs {
    pub input: PathBuf,
    pub filter: RecordFilter,
    pub shift: ShiftArgs,
}
