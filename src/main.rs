//! Ad ROI Optimizer CLI
//!
//! Analyzes social media ad campaign data and recommends where to
//! shift budget for maximum ROI.

use ad_roi_optimizer::cache::DatasetCache;
use ad_roi_optimizer::commands::{
    display_schema, display_version, execute_analyze, execute_simulate, validate_args,
    validate_report_file, AnalyzeArgs, ShiftArgs, SimulateArgs,
};
use ad_roi_optimizer::filter::RecordFilter;
use ad_roi_optimizer::parser::{Dimension, Metric};
use ad_roi_optimizer::utils::config::DEFAULT_DIMENSIONS;
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

/// Ad ROI Optimizer - data-driven insights for maximum ROI
#[derive(Parser, Debug)]
#[command(name = "ad-optimizer")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Record selection shared by data commands
#[derive(Args, Debug)]
struct FilterOpts {
    /// First date to include (YYYY-MM-DD)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Last date to include (YYYY-MM-DD)
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Platforms to include (repeatable, default: all)
    #[arg(long = "platform", value_name = "PLATFORM")]
    platforms: Vec<String>,

    /// Campaign types to include (repeatable, default: all)
    #[arg(long = "campaign", value_name = "CAMPAIGN")]
    campaigns: Vec<String>,
}

impl From<FilterOpts> for RecordFilter {
    fn from(opts: FilterOpts) -> Self {
        RecordFilter::new()
            .with_date_range(opts.from, opts.to)
            .with_platforms(opts.platforms)
            .with_campaigns(opts.campaigns)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute metrics, rankings and recommendations for a dataset
    Analyze {
        /// Input CSV file with ad records
        #[arg(short, long, default_value = "ads_data.csv")]
        input: PathBuf,

        #[command(flatten)]
        filter: FilterOpts,

        /// Dimensions to break ROI down by (comma separated or repeated)
        #[arg(short, long = "dimension", value_delimiter = ',')]
        dimensions: Vec<Dimension>,

        /// Metric for the top performers table
        #[arg(short, long, default_value = "roi")]
        metric: Metric,

        /// Number of top performers to include
        #[arg(long, default_value = "10")]
        top: usize,

        /// Output path for JSON report
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export the filtered, enriched data to CSV
        #[arg(long)]
        export: Option<PathBuf>,

        /// TOML file overriding recommendation impact levels
        #[arg(long)]
        impact_config: Option<PathBuf>,

        /// Platform to simulate shifting budget to
        #[arg(long, requires = "shift")]
        shift_to: Option<String>,

        /// Percentage of current spend to shift (0-100)
        #[arg(long, requires = "shift_to")]
        shift: Option<f64>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Estimate additional revenue from shifting budget to a platform
    Simulate {
        /// Input CSV file with ad records
        #[arg(short, long, default_value = "ads_data.csv")]
        input: PathBuf,

        #[command(flatten)]
        filter: FilterOpts,

        /// Platform receiving the budget
        #[arg(long)]
        target: String,

        /// Percentage of current spend to shift (0-100)
        #[arg(long, default_value = "20")]
        shift: f64,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let mut cache = DatasetCache::new();

    // Execute command
    match cli.command {
        Commands::Analyze {
            input,
            filter,
            dimensions,
            metric,
            top,
            output,
            export,
            impact_config,
            shift_to,
            shift,
            summary,
        } => {
            let dimensions = if dimensions.is_empty() {
                DEFAULT_DIMENSIONS.to_vec()
            } else {
                dimensions
            };

            let budget_shift = match (shift_to, shift) {
                (Some(platform), Some(percent)) => Some(ShiftArgs { platform, percent }),
                _ => None,
            };

            let args = AnalyzeArgs {
                input,
                filter: filter.into(),
                dimensions,
                metric,
                top_n: top,
                output_json: output,
                export_csv: export,
                impact_config,
                budget_shift,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_analyze(&args, &mut cache)?;
        }

        Commands::Simulate {
            input,
            filter,
            target,
            shift,
        } => {
            let args = SimulateArgs {
                input,
                filter: filter.into(),
                shift: ShiftArgs {
                    platform: target,
                    percent: shift,
                },
            };

            execute_simulate(&args, &mut cache)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
