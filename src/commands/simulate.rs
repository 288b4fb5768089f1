//! Simulate command implementation.
//! Estimates the revenue effect of moving budget to one platform.

use super::models::SimulateArgs;
use super::utils::load_dataset;
use crate::cache::DatasetCache;
use crate::output::render_budget_shift;
use crate::recommend::{simulate_budget_shift, BudgetShiftOutcome};
use anyhow::{Context, Result};
use log::info;

/// Execute the simulate command
///
/// Spend is taken from the filtered selection; the platform ROI from the
/// whole dataset.
pub fn execute_simulate(args: &SimulateArgs, cache: &mut DatasetCache) -> Result<BudgetShiftOutcome> {
    // Step 1: Load data
    let dataset = load_dataset(cache, &args.input, &args.filter)?;

    // Step 2: Simulate
    info!(
        "Simulating a {:.0}% budget shift to {}",
        args.shift.percent, args.shift.platform
    );
    let outcome = simulate_budget_shift(
        &dataset.selected,
        &dataset.all,
        &args.shift.platform,
        args.shift.percent,
    )
    .context("Failed to simulate budget shift")?;

    // Step 3: Report
    println!("{}", render_budget_shift(&outcome));

    Ok(outcome)
}
