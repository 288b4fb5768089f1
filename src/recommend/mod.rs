//! Optimization recommendations and budget what-ifs.
//!
//! # Example
//! ```ignore
//! use ad_roi_optimizer::recommend::{generate_recommendations, load_impact_config};
//!
//! let enriched = compute_metrics(&records)?;
//! let recommendations = generate_recommendations(&enriched)?;
//! for rec in &recommendations {
//!     println!("{}", rec.headline());
//! }
//! ```

mod config;
mod engine;
mod schema;
mod simulator;

// Public API exports
pub use config::{load_impact_config, ImpactConfig};
pub use engine::{dimension_for, generate_recommendations, generate_recommendations_with};
pub use schema::{BudgetShiftOutcome, ImpactLevel, Recommendation, RecommendationType};
pub use simulator::simulate_budget_shift;
