//! Impact level configuration.
//!
//! Impact labels are fixed per recommendation type. The defaults are
//! High/High/Medium; a TOML file may override any of them:
//!
//! ```toml
//! platform = "High"
//! campaign = "Medium"
//! audience = "Low"
//! ```

use super::schema::{ImpactLevel, RecommendationType};
use crate::utils::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Impact label per recommendation type
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ImpactConfig {
    pub platform: ImpactLevel,
    pub campaign: ImpactLevel,
    pub audience: ImpactLevel,
}

impl Default for ImpactConfig {
    fn default() -> Self {
        Self {
            platform: ImpactLevel::High,
            campaign: ImpactLevel::High,
            audience: ImpactLevel::Medium,
        }
    }
}

impl ImpactConfig {
    pub fn impact_for(&self, kind: RecommendationType) -> ImpactLevel {
        match kind {
            RecommendationType::Platform => self.platform,
            RecommendationType::Campaign => self.campaign,
            RecommendationType::Audience => self.audience,
        }
    }
}

/// Load impact levels from a TOML file
///
/// Missing keys fall back to the defaults.
///
/// # Errors
/// * `ConfigError::Io` - If file cannot be read
/// * `ConfigError::Toml` - If TOML is invalid
pub fn load_impact_config(path: impl AsRef<Path>) -> Result<ImpactConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: ImpactConfig = toml::from_str(&contents)?;
    Ok(config)
}
