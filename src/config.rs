//! @ai:module:intent Configuration structs for the recommender
//! @ai:module:layer infrastructure
//! @ai:module:public_api RecommenderConfig, ScoringConfig, PathConfig
//! @ai:module:stateless true

use crate::error::Result;
use crate::scoring::MetricWeights;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// @ai:intent Main configuration for the recommender
/// @ai:effects pure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommenderConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub paths: PathConfig,
}

/// @ai:intent Tunables of the scoring engine and reason composer
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// p-value below which the top-two difference is called significant
    #[serde(default = "default_significance_level")]
    pub significance_level: f64,
    /// Slider value at which a preference counts as prioritised
    #[serde(default = "default_priority_threshold")]
    pub priority_threshold: f64,
    /// Slider value of the neutral baseline profile
    #[serde(default = "default_neutral_preference")]
    pub neutral_preference: f64,
    /// Weight profile used when no preference slider is supplied
    #[serde(default)]
    pub default_weights: MetricWeights,
}

/// @ai:intent Path configuration for input data
/// @ai:effects pure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathConfig {
    /// Benchmark table file; the embedded reference table is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benchmark_file: Option<PathBuf>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            significance_level: default_significance_level(),
            priority_threshold: default_priority_threshold(),
            neutral_preference: default_neutral_preference(),
            default_weights: MetricWeights::default(),
        }
    }
}

fn default_significance_level() -> f64 {
    0.05
}

fn default_priority_threshold() -> f64 {
    60.0
}

fn default_neutral_preference() -> f64 {
    50.0
}

impl RecommenderConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @ai:intent Check that configured values are usable by the engine
    /// @ai:effects pure
    pub fn validate(&self) -> Result<()> {
        self.scoring.default_weights.normalized()?;

        let level = self.scoring.significance_level;
        if !(level > 0.0 && level < 1.0) {
            return Err(crate::Error::Validation(format!(
                "significance_level must be in (0, 1), got {}",
                level
            )));
        }

        for (name, value) in [
            ("priority_threshold", self.scoring.priority_threshold),
            ("neutral_preference", self.scoring.neutral_preference),
        ] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(crate::Error::Validation(format!(
                    "{} must be a number in [0, 100], got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}
