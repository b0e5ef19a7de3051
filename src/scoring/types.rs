//! @ai:module:intent Types flowing in and out of the scoring engine
//! @ai:module:layer domain
//! @ai:module:public_api PreferenceWeights, PreferencePreset, MetricWeights, MetricBreakdown, RankedTool, SignificanceTest, ScoreResult
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::store::Metric;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sliders run from 0 to 100.
pub const SLIDER_MAX: f64 = 100.0;

/// @ai:intent User preference sliders; an absent slider was not supplied
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceWeights {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ease: Option<f64>,
}

impl PreferenceWeights {
    /// @ai:intent Build a profile with all three sliders set
    /// @ai:effects pure
    pub fn new(speed: f64, memory: f64, ease: f64) -> Self {
        Self {
            speed: Some(speed),
            memory: Some(memory),
            ease: Some(ease),
        }
    }

    /// @ai:intent True when no slider was supplied
    /// @ai:effects pure
    pub fn is_empty(&self) -> bool {
        self.speed.is_none() && self.memory.is_none() && self.ease.is_none()
    }

    /// @ai:intent Reject sliders outside [0, 100]
    /// @ai:effects pure
    pub fn validate(&self) -> Result<()> {
        let sliders = [("speed", self.speed), ("memory", self.memory), ("ease", self.ease)];

        for (name, value) in sliders {
            if let Some(v) = value {
                if !v.is_finite() || !(0.0..=SLIDER_MAX).contains(&v) {
                    return Err(Error::Validation(format!(
                        "{} preference must be between 0 and 100, got {}",
                        name, v
                    )));
                }
            }
        }

        Ok(())
    }

    /// @ai:intent Starting slider values suggested for a category
    /// @ai:effects pure
    pub fn category_default(category: &str) -> Self {
        if category.starts_with("Data Visualisation") {
            Self::new(50.0, 80.0, 80.0)
        } else if category.starts_with("Machine Learning") {
            Self::new(80.0, 60.0, 40.0)
        } else if category.starts_with("Data Cleaning & Wrangling") {
            Self::new(60.0, 80.0, 60.0)
        } else {
            PreferencePreset::Balanced.weights()
        }
    }
}

/// @ai:intent Named slider profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferencePreset {
    Balanced,
    Speed,
    Memory,
    Ease,
}

impl PreferencePreset {
    /// @ai:intent Slider values of this preset
    /// @ai:effects pure
    pub fn weights(&self) -> PreferenceWeights {
        match self {
            PreferencePreset::Balanced => PreferenceWeights::new(50.0, 50.0, 50.0),
            PreferencePreset::Speed => PreferenceWeights::new(90.0, 50.0, 30.0),
            PreferencePreset::Memory => PreferenceWeights::new(40.0, 90.0, 40.0),
            PreferencePreset::Ease => PreferenceWeights::new(40.0, 40.0, 90.0),
        }
    }

    /// @ai:intent Convert preset to string representation
    /// @ai:effects pure
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferencePreset::Balanced => "balanced",
            PreferencePreset::Speed => "speed",
            PreferencePreset::Memory => "memory",
            PreferencePreset::Ease => "ease",
        }
    }
}

impl std::fmt::Display for PreferencePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// @ai:intent Weight per metric; Default is the built-in profile used without sliders
/// Metrics missing from a deserialized profile weigh 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricWeights {
    #[serde(default)]
    pub runtime: f64,
    #[serde(default)]
    pub cpu: f64,
    #[serde(default)]
    pub memory: f64,
    #[serde(default)]
    pub core_loc: f64,
    #[serde(default)]
    pub total_loc: f64,
}

impl Default for MetricWeights {
    fn default() -> Self {
        Self {
            runtime: 0.30,
            cpu: 0.25,
            memory: 0.20,
            core_loc: 0.20,
            total_loc: 0.05,
        }
    }
}

impl MetricWeights {
    /// @ai:intent All weights zero
    /// @ai:effects pure
    pub fn zero() -> Self {
        Self {
            runtime: 0.0,
            cpu: 0.0,
            memory: 0.0,
            core_loc: 0.0,
            total_loc: 0.0,
        }
    }

    /// @ai:intent Weight of one metric
    /// @ai:effects pure
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Runtime => self.runtime,
            Metric::Cpu => self.cpu,
            Metric::Memory => self.memory,
            Metric::CoreLoc => self.core_loc,
            Metric::TotalLoc => self.total_loc,
        }
    }

    /// @ai:intent Sum over all five metrics in canonical order
    /// @ai:effects pure
    pub fn sum(&self) -> f64 {
        Metric::ALL.iter().fold(0.0, |acc, m| acc + self.get(*m))
    }

    /// @ai:intent Validate a configured profile and scale it to sum 1
    /// @ai:post result.sum() == 1 within tolerance
    /// @ai:effects pure
    pub fn normalized(&self) -> Result<Self> {
        for metric in Metric::ALL {
            let w = self.get(metric);
            if !w.is_finite() || w < 0.0 {
                return Err(Error::Validation(format!(
                    "weight for {} must be a non-negative number, got {}",
                    metric, w
                )));
            }
        }

        let sum = self.sum();
        if sum <= 0.0 {
            return Err(Error::Validation(
                "default weight profile must have a positive sum".to_string(),
            ));
        }

        // Already-normalized profiles are kept bit-for-bit.
        if (sum - 1.0).abs() <= 1e-9 {
            return Ok(*self);
        }

        Ok(Self {
            runtime: self.runtime / sum,
            cpu: self.cpu / sum,
            memory: self.memory / sum,
            core_loc: self.core_loc / sum,
            total_loc: self.total_loc / sum,
        })
    }
}

/// @ai:intent Normalized value per metric for one tool, each in [0, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricBreakdown {
    pub runtime: f64,
    pub cpu: f64,
    pub memory: f64,
    pub core_loc: f64,
    pub total_loc: f64,
}

impl MetricBreakdown {
    /// @ai:intent Normalized value of one metric
    /// @ai:effects pure
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Runtime => self.runtime,
            Metric::Cpu => self.cpu,
            Metric::Memory => self.memory,
            Metric::CoreLoc => self.core_loc,
            Metric::TotalLoc => self.total_loc,
        }
    }

    /// @ai:intent Set the normalized value of one metric
    /// @ai:effects state:write
    pub fn set(&mut self, metric: Metric, value: f64) {
        match metric {
            Metric::Runtime => self.runtime = value,
            Metric::Cpu => self.cpu = value,
            Metric::Memory => self.memory = value,
            Metric::CoreLoc => self.core_loc = value,
            Metric::TotalLoc => self.total_loc = value,
        }
    }

    /// @ai:intent Weighted sum over the five metrics
    /// @ai:effects pure
    pub fn weighted_sum(&self, weights: &MetricWeights) -> f64 {
        Metric::ALL
            .iter()
            .fold(0.0, |sum, m| sum + self.get(*m) * weights.get(*m))
    }
}

/// @ai:intent One applicable tool and its composite score, in rank order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTool {
    pub tool: String,
    pub score: f64,
}

/// @ai:intent Welch two-sample comparison between the top two tools
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignificanceTest {
    pub top_tool: String,
    pub runner_up: String,
    /// Welch t-statistic; None when the standard error is zero
    pub t: Option<f64>,
    /// Welch-Satterthwaite degrees of freedom; None when the standard error is zero
    pub df: Option<f64>,
    pub p: f64,
    /// Set while `p` is the fixed placeholder instead of a Student-t tail probability
    pub p_value_is_placeholder: bool,
}

/// @ai:intent Output of scoring one (category, subtask, preferences)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub category: String,
    pub subtask: String,
    pub recommended_tool: Option<String>,
    pub scores: BTreeMap<String, f64>,
    pub breakdown: BTreeMap<String, MetricBreakdown>,
    pub ranking: Vec<RankedTool>,
    pub not_applicable: Vec<String>,
    pub weights: MetricWeights,
    pub reason: String,
    pub significance: Option<SignificanceTest>,
}

impl ScoreResult {
    /// @ai:intent Composite score of the recommended tool
    /// @ai:effects pure
    pub fn top_score(&self) -> Option<f64> {
        self.ranking.first().map(|r| r.score)
    }

    /// @ai:intent Second-ranked tool, if any
    /// @ai:effects pure
    pub fn runner_up(&self) -> Option<&RankedTool> {
        self.ranking.get(1)
    }
}

/// @ai:intent Score as a percentage rounded to one decimal, half away from zero
/// @ai:effects pure
/// @ai:example (0.775) -> 77.5
pub fn percent(score: f64) -> f64 {
    (score * 100.0 * 10.0).round() / 10.0
}
