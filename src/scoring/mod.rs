//! @ai:module:intent Scoring engine: normalization, weighting, ranking, significance, explanation
//! @ai:module:layer application
//! @ai:module:public_api ScoringEngine, ScoringEngineTrait, ScoreResult, PreferenceWeights, MetricWeights, ReasonComposer

pub mod engine;
pub mod normalize;
pub mod reason;
pub mod stats;
pub mod types;
pub mod weights;

pub use engine::{ScoringEngine, ScoringEngineTrait};
pub use normalize::{normalize_metric, normalize_tools, MetricBounds};
pub use reason::ReasonComposer;
pub use stats::{mean, sample_variance, welch_t_test, WelchStatistic, PLACEHOLDER_P_VALUE};
pub use types::{
    percent, MetricBreakdown, MetricWeights, PreferencePreset, PreferenceWeights, RankedTool,
    ScoreResult, SignificanceTest,
};
pub use weights::resolve_weights;
