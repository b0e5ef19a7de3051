//! @ai:module:intent Score every tool of a subtask and pick the recommended one
//! @ai:module:layer application
//! @ai:module:public_api ScoringEngine, ScoringEngineTrait
//! @ai:module:stateless true

use crate::config::ScoringConfig;
use crate::error::{Error, Result};
use crate::scoring::normalize::normalize_tools;
use crate::scoring::reason::ReasonComposer;
use crate::scoring::stats::welch_t_test;
use crate::scoring::types::{
    MetricWeights, PreferenceWeights, RankedTool, ScoreResult, SignificanceTest,
};
use crate::scoring::weights::resolve_weights;
use crate::store::{BenchmarkEntry, BenchmarkStore, ToolBenchmark};
use std::collections::BTreeMap;
use std::sync::Arc;

/// @ai:intent Trait for scoring a (category, subtask) pair
pub trait ScoringEngineTrait: Send + Sync {
    /// @ai:intent Benchmark table the engine scores against
    fn store(&self) -> &BenchmarkStore;

    /// @ai:intent Score all tools of one subtask under the given preferences
    fn score(
        &self,
        category: &str,
        subtask: &str,
        preferences: Option<&PreferenceWeights>,
    ) -> Result<ScoreResult>;
}

/// @ai:intent Pure scoring over an injected, read-only benchmark table
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    store: Arc<BenchmarkStore>,
    default_weights: MetricWeights,
    composer: ReasonComposer,
}

impl ScoringEngine {
    /// @ai:intent Create an engine with the default scoring configuration
    /// @ai:effects pure
    pub fn new(store: Arc<BenchmarkStore>) -> Self {
        Self {
            store,
            default_weights: MetricWeights::default(),
            composer: ReasonComposer::default(),
        }
    }

    /// @ai:intent Create an engine with a custom scoring configuration
    /// @ai:pre config.default_weights is non-negative with a positive sum
    /// @ai:effects pure
    pub fn with_config(store: Arc<BenchmarkStore>, config: &ScoringConfig) -> Result<Self> {
        Ok(Self {
            store,
            default_weights: config.default_weights.normalized()?,
            composer: ReasonComposer::new(config),
        })
    }
}

impl ScoringEngineTrait for ScoringEngine {
    fn store(&self) -> &BenchmarkStore {
        &self.store
    }

    /// @ai:intent Normalize, weight, rank and explain one subtask
    /// @ai:post recommended_tool is never in not_applicable
    /// @ai:post keys(scores) and not_applicable partition the subtask's tools
    /// @ai:effects pure
    fn score(
        &self,
        category: &str,
        subtask: &str,
        preferences: Option<&PreferenceWeights>,
    ) -> Result<ScoreResult> {
        let bench = self
            .store
            .subtask(category, subtask)
            .ok_or_else(|| Error::subtask_not_found(category, subtask))?;

        let weights = resolve_weights(preferences, &self.default_weights)?;

        let (applicable, not_applicable): (Vec<&ToolBenchmark>, Vec<&ToolBenchmark>) =
            bench.tools.iter().partition(|t| t.entry.is_applicable());

        let entries: Vec<&BenchmarkEntry> = applicable.iter().map(|t| &t.entry).collect();
        let normalized = normalize_tools(&entries);

        let mut ranking: Vec<RankedTool> = applicable
            .iter()
            .zip(&normalized)
            .map(|(tool, breakdown)| RankedTool {
                tool: tool.tool.clone(),
                score: breakdown.weighted_sum(&weights),
            })
            .collect();

        // Stable: equal scores keep stored tool order.
        ranking.sort_by(|a, b| b.score.total_cmp(&a.score));

        let significance = match (ranking.first(), ranking.get(1)) {
            (Some(top), Some(second)) => Some(compare_top_two(bench, top, second)),
            _ => None,
        };

        let not_applicable: Vec<String> = not_applicable.iter().map(|t| t.tool.clone()).collect();

        let reason = self.composer.compose(
            subtask,
            preferences,
            &ranking,
            &not_applicable,
            significance.as_ref(),
        );

        let scores: BTreeMap<String, f64> = ranking
            .iter()
            .map(|r| (r.tool.clone(), r.score))
            .collect();

        let breakdown = applicable
            .iter()
            .zip(normalized)
            .map(|(tool, b)| (tool.tool.clone(), b))
            .collect();

        tracing::debug!(
            "Scored {} -> {}: {:?} (not applicable: {:?})",
            category,
            subtask,
            ranking.first().map(|r| r.tool.as_str()),
            not_applicable
        );

        Ok(ScoreResult {
            category: category.to_string(),
            subtask: subtask.to_string(),
            recommended_tool: ranking.first().map(|r| r.tool.clone()),
            scores,
            breakdown,
            ranking,
            not_applicable,
            weights,
            reason,
            significance,
        })
    }
}

/// @ai:intent Welch comparison of the raw metric vectors of the top two tools
/// @ai:effects pure
fn compare_top_two(
    bench: &crate::store::Subtask,
    top: &RankedTool,
    second: &RankedTool,
) -> SignificanceTest {
    let raw = |tool: &str| {
        bench
            .entry(tool)
            .map(BenchmarkEntry::values_or_zero)
            .unwrap_or_default()
    };

    let stat = welch_t_test(&raw(top.tool.as_str()), &raw(second.tool.as_str()));

    SignificanceTest {
        top_tool: top.tool.clone(),
        runner_up: second.tool.clone(),
        t: stat.t,
        df: stat.df,
        p: stat.p,
        p_value_is_placeholder: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Category, Subtask};
    use pretty_assertions::assert_eq;

    fn tool(name: &str, runtime: Option<f64>, memory: Option<f64>, core_loc: Option<f64>) -> ToolBenchmark {
        ToolBenchmark::new(
            name,
            BenchmarkEntry {
                runtime,
                cpu: runtime,
                memory,
                total_loc: None,
                core_loc,
            },
        )
    }

    fn fixture() -> Arc<BenchmarkStore> {
        Arc::new(BenchmarkStore {
            categories: vec![Category {
                name: "Fixture".to_string(),
                subtasks: vec![
                    Subtask {
                        name: "MIXED".to_string(),
                        tools: vec![
                            tool("Fast", Some(0.1), Some(40.0), Some(10.0)),
                            tool("Lean", Some(2.0), Some(1.0), Some(10.0)),
                            tool("Missing", None, None, None),
                        ],
                    },
                    Subtask {
                        name: "TIED".to_string(),
                        tools: vec![
                            tool("First", Some(1.0), Some(1.0), Some(1.0)),
                            tool("Second", Some(1.0), Some(1.0), Some(1.0)),
                        ],
                    },
                    Subtask {
                        name: "NONE".to_string(),
                        tools: vec![tool("Ghost", None, None, None)],
                    },
                ],
            }],
        })
    }

    #[test]
    fn test_unknown_subtask_is_not_found() {
        let engine = ScoringEngine::new(fixture());
        let err = engine.score("Fixture", "ABSENT", None).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));

        let err = engine.score("Nope", "MIXED", None).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn test_partition_is_exact() {
        let engine = ScoringEngine::new(fixture());
        let result = engine.score("Fixture", "MIXED", None).unwrap();

        assert_eq!(result.not_applicable, vec!["Missing".to_string()]);
        assert_eq!(
            result.scores.keys().cloned().collect::<Vec<_>>(),
            vec!["Fast".to_string(), "Lean".to_string()]
        );
        assert_eq!(result.breakdown.len(), 2);
        assert!(!result.scores.contains_key("Missing"));
    }

    #[test]
    fn test_preferences_shift_recommendation() {
        let engine = ScoringEngine::new(fixture());

        let speed = PreferenceWeights::new(100.0, 0.0, 0.0);
        let result = engine.score("Fixture", "MIXED", Some(&speed)).unwrap();
        assert_eq!(result.recommended_tool.as_deref(), Some("Fast"));

        let memory = PreferenceWeights::new(0.0, 100.0, 0.0);
        let result = engine.score("Fixture", "MIXED", Some(&memory)).unwrap();
        assert_eq!(result.recommended_tool.as_deref(), Some("Lean"));
    }

    #[test]
    fn test_ties_keep_stored_order() {
        let engine = ScoringEngine::new(fixture());
        let result = engine.score("Fixture", "TIED", None).unwrap();

        assert_eq!(result.recommended_tool.as_deref(), Some("First"));
        assert_eq!(result.ranking[1].tool, "Second");
        // Measured metrics tie at 0.5; total_loc is absent and scores 0.
        assert!((result.scores["First"] - 0.475).abs() < 1e-9);

        let significance = result.significance.unwrap();
        assert_eq!(significance.t, Some(0.0));
    }

    #[test]
    fn test_no_applicable_tool() {
        let engine = ScoringEngine::new(fixture());
        let result = engine.score("Fixture", "NONE", None).unwrap();

        assert_eq!(result.recommended_tool, None);
        assert!(result.scores.is_empty());
        assert!(result.significance.is_none());
        assert_eq!(result.not_applicable, vec!["Ghost".to_string()]);
        assert!(result.reason.starts_with("No benchmarked tool is applicable to none."));
    }

    #[test]
    fn test_scores_in_unit_range_and_idempotent() {
        let engine = ScoringEngine::new(fixture());
        let prefs = PreferenceWeights::new(30.0, 70.0, 10.0);

        let first = engine.score("Fixture", "MIXED", Some(&prefs)).unwrap();
        let second = engine.score("Fixture", "MIXED", Some(&prefs)).unwrap();
        assert_eq!(first, second);

        for score in first.scores.values() {
            assert!((0.0..=1.0).contains(score));
        }
    }

    #[test]
    fn test_custom_default_weights() {
        let config = ScoringConfig {
            default_weights: MetricWeights {
                runtime: 0.0,
                cpu: 0.0,
                memory: 2.0,
                core_loc: 0.0,
                total_loc: 0.0,
            },
            ..Default::default()
        };
        let engine = ScoringEngine::with_config(fixture(), &config).unwrap();
        let result = engine.score("Fixture", "MIXED", None).unwrap();

        assert_eq!(result.recommended_tool.as_deref(), Some("Lean"));
        assert!((result.weights.memory - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_slider_is_validation_error() {
        let engine = ScoringEngine::new(fixture());
        let prefs = PreferenceWeights::new(150.0, 0.0, 0.0);
        let err = engine.score("Fixture", "MIXED", Some(&prefs)).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
