//! @ai:module:intent Pick the subtask a beginner should be pointed at
//! @ai:module:layer application
//! @ai:module:public_api SelectionResolver
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::scoring::{PreferenceWeights, ScoringEngineTrait};
use crate::workflow::score_each_subtask;
use std::sync::Arc;

/// @ai:intent Beginner-mode subtask selection over a scoring engine
pub struct SelectionResolver<E: ScoringEngineTrait> {
    engine: Arc<E>,
}

impl<E: ScoringEngineTrait> SelectionResolver<E> {
    /// @ai:intent Create a resolver sharing the given engine
    /// @ai:effects pure
    pub fn new(engine: Arc<E>) -> Self {
        Self { engine }
    }

    /// @ai:intent Subtask whose best applicable tool has the highest composite score
    /// @ai:pre category exists and has at least one subtask
    /// @ai:post result is a subtask name of the category
    /// @ai:effects log
    ///
    /// Ties keep the earliest subtask. When no subtask yields a usable score the
    /// first stored subtask is returned.
    pub fn resolve_best_subtask(
        &self,
        category: &str,
        preferences: Option<&PreferenceWeights>,
    ) -> Result<String> {
        let cat = self
            .engine
            .store()
            .category(category)
            .ok_or_else(|| Error::Validation(format!("Unknown category: {}", category)))?;

        let first = cat
            .subtasks
            .first()
            .ok_or_else(|| {
                Error::Validation(format!("No subtasks available for category {}", category))
            })?
            .name
            .clone();

        let mut best: Option<(String, f64)> = None;

        for outcome in score_each_subtask(self.engine.as_ref(), cat, preferences) {
            let result = match outcome.result {
                Ok(result) => result,
                Err(e) => {
                    tracing::warn!(
                        "Skipping {} -> {} during subtask selection: {}",
                        category,
                        outcome.subtask,
                        e
                    );
                    continue;
                }
            };

            let Some(top) = result.top_score() else {
                continue;
            };

            if best.as_ref().map_or(true, |(_, score)| top > *score) {
                best = Some((outcome.subtask, top));
            }
        }

        match best {
            Some((subtask, score)) => {
                tracing::info!(
                    "Selected {} -> {} (top score {:.3})",
                    category,
                    subtask,
                    score
                );
                Ok(subtask)
            }
            None => {
                tracing::info!(
                    "No subtask of {} produced a score; falling back to {}",
                    category,
                    first
                );
                Ok(first)
            }
        }
    }
}
