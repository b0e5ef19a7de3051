//! @ai:module:intent Build a per-phase hybrid workflow for a category
//! @ai:module:layer application
//! @ai:module:public_api WorkflowComposer
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::scoring::{percent, PreferenceWeights, ScoringEngineTrait};
use crate::workflow::score_each_subtask;
use crate::workflow::types::{SubtaskFailure, Workflow, WorkflowStep};
use std::sync::Arc;

/// @ai:intent Hybrid-mode composition of best tools across subtasks
pub struct WorkflowComposer<E: ScoringEngineTrait> {
    engine: Arc<E>,
}

impl<E: ScoringEngineTrait> WorkflowComposer<E> {
    /// @ai:intent Create a composer sharing the given engine
    /// @ai:effects pure
    pub fn new(engine: Arc<E>) -> Self {
        Self { engine }
    }

    /// @ai:intent One step per subtask in stored order; failures go to diagnostics
    /// @ai:post steps.len() + diagnostics.len() == number of subtasks
    /// @ai:effects log
    pub fn build_workflow(
        &self,
        category: &str,
        preferences: Option<&PreferenceWeights>,
    ) -> Result<Workflow> {
        let cat = self
            .engine
            .store()
            .category(category)
            .ok_or_else(|| Error::category_not_found(category))?;

        let (successes, failures): (Vec<_>, Vec<_>) =
            score_each_subtask(self.engine.as_ref(), cat, preferences)
                .into_iter()
                .partition(|o| o.result.is_ok());

        let diagnostics: Vec<SubtaskFailure> = failures
            .into_iter()
            .filter_map(|o| o.result.err().map(|e| (o.subtask, e)))
            .map(|(subtask, e)| {
                tracing::warn!("Skipping {} -> {} in workflow: {}", category, subtask, e);
                SubtaskFailure::from_error(&subtask, &e)
            })
            .collect();

        let steps: Vec<WorkflowStep> = successes
            .into_iter()
            .filter_map(|o| o.result.ok())
            .map(|result| WorkflowStep {
                phase: crate::store::display_name(&result.subtask),
                score: result.top_score().map(percent),
                recommended_tool: result.recommended_tool,
                subtask: result.subtask,
                scores: result.scores,
            })
            .collect();

        tracing::info!(
            "Built workflow for {}: {} step(s), {} skipped",
            category,
            steps.len(),
            diagnostics.len()
        );

        Ok(Workflow {
            category: category.to_string(),
            steps,
            diagnostics,
        })
    }
}
