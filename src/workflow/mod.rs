//! @ai:module:intent Multi-subtask operations over the scoring engine
//! @ai:module:layer application
//! @ai:module:public_api SelectionResolver, WorkflowComposer, Recommender, Workflow, Recommendation

pub mod composer;
pub mod recommender;
pub mod resolver;
pub mod types;

pub use composer::WorkflowComposer;
pub use recommender::Recommender;
pub use resolver::SelectionResolver;
pub use types::{
    Recommendation, RecommendationMode, SubtaskFailure, SubtaskOutcome, Workflow, WorkflowStep,
};

use crate::scoring::{PreferenceWeights, ScoringEngineTrait};
use crate::store::Category;

/// @ai:intent Score every subtask of a category, keeping each outcome as a value
/// @ai:post one outcome per subtask, in stored order
/// @ai:effects pure
pub(crate) fn score_each_subtask<E: ScoringEngineTrait + ?Sized>(
    engine: &E,
    category: &Category,
    preferences: Option<&PreferenceWeights>,
) -> Vec<SubtaskOutcome> {
    category
        .subtasks
        .iter()
        .map(|subtask| SubtaskOutcome {
            subtask: subtask.name.clone(),
            result: engine.score(&category.name, &subtask.name, preferences),
        })
        .collect()
}
