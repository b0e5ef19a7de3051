//! @ai:module:intent Single entry point for beginner and expert recommendations
//! @ai:module:layer application
//! @ai:module:public_api Recommender
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::scoring::{PreferenceWeights, ScoringEngineTrait};
use crate::workflow::resolver::SelectionResolver;
use crate::workflow::types::{Recommendation, RecommendationMode};
use std::sync::Arc;

/// @ai:intent Resolve the subtask if needed, then score it
pub struct Recommender<E: ScoringEngineTrait> {
    engine: Arc<E>,
    resolver: SelectionResolver<E>,
}

impl<E: ScoringEngineTrait> Recommender<E> {
    /// @ai:intent Create a recommender sharing the given engine
    /// @ai:effects pure
    pub fn new(engine: Arc<E>) -> Self {
        Self {
            resolver: SelectionResolver::new(Arc::clone(&engine)),
            engine,
        }
    }

    /// @ai:intent Recommend a tool; a missing or blank subtask selects beginner mode
    /// @ai:pre category is non-empty
    /// @ai:effects log
    pub fn recommend(
        &self,
        category: &str,
        subtask: Option<&str>,
        preferences: Option<&PreferenceWeights>,
    ) -> Result<Recommendation> {
        let category = category.trim();
        if category.is_empty() {
            return Err(Error::Validation("category is required".to_string()));
        }

        let (mode, selected) = match subtask.map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => (RecommendationMode::Expert, s.to_string()),
            None => (
                RecommendationMode::Beginner,
                self.resolver.resolve_best_subtask(category, preferences)?,
            ),
        };

        let result = self.engine.score(category, &selected, preferences)?;

        Ok(Recommendation {
            mode,
            selected_subtask: selected,
            result,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoringEngine;
    use crate::workflow::testing::store;

    fn recommender() -> Recommender<ScoringEngine> {
        Recommender::new(Arc::new(ScoringEngine::new(store())))
    }

    #[test]
    fn test_empty_category_is_rejected() {
        let err = recommender().recommend("  ", Some("WEAK"), None).unwrap_err();
        assert!(matches!(err, Error::Validation(ref m) if m == "category is required"));
    }

    #[test]
    fn test_blank_subtask_selects_beginner_mode() {
        let rec = recommender().recommend("Work", Some(""), None).unwrap();
        assert_eq!(rec.mode, RecommendationMode::Beginner);
        assert_eq!(rec.selected_subtask, "STRONG");
        assert_eq!(rec.result.recommended_tool.as_deref(), Some("Beta"));

        let rec = recommender().recommend("Work", None, None).unwrap();
        assert_eq!(rec.mode, RecommendationMode::Beginner);
    }

    #[test]
    fn test_explicit_subtask_selects_expert_mode() {
        let rec = recommender().recommend("Work", Some("WEAK"), None).unwrap();
        assert_eq!(rec.mode, RecommendationMode::Expert);
        assert_eq!(rec.selected_subtask, "WEAK");
        assert_eq!(rec.result.subtask, "WEAK");
        assert_eq!(rec.result.recommended_tool.as_deref(), Some("Alpha"));
    }

    #[test]
    fn test_unknown_subtask_is_not_found() {
        let err = recommender().recommend("Work", Some("NOPE"), None).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }
}
