//! End-to-end checks against the embedded reference benchmark table.

use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use std::sync::Arc;
use toolrec::{
    PreferencePreset, PreferenceWeights, RecommendationMode, Recommender, ScoringEngine,
    ScoringEngineTrait, SelectionResolver, StoreLoader, StoreLoaderTrait, WorkflowComposer,
};

fn engine() -> Arc<ScoringEngine> {
    let store = StoreLoader::new().load_builtin().unwrap();
    Arc::new(ScoringEngine::new(Arc::new(store)))
}

fn preference_profiles() -> Vec<Option<PreferenceWeights>> {
    vec![
        None,
        Some(PreferencePreset::Balanced.weights()),
        Some(PreferencePreset::Speed.weights()),
        Some(PreferencePreset::Memory.weights()),
        Some(PreferenceWeights::new(0.0, 100.0, 0.0)),
        Some(PreferenceWeights {
            speed: Some(70.0),
            memory: None,
            ease: None,
        }),
    ]
}

#[test]
fn filtering_with_default_weights_recommends_python() {
    let result = engine()
        .score("Data Extraction & Access", "FILTERING", None)
        .unwrap();

    assert_eq!(result.recommended_tool.as_deref(), Some("Python"));
    assert_eq!(result.breakdown["Python"].runtime, 1.0);
    assert_eq!(result.ranking[0].tool, "Python");
    assert!(result.not_applicable.is_empty());
}

#[test]
fn anova_excludes_tool_without_metrics() {
    let result = engine()
        .score("Statistical Modeling & Inference", "ANOVA", None)
        .unwrap();

    assert_eq!(result.not_applicable, vec!["SQL".to_string()]);
    assert!(!result.scores.contains_key("SQL"));
    assert_eq!(result.recommended_tool.as_deref(), Some("R"));

    let test = result.significance.unwrap();
    assert_eq!(test.top_tool, "R");
    assert_eq!(test.runner_up, "Python");
    assert!((test.t.unwrap() - -1.1046991889970594).abs() < 1e-9);
    assert!(test.p_value_is_placeholder);

    assert!(result
        .reason
        .ends_with("The following tools were not applicable for this task: SQL."));
}

#[test]
fn machine_learning_beginner_mode_picks_strongest_subtask() {
    let engine = engine();
    let resolver = SelectionResolver::new(Arc::clone(&engine));
    let picked = resolver
        .resolve_best_subtask("Machine Learning", None)
        .unwrap();

    assert_eq!(picked, "BINARY REGRESSION");

    // The pick must hold the highest winning score of the category.
    let category = engine.store().category("Machine Learning").unwrap();
    let best = category
        .subtasks
        .iter()
        .filter_map(|s| {
            engine
                .score("Machine Learning", &s.name, None)
                .unwrap()
                .top_score()
        })
        .fold(f64::MIN, f64::max);
    let picked_score = engine
        .score("Machine Learning", &picked, None)
        .unwrap()
        .top_score()
        .unwrap();
    assert_eq!(picked_score, best);

    let rec = Recommender::new(engine)
        .recommend("Machine Learning", None, None)
        .unwrap();
    assert_eq!(rec.mode, RecommendationMode::Beginner);
    assert_eq!(rec.selected_subtask, "BINARY REGRESSION");
}

#[test]
fn deployment_workflow_is_empty() {
    let workflow = WorkflowComposer::new(engine())
        .build_workflow("Deployment & Integration", None)
        .unwrap();

    assert!(workflow.steps.is_empty());
    assert!(workflow.diagnostics.is_empty());
}

#[test]
fn speed_preference_shifts_recommendation() {
    let engine = engine();

    let balanced = PreferenceWeights::new(50.0, 50.0, 50.0);
    let result = engine
        .score("Data Extraction & Access", "SELECTING", Some(&balanced))
        .unwrap();
    assert_eq!(result.recommended_tool.as_deref(), Some("SQL"));

    let speed = PreferenceWeights::new(90.0, 50.0, 30.0);
    let result = engine
        .score("Data Extraction & Access", "SELECTING", Some(&speed))
        .unwrap();
    assert_eq!(result.recommended_tool.as_deref(), Some("Python"));
    assert!(result.reason.contains("the metrics you prioritised (speed)"));
}

#[test]
fn every_subtask_satisfies_scoring_invariants() {
    let engine = engine();

    for category in &engine.store().categories {
        for subtask in &category.subtasks {
            for prefs in preference_profiles() {
                let result = engine
                    .score(&category.name, &subtask.name, prefs.as_ref())
                    .unwrap();

                let scored: BTreeSet<&str> = result.scores.keys().map(String::as_str).collect();
                let missing: BTreeSet<&str> =
                    result.not_applicable.iter().map(String::as_str).collect();
                let all: BTreeSet<&str> = subtask.tool_names().into_iter().collect();

                assert!(scored.is_disjoint(&missing));
                assert_eq!(scored.union(&missing).copied().collect::<BTreeSet<_>>(), all);

                if let Some(tool) = &result.recommended_tool {
                    assert!(!result.not_applicable.contains(tool));
                }

                for score in result.scores.values() {
                    assert!((0.0..=1.0 + 1e-12).contains(score), "{} out of range", score);
                }
                for breakdown in result.breakdown.values() {
                    for value in [
                        breakdown.runtime,
                        breakdown.cpu,
                        breakdown.memory,
                        breakdown.core_loc,
                        breakdown.total_loc,
                    ] {
                        assert!((0.0..=1.0).contains(&value));
                    }
                }

                assert!((result.weights.sum() - 1.0).abs() < 1e-9);

                let again = engine
                    .score(&category.name, &subtask.name, prefs.as_ref())
                    .unwrap();
                assert_eq!(result, again);
            }
        }
    }
}

#[test]
fn all_zero_sliders_give_zero_weights() {
    let result = engine()
        .score(
            "Data Extraction & Access",
            "FILTERING",
            Some(&PreferenceWeights::new(0.0, 0.0, 0.0)),
        )
        .unwrap();

    assert_eq!(result.weights.sum(), 0.0);
    assert!(result.scores.values().all(|s| *s == 0.0));
    // All tools tie at zero, so stored order decides.
    assert_eq!(result.recommended_tool.as_deref(), Some("Python"));
}

#[test]
fn task_index_follows_stored_order() {
    let store = StoreLoader::new().load_builtin().unwrap();
    let index = store.task_index();

    assert_eq!(index.len(), 9);
    assert_eq!(index[0].category, "Data Extraction & Access");
    assert_eq!(
        index[0].subtasks,
        vec!["FILTERING", "INDEXING", "JOINING", "PARTIAL READ", "SELECTING"]
    );

    let deployment = index
        .iter()
        .find(|e| e.category == "Deployment & Integration")
        .unwrap();
    assert!(deployment.subtasks.is_empty());
}

#[test]
fn hybrid_workflow_covers_every_subtask() {
    let engine = engine();
    let composer = WorkflowComposer::new(Arc::clone(&engine));

    for category in &engine.store().categories {
        let workflow = composer.build_workflow(&category.name, None).unwrap();
        let subtasks: Vec<&str> = workflow.steps.iter().map(|s| s.subtask.as_str()).collect();
        let expected: Vec<&str> = category.subtasks.iter().map(|s| s.name.as_str()).collect();

        assert_eq!(subtasks, expected);
        assert!(workflow.diagnostics.is_empty());
    }
}
