//! @ai:module:intent Benchmark-driven tool recommender library
//! @ai:module:layer application
//! @ai:module:public_api config, error, report, scoring, store, workflow

pub mod config;
pub mod error;
pub mod report;
pub mod scoring;
pub mod store;
pub mod workflow;

pub use config::RecommenderConfig;
pub use error::{Error, ErrorKind, ErrorReport, Result};
pub use report::OutputFormat;
pub use scoring::{
    MetricWeights, PreferencePreset, PreferenceWeights, ScoreResult, ScoringEngine,
    ScoringEngineTrait,
};
pub use store::{BenchmarkStore, StoreLoader, StoreLoaderTrait};
pub use workflow::{
    Recommendation, RecommendationMode, Recommender, SelectionResolver, Workflow,
    WorkflowComposer,
};

use std::sync::Arc;

/// @ai:intent Load the configured benchmark table, or the embedded one when none is set
/// @ai:effects fs:read
pub fn load_store(config: &RecommenderConfig) -> Result<BenchmarkStore> {
    let loader = StoreLoader::new();

    match &config.paths.benchmark_file {
        Some(path) => loader.load_file(path),
        None => loader.load_builtin(),
    }
}

/// @ai:intent Build a scoring engine from configuration
/// @ai:effects fs:read
pub fn build_engine(config: &RecommenderConfig) -> Result<ScoringEngine> {
    let store = load_store(config)?;
    ScoringEngine::with_config(Arc::new(store), &config.scoring)
}
