//! @ai:module:intent Render recommender results as text, Markdown or JSON
//! @ai:module:layer infrastructure
//! @ai:module:public_api OutputFormat, StoreShape, format_score_result, format_recommendation, format_workflows, format_task_index, format_store_shape, format_error
//! @ai:module:stateless true

pub mod json_report;
pub mod markdown_report;
pub mod text_report;

pub use json_report::to_json;

use crate::error::ErrorReport;
use crate::scoring::ScoreResult;
use crate::store::{BenchmarkStore, TaskIndexEntry};
use crate::workflow::{Recommendation, Workflow};
use serde::{Deserialize, Serialize};

/// @ai:intent Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
    JsonPretty,
}

impl OutputFormat {
    /// @ai:intent True for the two JSON variants
    /// @ai:effects pure
    pub fn is_json(&self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::JsonPretty)
    }
}

/// @ai:intent Counts describing a loaded benchmark table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreShape {
    pub source: String,
    pub categories: usize,
    pub subtasks: usize,
    pub tools: usize,
    pub not_applicable_entries: usize,
}

impl StoreShape {
    /// @ai:intent Count categories, subtasks and tool entries of a store
    /// @ai:effects pure
    pub fn of(store: &BenchmarkStore, source: &str) -> Self {
        let tools = store
            .categories
            .iter()
            .flat_map(|c| &c.subtasks)
            .flat_map(|s| &s.tools);

        let (total, missing) = tools.fold((0, 0), |(total, missing), t| {
            (total + 1, missing + usize::from(!t.entry.is_applicable()))
        });

        Self {
            source: source.to_string(),
            categories: store.categories.len(),
            subtasks: store.subtask_count(),
            tools: total,
            not_applicable_entries: missing,
        }
    }
}

/// @ai:intent Format one score result
/// @ai:effects pure
pub fn format_score_result(result: &ScoreResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(result, false),
        OutputFormat::JsonPretty => to_json(result, true),
        OutputFormat::Markdown => markdown_report::score_result(result),
        OutputFormat::Text => text_report::score_result(result),
    }
}

/// @ai:intent Format a recommendation (mode, selected subtask and score result)
/// @ai:effects pure
pub fn format_recommendation(rec: &Recommendation, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(rec, false),
        OutputFormat::JsonPretty => to_json(rec, true),
        OutputFormat::Markdown => markdown_report::recommendation(rec),
        OutputFormat::Text => text_report::recommendation(rec),
    }
}

/// @ai:intent Format one or more workflows; a single workflow serializes as an object
/// @ai:effects pure
pub fn format_workflows(workflows: &[Workflow], format: OutputFormat) -> String {
    match (format, workflows) {
        (OutputFormat::Json, [single]) => to_json(single, false),
        (OutputFormat::JsonPretty, [single]) => to_json(single, true),
        (OutputFormat::Json, _) => to_json(&workflows, false),
        (OutputFormat::JsonPretty, _) => to_json(&workflows, true),
        (OutputFormat::Markdown, _) => markdown_report::workflows(workflows),
        (OutputFormat::Text, _) => workflows
            .iter()
            .map(text_report::workflow)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// @ai:intent Format the category/subtask listing
/// @ai:effects pure
pub fn format_task_index(index: &[TaskIndexEntry], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(&index, false),
        OutputFormat::JsonPretty => to_json(&index, true),
        OutputFormat::Markdown => markdown_report::task_index(index),
        OutputFormat::Text => text_report::task_index(index),
    }
}

/// @ai:intent Format the shape of a loaded store
/// @ai:effects pure
pub fn format_store_shape(shape: &StoreShape, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(shape, false),
        OutputFormat::JsonPretty => to_json(shape, true),
        OutputFormat::Markdown | OutputFormat::Text => text_report::store_shape(shape),
    }
}

/// @ai:intent Format a user-visible error
/// @ai:effects pure
pub fn format_error(report: &ErrorReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(report, false),
        OutputFormat::JsonPretty => to_json(report, true),
        OutputFormat::Markdown | OutputFormat::Text => text_report::error(report),
    }
}
