//! @ai:module:intent Result types for multi-subtask operations
//! @ai:module:layer domain
//! @ai:module:public_api SubtaskOutcome, SubtaskFailure, WorkflowStep, Workflow, Recommendation, RecommendationMode
//! @ai:module:stateless true

use crate::error::{Error, ErrorKind};
use crate::scoring::ScoreResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// @ai:intent Per-subtask result of scoring inside a multi-subtask operation
#[derive(Debug)]
pub struct SubtaskOutcome {
    pub subtask: String,
    pub result: Result<ScoreResult, Error>,
}

/// @ai:intent A subtask that failed to score; reported, never propagated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtaskFailure {
    pub subtask: String,
    pub kind: ErrorKind,
    pub message: String,
}

impl SubtaskFailure {
    /// @ai:intent Capture a scoring error for the diagnostics list
    /// @ai:effects pure
    pub fn from_error(subtask: &str, error: &Error) -> Self {
        Self {
            subtask: subtask.to_string(),
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

/// @ai:intent One phase of a hybrid workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub phase: String,
    pub subtask: String,
    pub recommended_tool: Option<String>,
    /// Top score as a percentage rounded to one decimal
    pub score: Option<f64>,
    pub scores: BTreeMap<String, f64>,
}

impl WorkflowStep {
    /// @ai:intent One-line summary used in the workflow reason
    /// @ai:effects pure
    pub fn summary(&self) -> String {
        match (&self.recommended_tool, self.score) {
            (Some(tool), Some(score)) => {
                format!("{} for {} (score: {:.1}%)", tool, self.phase, score)
            }
            _ => format!("no applicable tool for {}", self.phase),
        }
    }
}

/// @ai:intent Best tool per subtask across a whole category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    pub category: String,
    pub steps: Vec<WorkflowStep>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<SubtaskFailure>,
}

impl Workflow {
    /// @ai:intent Human-readable suggestion joining every step
    /// @ai:effects pure
    pub fn summary(&self) -> String {
        if self.steps.is_empty() {
            return format!("No workflow steps could be scored for {}.", self.category);
        }

        let steps: Vec<String> = self.steps.iter().map(WorkflowStep::summary).collect();
        format!("Hybrid workflow suggestion: {}.", steps.join("; "))
    }

    /// @ai:intent Distinct tools the workflow uses, in first-use order
    /// @ai:effects pure
    pub fn tools(&self) -> Vec<&str> {
        let mut tools: Vec<&str> = Vec::new();

        for tool in self.steps.iter().filter_map(|s| s.recommended_tool.as_deref()) {
            if !tools.contains(&tool) {
                tools.push(tool);
            }
        }

        tools
    }
}

/// @ai:intent How the scored subtask was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationMode {
    /// Subtask picked automatically from the category
    Beginner,
    /// Subtask given by the caller
    Expert,
}

impl RecommendationMode {
    /// @ai:intent Convert mode to string representation
    /// @ai:effects pure
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationMode::Beginner => "beginner",
            RecommendationMode::Expert => "expert",
        }
    }
}

impl std::fmt::Display for RecommendationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// @ai:intent Score result plus the subtask selection that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub mode: RecommendationMode,
    pub selected_subtask: String,
    #[serde(flatten)]
    pub result: ScoreResult,
}
