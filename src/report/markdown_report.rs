//! @ai:module:intent Markdown report generation
//! @ai:module:layer infrastructure
//! @ai:module:public_api score_result, recommendation, workflows, task_index
//! @ai:module:stateless false

use crate::scoring::{percent, ScoreResult};
use crate::store::{display_name, Metric, TaskIndexEntry};
use crate::workflow::{Recommendation, Workflow};

/// @ai:intent Report title with the generation date
/// @ai:effects time:read
fn header(title: &str) -> String {
    format!(
        "# {}\n\n**Date:** {}\n\n",
        title,
        chrono::Utc::now().format("%Y-%m-%d %H:%M UTC")
    )
}

/// @ai:intent Ranking table with the normalized breakdown per metric
/// @ai:effects pure
fn ranking_table(result: &ScoreResult) -> String {
    let mut output = String::new();

    let metrics: Vec<&str> = Metric::ALL.iter().map(Metric::as_str).collect();
    output.push_str(&format!(
        "| Rank | Tool | Score | {} |\n",
        metrics.join(" | ")
    ));
    output.push_str(&format!(
        "|------|------|-------|{}\n",
        "------|".repeat(Metric::ALL.len())
    ));

    for (i, ranked) in result.ranking.iter().enumerate() {
        let cells: Vec<String> = Metric::ALL
            .iter()
            .map(|m| {
                result
                    .breakdown
                    .get(&ranked.tool)
                    .map_or_else(String::new, |b| format!("{:.2}", b.get(*m)))
            })
            .collect();

        output.push_str(&format!(
            "| {} | {} | {:.1}% | {} |\n",
            i + 1,
            ranked.tool,
            percent(ranked.score),
            cells.join(" | ")
        ));
    }

    output
}

/// @ai:intent Body of a score result without the document header
/// @ai:effects pure
fn score_section(result: &ScoreResult) -> String {
    let mut output = format!(
        "## {} / {}\n\n",
        result.category,
        display_name(&result.subtask)
    );

    match &result.recommended_tool {
        Some(tool) => output.push_str(&format!("**Recommended:** {}\n\n", tool)),
        None => output.push_str("**Recommended:** none\n\n"),
    }

    if let Some(second) = result.runner_up() {
        output.push_str(&format!(
            "**Runner-up:** {} ({:.1}%)\n\n",
            second.tool,
            percent(second.score)
        ));
    }

    if !result.ranking.is_empty() {
        output.push_str(&ranking_table(result));
        output.push('\n');
    }

    if !result.not_applicable.is_empty() {
        output.push_str(&format!(
            "**Not applicable:** {}\n\n",
            result.not_applicable.join(", ")
        ));
    }

    output.push_str(&format!("> {}\n", result.reason));
    output
}

/// @ai:intent Markdown document for one score result
/// @ai:effects time:read
pub fn score_result(result: &ScoreResult) -> String {
    let mut output = header("Tool Recommendation");
    output.push_str(&score_section(result));
    output
}

/// @ai:intent Markdown document for a recommendation
/// @ai:effects time:read
pub fn recommendation(rec: &Recommendation) -> String {
    let mut output = header("Tool Recommendation");
    output.push_str(&format!(
        "**Mode:** {} (subtask: {})\n\n",
        rec.mode, rec.selected_subtask
    ));
    output.push_str(&score_section(&rec.result));
    output
}

/// @ai:intent Markdown document with one section per workflow
/// @ai:effects time:read
pub fn workflows(workflows: &[Workflow]) -> String {
    let mut output = header("Hybrid Workflow");

    for workflow in workflows {
        output.push_str(&format!("## {}\n\n", workflow.category));

        if workflow.steps.is_empty() {
            output.push_str("_No workflow steps._\n\n");
        } else {
            output.push_str("| Phase | Tool | Score |\n");
            output.push_str("|-------|------|-------|\n");

            for step in &workflow.steps {
                let tool = step.recommended_tool.as_deref().unwrap_or("-");
                let score = step
                    .score
                    .map_or_else(|| "-".to_string(), |s| format!("{:.1}%", s));
                output.push_str(&format!("| {} | {} | {} |\n", step.phase, tool, score));
            }
            output.push('\n');
        }

        let tools = workflow.tools();
        if !tools.is_empty() {
            output.push_str(&format!("**Tools:** {}\n\n", tools.join(", ")));
        }

        for failure in &workflow.diagnostics {
            output.push_str(&format!(
                "- skipped **{}** ({}): {}\n",
                failure.subtask, failure.kind, failure.message
            ));
        }

        output.push_str(&format!("{}\n\n", workflow.summary()));
    }

    output
}

/// @ai:intent Markdown listing of categories and subtasks
/// @ai:effects pure
pub fn task_index(index: &[TaskIndexEntry]) -> String {
    let mut output = String::from("# Benchmarked Tasks\n\n");

    for entry in index {
        output.push_str(&format!("## {}\n\n", entry.category));

        if entry.subtasks.is_empty() {
            output.push_str("_No benchmarked subtasks._\n");
        }
        for subtask in &entry.subtasks {
            output.push_str(&format!("- {}\n", subtask));
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{ScoringEngine, ScoringEngineTrait};
    use crate::store::{StoreLoader, StoreLoaderTrait};
    use crate::workflow::WorkflowStep;
    use std::collections::BTreeMap;
    use std::sync::Arc;

    #[test]
    fn test_score_result_table() {
        let store = StoreLoader::new().load_builtin().unwrap();
        let engine = ScoringEngine::new(Arc::new(store));
        let result = engine
            .score("Data Extraction & Access", "FILTERING", None)
            .unwrap();

        let md = score_result(&result);

        assert!(md.starts_with("# Tool Recommendation\n\n**Date:** "));
        assert!(md.contains("## Data Extraction & Access / FILTERING"));
        assert!(md.contains("**Recommended:** Python"));
        assert!(md.contains("| Rank | Tool | Score | runtime | cpu | memory | core_loc | total_loc |"));
        assert!(md.contains("| 1 | Python |"));

        let second = result.runner_up().unwrap();
        assert!(md.contains(&format!(
            "**Runner-up:** {} ({:.1}%)",
            second.tool,
            percent(second.score)
        )));
    }

    #[test]
    fn test_single_tool_has_no_runner_up() {
        let store = StoreLoader::new().load_builtin().unwrap();
        let engine = ScoringEngine::new(Arc::new(store));
        let mut result = engine
            .score("Statistical Modeling & Inference", "ANOVA", None)
            .unwrap();
        result.ranking.truncate(1);

        let md = score_section(&result);
        assert!(md.contains("**Recommended:** R"));
        assert!(!md.contains("Runner-up"));
    }

    #[test]
    fn test_workflow_lists_distinct_tools() {
        let step = |phase: &str, tool: &str| WorkflowStep {
            phase: phase.to_string(),
            subtask: phase.to_string(),
            recommended_tool: Some(tool.to_string()),
            score: Some(60.0),
            scores: BTreeMap::new(),
        };
        let workflow = Workflow {
            category: "Machine Learning".to_string(),
            steps: vec![
                step("BINARY REGRESSION", "Python"),
                step("CLUSTERING", "R"),
                step("TRAINING", "Python"),
            ],
            diagnostics: vec![],
        };

        let md = workflows(&[workflow]);
        assert!(md.contains("**Tools:** Python, R\n"));
    }

    #[test]
    fn test_empty_workflow_section() {
        let workflow = Workflow {
            category: "Deployment & Integration".to_string(),
            steps: vec![],
            diagnostics: vec![],
        };

        let md = workflows(&[workflow]);
        assert!(md.contains("## Deployment & Integration\n\n_No workflow steps._"));
    }

    #[test]
    fn test_task_index_marks_empty_category() {
        let index = vec![TaskIndexEntry {
            category: "Deployment & Integration".to_string(),
            subtasks: vec![],
        }];

        let md = task_index(&index);
        assert!(md.contains("_No benchmarked subtasks._"));
    }
}
