//! @ai:module:intent Human-readable terminal output
//! @ai:module:layer infrastructure
//! @ai:module:public_api score_result, recommendation, workflow, task_index, store_shape, error
//! @ai:module:stateless true

use crate::error::ErrorReport;
use crate::report::StoreShape;
use crate::scoring::{percent, ScoreResult};
use crate::store::{display_name, Metric, TaskIndexEntry};
use crate::workflow::{Recommendation, Workflow};
use colored::Colorize;

/// @ai:intent Format a score result as a ranked list with the reason
/// @ai:effects pure
pub fn score_result(result: &ScoreResult) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} {} {}\n",
        result.category.bold(),
        "->".dimmed(),
        display_name(&result.subtask).bold()
    ));

    match &result.recommended_tool {
        Some(tool) => output.push_str(&format!(
            "  {} {}\n",
            "Recommended:".green().bold(),
            tool.cyan().bold()
        )),
        None => output.push_str(&format!(
            "  {} none\n",
            "Recommended:".yellow().bold()
        )),
    }

    if !result.ranking.is_empty() {
        output.push_str("\n  Ranking:\n");
    }

    for (i, ranked) in result.ranking.iter().enumerate() {
        output.push_str(&format!(
            "    {}. {:<10} {:>5.1}%\n",
            i + 1,
            ranked.tool,
            percent(ranked.score)
        ));

        if let Some(b) = result.breakdown.get(&ranked.tool) {
            let parts: Vec<String> = Metric::ALL
                .iter()
                .map(|m| format!("{}={:.2}", m, b.get(*m)))
                .collect();
            output.push_str(&format!("       {}\n", parts.join(" ").dimmed()));
        }
    }

    if !result.not_applicable.is_empty() {
        output.push_str(&format!(
            "\n  {} {}\n",
            "Not applicable:".yellow(),
            result.not_applicable.join(", ")
        ));
    }

    if let Some(test) = &result.significance {
        let t = test.t.map_or_else(|| "n/a".to_string(), |t| format!("{:.3}", t));
        let df = test.df.map_or_else(|| "n/a".to_string(), |df| format!("{:.2}", df));
        let note = if test.p_value_is_placeholder {
            " (placeholder)"
        } else {
            ""
        };

        output.push_str(&format!(
            "\n  {} {} vs {}: t={}, df={}, p={:.3}{}\n",
            "Welch test:".blue(),
            test.top_tool,
            test.runner_up,
            t,
            df,
            test.p,
            note.dimmed()
        ));
    }

    output.push_str(&format!("\n  {}\n", result.reason));
    output
}

/// @ai:intent Format a recommendation with its selection mode
/// @ai:effects pure
pub fn recommendation(rec: &Recommendation) -> String {
    let mut output = format!(
        "{} {} ({})\n\n",
        "Mode:".dimmed(),
        rec.mode.to_string().magenta(),
        rec.selected_subtask
    );
    output.push_str(&score_result(&rec.result));
    output
}

/// @ai:intent Format a workflow as numbered phases plus its summary
/// @ai:effects pure
pub fn workflow(workflow: &Workflow) -> String {
    let mut output = format!("{}\n", workflow.category.bold());

    if workflow.steps.is_empty() {
        output.push_str(&format!("  {}\n", "No workflow steps.".yellow()));
    }

    for (i, step) in workflow.steps.iter().enumerate() {
        match (&step.recommended_tool, step.score) {
            (Some(tool), Some(score)) => output.push_str(&format!(
                "  {}. {:<24} {:<10} {:>5.1}%\n",
                i + 1,
                step.phase,
                tool.cyan(),
                score
            )),
            _ => output.push_str(&format!(
                "  {}. {:<24} {}\n",
                i + 1,
                step.phase,
                "no applicable tool".yellow()
            )),
        }
    }

    for failure in &workflow.diagnostics {
        output.push_str(&format!(
            "  {} {} [{}]: {}\n",
            "skipped".red(),
            failure.subtask,
            failure.kind,
            failure.message
        ));
    }

    output.push_str(&format!("\n  {}\n", workflow.summary()));
    output
}

/// @ai:intent Format the category listing
/// @ai:effects pure
pub fn task_index(index: &[TaskIndexEntry]) -> String {
    let mut output = String::new();

    for entry in index {
        output.push_str(&format!(
            "{} ({})\n",
            entry.category.bold(),
            entry.subtasks.len()
        ));

        for subtask in &entry.subtasks {
            output.push_str(&format!("  - {}\n", subtask));
        }
    }

    output
}

/// @ai:intent Format store counts after validation
/// @ai:effects pure
pub fn store_shape(shape: &StoreShape) -> String {
    format!(
        "{} {}\n  {} categories, {} subtasks, {} tool entries ({} not applicable)\n",
        "OK".green().bold(),
        shape.source,
        shape.categories,
        shape.subtasks,
        shape.tools,
        shape.not_applicable_entries
    )
}

/// @ai:intent Format an error as `Error [kind]: message`
/// @ai:effects pure
pub fn error(report: &ErrorReport) -> String {
    format!(
        "{} [{}]: {}",
        "Error".red().bold(),
        report.kind,
        report.message
    )
}
