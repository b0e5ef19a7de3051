//! @ai:module:intent Benchmark table definitions: metrics, entries, subtasks, categories
//! @ai:module:layer domain
//! @ai:module:public_api Metric, BenchmarkEntry, ToolBenchmark, Subtask, Category, BenchmarkStore
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// @ai:intent One of the five tracked benchmark metrics (all lower-is-better)
/// @ai:effects pure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Runtime,
    Cpu,
    Memory,
    CoreLoc,
    TotalLoc,
}

impl Metric {
    /// Canonical order used for summation and for the significance vectors.
    pub const ALL: [Metric; 5] = [
        Metric::Runtime,
        Metric::Cpu,
        Metric::Memory,
        Metric::CoreLoc,
        Metric::TotalLoc,
    ];

    /// @ai:intent Convert metric to string representation
    /// @ai:effects pure
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Runtime => "runtime",
            Metric::Cpu => "cpu",
            Metric::Memory => "memory",
            Metric::CoreLoc => "core_loc",
            Metric::TotalLoc => "total_loc",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// @ai:intent One tool's measured performance on one subtask; None means not measured
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_loc: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_loc: Option<f64>,
}

impl BenchmarkEntry {
    /// @ai:intent Read one metric's raw value
    /// @ai:effects pure
    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Runtime => self.runtime,
            Metric::Cpu => self.cpu,
            Metric::Memory => self.memory,
            Metric::CoreLoc => self.core_loc,
            Metric::TotalLoc => self.total_loc,
        }
    }

    /// @ai:intent A tool is applicable when at least one metric was measured
    /// @ai:effects pure
    pub fn is_applicable(&self) -> bool {
        Metric::ALL.iter().any(|m| self.get(*m).is_some())
    }

    /// @ai:intent Raw values in canonical order, absent metrics as 0
    /// @ai:effects pure
    pub fn values_or_zero(&self) -> [f64; 5] {
        Metric::ALL.map(|m| self.get(m).unwrap_or(0.0))
    }
}

/// @ai:intent A named tool with its benchmark entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolBenchmark {
    #[serde(rename = "name")]
    pub tool: String,
    #[serde(flatten)]
    pub entry: BenchmarkEntry,
    /// Keys of the tool table that are not metrics; the loader rejects any
    #[serde(flatten, skip_serializing_if = "BTreeMap::is_empty")]
    pub unknown: BTreeMap<String, serde_json::Value>,
}

impl ToolBenchmark {
    /// @ai:intent Build a tool entry with no stray keys
    /// @ai:effects pure
    pub fn new(tool: &str, entry: BenchmarkEntry) -> Self {
        Self {
            tool: tool.to_string(),
            entry,
            unknown: BTreeMap::new(),
        }
    }
}

/// @ai:intent A unit of work within a category, with tools in stored order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtask {
    pub name: String,
    #[serde(default, rename = "tool")]
    pub tools: Vec<ToolBenchmark>,
}

impl Subtask {
    /// @ai:intent Look up one tool's entry
    /// @ai:effects pure
    pub fn entry(&self, tool: &str) -> Option<&BenchmarkEntry> {
        self.tools.iter().find(|t| t.tool == tool).map(|t| &t.entry)
    }

    /// @ai:intent Tool names in stored order
    /// @ai:effects pure
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.tool.as_str()).collect()
    }
}

/// @ai:intent A named grouping of subtasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default, rename = "subtask")]
    pub subtasks: Vec<Subtask>,
}

impl Category {
    /// @ai:intent Look up a subtask by name
    /// @ai:effects pure
    pub fn subtask(&self, name: &str) -> Option<&Subtask> {
        self.subtasks.iter().find(|s| s.name == name)
    }

    /// @ai:intent Subtask names in stored order
    /// @ai:effects pure
    pub fn subtask_names(&self) -> Vec<String> {
        self.subtasks.iter().map(|s| s.name.clone()).collect()
    }
}

/// @ai:intent Immutable benchmark table: category -> subtask -> tool -> entry, order preserved
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkStore {
    #[serde(default, rename = "category")]
    pub categories: Vec<Category>,
}

/// @ai:intent Category name with its subtask names (metadata listing)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskIndexEntry {
    pub category: String,
    pub subtasks: Vec<String>,
}

impl BenchmarkStore {
    /// @ai:intent Look up a category by name
    /// @ai:effects pure
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// @ai:intent Look up a (category, subtask) pair
    /// @ai:effects pure
    pub fn subtask(&self, category: &str, subtask: &str) -> Option<&Subtask> {
        self.category(category).and_then(|c| c.subtask(subtask))
    }

    /// @ai:intent List every category with its subtasks, in stored order
    /// @ai:effects pure
    pub fn task_index(&self) -> Vec<TaskIndexEntry> {
        self.categories
            .iter()
            .map(|c| TaskIndexEntry {
                category: c.name.clone(),
                subtasks: c.subtask_names(),
            })
            .collect()
    }

    /// @ai:intent Total number of subtasks across all categories
    /// @ai:effects pure
    pub fn subtask_count(&self) -> usize {
        self.categories.iter().map(|c| c.subtasks.len()).sum()
    }
}

/// @ai:intent Replace name separators with spaces
/// @ai:effects pure
/// @ai:example ("PARTIAL_READ") -> "PARTIAL READ"
pub fn display_name(name: &str) -> String {
    name.replace(['_', '-'], " ")
}
