//! @ai:module:intent TOML/JSON loader for the benchmark table
//! @ai:module:layer infrastructure
//! @ai:module:public_api StoreLoader, StoreLoaderTrait, BUILTIN_BENCHMARKS
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::store::entry::{BenchmarkStore, Metric};
use std::collections::HashSet;
use std::path::Path;

/// Reference benchmark table compiled into the binary.
pub const BUILTIN_BENCHMARKS: &str = include_str!("../../data/benchmarks.toml");

/// @ai:intent Trait for loading the benchmark table
pub trait StoreLoaderTrait: Send + Sync {
    /// @ai:intent Load the table from a file (format chosen by extension)
    fn load_file(&self, path: &Path) -> Result<BenchmarkStore>;

    /// @ai:intent Load the embedded reference table
    fn load_builtin(&self) -> Result<BenchmarkStore>;
}

/// @ai:intent Loads and validates benchmark tables
/// @ai:effects pure (stateless)
pub struct StoreLoader;

impl StoreLoader {
    /// @ai:intent Create a new store loader
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Parse a TOML document into a validated store
    /// @ai:effects pure
    pub fn parse_toml(content: &str) -> Result<BenchmarkStore> {
        let store: BenchmarkStore = toml::from_str(content)?;
        validate(&store)?;
        Ok(store)
    }

    /// @ai:intent Parse a JSON document into a validated store
    /// @ai:effects pure
    pub fn parse_json(content: &str) -> Result<BenchmarkStore> {
        let store: BenchmarkStore = serde_json::from_str(content)?;
        validate(&store)?;
        Ok(store)
    }
}

impl Default for StoreLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreLoaderTrait for StoreLoader {
    /// @ai:intent Load the table from a file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    fn load_file(&self, path: &Path) -> Result<BenchmarkStore> {
        let content = std::fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let store = if is_json {
            Self::parse_json(&content)?
        } else {
            Self::parse_toml(&content)?
        };

        tracing::info!(
            "Loaded benchmark table from {} ({} categories, {} subtasks)",
            path.display(),
            store.categories.len(),
            store.subtask_count()
        );
        Ok(store)
    }

    /// @ai:intent Load the embedded reference table
    /// @ai:effects pure
    fn load_builtin(&self) -> Result<BenchmarkStore> {
        Self::parse_toml(BUILTIN_BENCHMARKS)
    }
}

/// @ai:intent Reject duplicate names and invalid metric values
/// @ai:effects pure
fn validate(store: &BenchmarkStore) -> Result<()> {
    let mut categories = HashSet::new();

    for category in &store.categories {
        if !categories.insert(category.name.as_str()) {
            return Err(Error::Validation(format!(
                "duplicate category '{}'",
                category.name
            )));
        }

        let mut subtasks = HashSet::new();

        for subtask in &category.subtasks {
            if !subtasks.insert(subtask.name.as_str()) {
                return Err(Error::Validation(format!(
                    "duplicate subtask '{}' in category '{}'",
                    subtask.name, category.name
                )));
            }

            let mut tools = HashSet::new();

            for tool in &subtask.tools {
                if !tools.insert(tool.tool.as_str()) {
                    return Err(Error::Validation(format!(
                        "duplicate tool '{}' in {} -> {}",
                        tool.tool, category.name, subtask.name
                    )));
                }

                if let Some(key) = tool.unknown.keys().next() {
                    return Err(Error::Validation(format!(
                        "unknown metric '{}' for {} in {} -> {}",
                        key, tool.tool, category.name, subtask.name
                    )));
                }

                for metric in Metric::ALL {
                    if let Some(value) = tool.entry.get(metric) {
                        if !value.is_finite() || value < 0.0 {
                            return Err(Error::Validation(format!(
                                "invalid {} value {} for {} in {} -> {}",
                                metric, value, tool.tool, category.name, subtask.name
                            )));
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
