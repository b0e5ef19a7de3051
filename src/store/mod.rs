//! @ai:module:intent Benchmark table definitions and loading
//! @ai:module:layer domain
//! @ai:module:public_api BenchmarkStore, Category, Subtask, ToolBenchmark, BenchmarkEntry, Metric, StoreLoader

pub mod entry;
pub mod loader;

pub use entry::{
    display_name, BenchmarkEntry, BenchmarkStore, Category, Metric, Subtask, TaskIndexEntry,
    ToolBenchmark,
};
pub use loader::{StoreLoader, StoreLoaderTrait, BUILTIN_BENCHMARKS};
