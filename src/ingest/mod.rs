//! Ingestion of benchmark result files.
//!
//! This module handles:
//! - Finding result files under results directories
//! - Deriving machine ids and GPU details
//! - Flattening per-test results into raw records

pub mod flatten;
pub mod loader;
pub mod schema;

// Re-export main types and functions
pub use flatten::{average_excluding_max, flatten_results, inner_extrema, suite_name};
pub use loader::{load_result_file, load_results, strip_renderer_suffix};
pub use schema::{GpuInfo, MachineInfo, ResultFile, TestResult};
