//! Transformation of raw benchmark records into chart-ready data.
//!
//! This module transforms raw records into:
//! - Enriched records (parsed version, trend label)
//! - Projected records (mean, error bars, adjusted bounds)
//! - Annotated records (per-machine min/max flags)

pub mod annotator;
pub mod chart;
pub mod expander;
pub mod projector;

// Re-export main types and functions
pub use annotator::{annotate_extrema, find_machine_extrema, MachineExtrema};
pub use chart::{process_records, ChartData};
pub use expander::{expand_record, expand_records, expand_records_with_tags};
pub use projector::{derive_statistics, project_record, project_records, SelectedTimings};
