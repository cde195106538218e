//! xemu Perf Renderer
//!
//! Transforms raw xemu benchmark results into chart-ready data: parsed
//! and comparable build versions, expanded trend labels, display
//! statistics with optional outlier exclusion, and per-machine
//! fastest/slowest annotation.
//!
//! This crate provides the core implementation for the
//! `xemu-perf` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! xemu-perf flatten results/ -o results.json
//! xemu-perf process results.json -o chart_data.json --exclude-max-outlier
//! ```
//!
//! Or from code:
//!
//! ```ignore
//! let raw = xemu_perf_renderer::output::read_raw_records("results.json")?;
//! let chart = xemu_perf_renderer::pipeline::ChartData::from_raw(&raw, None)?;
//! let records = chart.render(true);
//! ```

pub mod analysis;
pub mod commands;
pub mod ingest;
pub mod output;
pub mod pipeline;
pub mod records;
pub mod utils;
pub mod version;
