//! Output writers and readers for pipeline data.
//!
//! This module handles reading and writing JSON in two shapes:
//! - Raw record arrays (pipeline input)
//! - Chart output documents (pipeline output)

pub mod json;

// Re-export main functions
pub use json::{
    chart_output_to_string, read_chart_output, read_raw_records, write_chart_output,
    write_raw_records,
};
