//! JSON readers and writers for raw records and chart output.

use crate::records::{ChartOutput, RawRecord};
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Write chart output to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_chart_output(
    output: &ChartOutput,
    output_path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), OutputError> {
    write_json(output, output_path.as_ref(), pretty)
}

/// Write raw records (the pipeline's input format) to a JSON file
pub fn write_raw_records(
    records: &[RawRecord],
    output_path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), OutputError> {
    write_json(records, output_path.as_ref(), pretty)
}

fn write_json<T: Serialize + ?Sized>(
    value: &T,
    output_path: &Path,
    pretty: bool,
) -> Result<(), OutputError> {
    info!("Writing JSON to: {}", output_path.display());

    // Validate path
    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(writer, value)
    } else {
        serde_json::to_writer(writer, value)
    }
    .map_err(OutputError::SerializationFailed)?;

    info!("Written successfully ({} bytes)", calculate_file_size(output_path));

    Ok(())
}

/// Serialize chart output to a string
pub fn chart_output_to_string(output: &ChartOutput, pretty: bool) -> Result<String, OutputError> {
    if pretty {
        serde_json::to_string_pretty(output)
    } else {
        serde_json::to_string(output)
    }
    .map_err(OutputError::SerializationFailed)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Read raw records from a JSON array file
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_raw_records(input_path: impl AsRef<Path>) -> Result<Vec<RawRecord>, OutputError> {
    let input_path = input_path.as_ref();
    debug!("Reading raw records from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let records: Vec<RawRecord> =
        serde_json::from_reader(BufReader::new(file)).map_err(OutputError::SerializationFailed)?;

    debug!("Loaded {} raw records", records.len());
    Ok(records)
}

/// Read chart output from a JSON file
pub fn read_chart_output(input_path: impl AsRef<Path>) -> Result<ChartOutput, OutputError> {
    let input_path = input_path.as_ref();
    debug!("Reading chart output from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let output: ChartOutput =
        serde_json::from_reader(BufReader::new(file)).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Chart output loaded: schema {}, {} records",
        output.schema_version,
        output.records.len()
    );

    Ok(output)
}
