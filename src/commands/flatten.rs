//! Flatten command: result directories → raw record JSON array.

use crate::ingest::{flatten_results, load_results};
use crate::output::write_raw_records;
use crate::records::RawRecord;
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

/// Arguments for the flatten command
#[derive(Debug, Clone)]
pub struct FlattenArgs {
    /// Results directories to scan
    pub results_dirs: Vec<PathBuf>,

    /// Output path for the raw records JSON
    pub output: PathBuf,

    /// Pretty-print the output JSON
    pub pretty: bool,
}

impl Default for FlattenArgs {
    fn default() -> Self {
        Self {
            results_dirs: Vec::new(),
            output: PathBuf::from("results.json"),
            pretty: false,
        }
    }
}

/// Load result files and flatten them into raw records
///
/// Shared by the flatten and rank commands.
pub fn load_raw_records(results_dirs: &[PathBuf]) -> Result<Vec<RawRecord>> {
    if results_dirs.is_empty() {
        anyhow::bail!("At least one results directory is required");
    }

    let files = load_results(results_dirs).context("Failed to load result files")?;
    Ok(flatten_results(&files))
}

/// Execute the flatten command
pub fn execute_flatten(args: FlattenArgs) -> Result<usize> {
    let records = load_raw_records(&args.results_dirs)?;

    write_raw_records(&records, &args.output, args.pretty)
        .context("Failed to write raw records")?;

    info!(
        "✓ {} raw records written to: {}",
        records.len(),
        args.output.display()
    );

    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::read_raw_records;
    use std::fs;

    #[test]
    fn test_execute_flatten() {
        let dir = tempfile::tempdir().unwrap();
        let results = dir.path().join("results");
        fs::create_dir_all(&results).unwrap();
        fs::write(
            results.join("host1-GL.json"),
            r#"{
                "xemu_version": "xemu-0.8.5",
                "machine_info": { "cpu_manufacturer": "Intel" },
                "results": [
                    { "name": "Suite::a", "average_us": 10, "total_us": 100,
                      "max_us": 19, "min_us": 5, "iterations": 10 },
                    { "name": "Suite::b", "average_us": 20, "total_us": 200,
                      "max_us": 29, "min_us": 15, "iterations": 10 }
                ]
            }"#,
        )
        .unwrap();

        let output = dir.path().join("raw.json");
        let count = execute_flatten(FlattenArgs {
            results_dirs: vec![results],
            output: output.clone(),
            pretty: true,
        })
        .unwrap();

        assert_eq!(count, 2);

        let records = read_raw_records(&output).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].machine_id, "host1");
        assert_eq!(records[1].timings.average_us_exmax, 19.0);
        assert!(records[0].timings.inner_max_us.is_nan());
    }

    #[test]
    fn test_no_directories() {
        assert!(load_raw_records(&[]).is_err());
    }
}
