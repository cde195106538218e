//! Process command implementation.
//!
//! The process command:
//! 1. Reads raw records
//! 2. Loads tag rules (optional)
//! 3. Expands records
//! 4. Projects statistics and annotates extrema
//! 5. Writes the chart output

use crate::output::{read_raw_records, write_chart_output};
use crate::pipeline::ChartData;
use crate::records::ChartOutput;
use crate::version::load_tag_config;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the process command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ProcessArgs {
    /// Raw records JSON array
    pub input: PathBuf,

    /// Output path for chart JSON
    pub output: PathBuf,

    /// Use the outlier-excluded aggregates
    pub exclude_max_outlier: bool,

    /// TOML file with tag alias rules
    pub tags: Option<PathBuf>,

    /// Pretty-print the output JSON
    pub pretty: bool,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for ProcessArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("results.json"),
            output: PathBuf::from("chart_data.json"),
            exclude_max_outlier: false,
            tags: None,
            pretty: false,
            print_summary: false,
        }
    }
}

/// Execute the process command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Input read or parse failures
/// * Invalid tag rules
/// * Any record with a malformed version (fails the whole batch)
/// * File write errors
pub fn execute_process(args: ProcessArgs) -> Result<ChartOutput> {
    let start_time = Instant::now();

    info!("Processing raw records: {}", args.input.display());

    // Step 1: Read raw records
    info!("Step 1/4: Reading raw records...");
    let raw = read_raw_records(&args.input)
        .with_context(|| format!("Failed to read raw records from {}", args.input.display()))?;

    // Step 2: Tag rules
    let tags = match &args.tags {
        Some(path) => {
            info!("Step 2/4: Loading tag rules from {}...", path.display());
            Some(load_tag_config(path).context("Failed to load tag rules")?)
        }
        None => {
            info!("Step 2/4: No tag rules given");
            None
        }
    };

    // Step 3: Expand
    info!("Step 3/4: Expanding {} records...", raw.len());
    let chart = ChartData::from_raw(&raw, tags.as_ref()).context("Failed to expand records")?;
    if chart.is_empty() {
        warn!("No records to chart, output will be empty");
    }

    // Step 4: Project, annotate, write
    info!(
        "Step 4/4: Projecting {} records (exclude_max_outlier={})...",
        chart.len(),
        args.exclude_max_outlier
    );
    let output = chart.to_output(args.exclude_max_outlier);

    write_chart_output(&output, &args.output, args.pretty)
        .context("Failed to write chart output")?;

    info!("✓ Chart data written to: {}", args.output.display());

    if args.print_summary {
        println!("{}", summarize(&output));
    }

    let elapsed = start_time.elapsed();
    debug!("Process completed in {:.2}s", elapsed.as_secs_f64());

    Ok(output)
}

/// Text summary of a chart output
pub fn summarize(output: &ChartOutput) -> String {
    let machines: BTreeSet<&str> = output
        .records
        .iter()
        .map(|r| r.record.machine_id())
        .collect();
    let versions: BTreeSet<&str> = output
        .records
        .iter()
        .map(|r| r.record.record.xemu_short_version.as_str())
        .collect();
    let flagged = output
        .records
        .iter()
        .filter(|r| r.is_min() || r.is_max())
        .count();
    let without_band = output
        .records
        .iter()
        .filter(|r| r.record.stats.adjusted_max_ms.is_nan())
        .count();

    let rule = "=".repeat(60);
    format!(
        "{rule}\nCHART DATA SUMMARY\n{rule}\n\
         Records:             {}\n\
         Machines:            {}\n\
         Versions:            {}\n\
         Extremum records:    {}\n\
         Without error band:  {}\n\
         Outliers excluded:   {}\n{rule}",
        output.records.len(),
        machines.len(),
        versions.len(),
        flagged,
        without_band,
        output.exclude_max_outlier,
    )
}

/// Validate process arguments
///
/// **Public** - can be called before execute_process for early validation
pub fn validate_args(args: &ProcessArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if !args.input.is_file() {
        anyhow::bail!("Input file '{}' does not exist", args.input.display());
    }

    if args.output.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if args.input == args.output {
        anyhow::bail!("Output path must differ from the input path");
    }

    if let Some(tags) = &args.tags {
        if !tags.is_file() {
            anyhow::bail!("Tag rules file '{}' does not exist", tags.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const RAW: &str = r#"[
        {
            "machine_id": "m1",
            "xemu_version_obj": { "branch": "master", "short": "0.8.5", "compare": "0.8.5" },
            "trend": "S",
            "average_us": 100, "average_us_exmax": 90,
            "max_us": 150, "inner_max_us": 120, "min_us": 50
        },
        {
            "machine_id": "m1",
            "xemu_version_obj": { "branch": "feature", "short": "0.8.6", "compare": "0.8.6" },
            "trend": "N",
            "average_us": 200, "average_us_exmax": 190,
            "max_us": 250, "inner_max_us": 220, "min_us": 150
        }
    ]"#;

    #[test]
    fn test_execute_process() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("raw.json");
        let output = dir.path().join("out/chart.json");
        fs::write(&input, RAW).unwrap();

        let args = ProcessArgs {
            input,
            output: output.clone(),
            ..Default::default()
        };
        validate_args(&args).unwrap();

        let result = execute_process(args).unwrap();

        assert!(output.exists());
        assert_eq!(result.records.len(), 2);
        assert!(result.records[0].is_min());
        assert!(result.records[1].is_max());
    }

    #[test]
    fn test_execute_process_with_tags() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("raw.json");
        let tags = dir.path().join("tags.toml");
        fs::write(&input, RAW).unwrap();
        fs::write(&tags, "[[tag]]\nname = \"trunk\"\nbranch = \"master\"\n").unwrap();

        let args = ProcessArgs {
            input,
            output: dir.path().join("chart.json"),
            tags: Some(tags),
            ..Default::default()
        };

        let result = execute_process(args).unwrap();
        assert_eq!(result.records[0].record.record.xemu_short_version, "trunk");
        assert_eq!(result.records[1].record.record.xemu_short_version, "0.8.6");
    }

    #[test]
    fn test_summary_counts() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("raw.json");
        fs::write(&input, RAW).unwrap();

        let output = execute_process(ProcessArgs {
            input,
            output: dir.path().join("chart.json"),
            ..Default::default()
        })
        .unwrap();

        let summary = summarize(&output);
        assert!(summary.contains("Records:             2"));
        assert!(summary.contains("Machines:            1"));
    }

    #[test]
    fn test_validate_args_missing_input() {
        let args = ProcessArgs {
            input: PathBuf::from("/nonexistent/raw.json"),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_same_input_output() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let args = ProcessArgs {
            input: file.path().to_path_buf(),
            output: file.path().to_path_buf(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_missing_tags() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let args = ProcessArgs {
            input: file.path().to_path_buf(),
            tags: Some(PathBuf::from("/nonexistent/tags.toml")),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }
}
