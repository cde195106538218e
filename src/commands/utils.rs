use crate::output::read_chart_output;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::Path;

/// Validate a chart output JSON file
pub fn validate_output_file(file_path: &Path) -> Result<()> {
    println!("Validating chart data: {}", file_path.display());

    let output = read_chart_output(file_path)?;

    let min_flags = output.records.iter().filter(|r| r.is_min()).count();
    let max_flags = output.records.iter().filter(|r| r.is_max()).count();

    println!("✓ Valid chart data JSON");
    println!("  Schema: {}", output.schema_version);
    println!("  Generated: {}", output.generated_at);
    println!("  Outliers excluded: {}", output.exclude_max_outlier);
    println!("  Records: {}", output.records.len());
    println!("  Min/Max flags: {}/{}", min_flags, max_flags);

    if output.schema_version != SCHEMA_VERSION {
        println!(
            "  ! Schema differs from current version {}",
            SCHEMA_VERSION
        );
    }

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("xemu Perf Chart Data Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  schema_version: string       - Schema version (e.g., '1.0.0')");
        println!("  generated_at: string         - RFC 3339 timestamp");
        println!("  exclude_max_outlier: bool    - Outlier mode of the statistics");
        println!("  records: array               - One entry per test result");
        println!("    machine_id: string         - Host the test ran on");
        println!("    xemu_version_obj: object   - Version descriptor (short, compare, friendly_name?)");
        println!("    xemu_short_version: string - Display name of the version");
        println!("    trend: string              - Worsening | Stable | Improving | ''");
        println!("    average_us: number         - Selected mean (microseconds)");
        println!("    average_ms: number?        - Selected mean (milliseconds)");
        println!("    error_plus_ms: number      - Upper error bar");
        println!("    error_minus_ms: number     - Lower error bar");
        println!("    adjusted_max_ms: number?   - Upper bound, null when no band");
        println!("    adjusted_min_ms: number?   - Lower bound, null when no band");
        println!("    isMin: bool?               - Fastest record on its machine");
        println!("    isMax: bool?               - Slowest record on its machine");
    } else {
        println!("Use --show for detailed schema information");
    }
}
