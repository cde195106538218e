//! xemu Perf CLI
//!
//! Turns xemu benchmark result files into chart-ready JSON.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use xemu_perf_renderer::commands::{
    display_schema, execute_flatten, execute_process, execute_rank, validate_args,
    validate_output_file, FlattenArgs, ProcessArgs, RankArgs,
};
use xemu_perf_renderer::utils::config::SCHEMA_VERSION;

/// xemu Perf - benchmark results to chart data
#[derive(Parser, Debug)]
#[command(name = "xemu-perf")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Expand, project and annotate raw records into chart data
    Process {
        /// Raw records JSON array
        input: PathBuf,

        /// Output path for chart JSON
        #[arg(short, long, default_value = "chart_data.json")]
        output: PathBuf,

        /// Use the aggregates computed without the largest sample
        #[arg(long, env = "XEMU_PERF_EXCLUDE_MAX_OUTLIER")]
        exclude_max_outlier: bool,

        /// TOML file with tag alias rules
        #[arg(long)]
        tags: Option<PathBuf>,

        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Flatten result directories into a raw records JSON array
    Flatten {
        /// Results directories to scan recursively
        #[arg(required = true)]
        results: Vec<PathBuf>,

        /// Output path for raw records JSON
        #[arg(short, long, default_value = "results.json")]
        output: PathBuf,

        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Rank versions by normalized performance
    Rank {
        /// Results directories to scan recursively
        #[arg(required = true)]
        results: Vec<PathBuf>,

        /// TOML file with tag alias rules
        #[arg(long)]
        tags: Option<PathBuf>,

        /// Only show the fastest N versions
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Validate a chart data JSON file
    Validate {
        /// Path to chart data JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Process {
            input,
            output,
            exclude_max_outlier,
            tags,
            pretty,
            summary,
        } => {
            let args = ProcessArgs {
                input,
                output,
                exclude_max_outlier,
                tags,
                pretty,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_process(args)?;
        }

        Commands::Flatten {
            results,
            output,
            pretty,
        } => {
            execute_flatten(FlattenArgs {
                results_dirs: results,
                output,
                pretty,
            })?;
        }

        Commands::Rank {
            results,
            tags,
            limit,
        } => {
            execute_rank(RankArgs {
                results_dirs: results,
                tags,
                limit,
            })?;
        }

        Commands::Validate { file } => {
            validate_output_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("xemu Perf Renderer v{}", env!("CARGO_PKG_VERSION"));
    println!("Chart Data Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Transforms xemu benchmark results into chart-ready data.");
}
