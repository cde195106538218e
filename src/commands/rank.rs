//! Rank command: order builds by normalized performance.

use super::flatten::load_raw_records;
use crate::analysis::{format_ranking, rank_versions, VersionRank};
use crate::pipeline::ChartData;
use crate::version::load_tag_config;
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

/// Arguments for the rank command
#[derive(Debug, Clone, Default)]
pub struct RankArgs {
    /// Results directories to scan
    pub results_dirs: Vec<PathBuf>,

    /// TOML file with tag alias rules
    pub tags: Option<PathBuf>,

    /// Only show the fastest N versions
    pub limit: Option<usize>,
}

/// Execute the rank command, printing the table to stdout
pub fn execute_rank(args: RankArgs) -> Result<Vec<VersionRank>> {
    let raw = load_raw_records(&args.results_dirs)?;

    let tags = args
        .tags
        .as_ref()
        .map(|path| load_tag_config(path))
        .transpose()
        .context("Failed to load tag rules")?;

    let chart = ChartData::from_raw(&raw, tags.as_ref()).context("Failed to expand records")?;

    let mut ranking = rank_versions(chart.records());
    if let Some(limit) = args.limit {
        ranking.truncate(limit);
    }

    info!("Ranked {} versions", ranking.len());
    print!("{}", format_ranking(&ranking));

    Ok(ranking)
}
