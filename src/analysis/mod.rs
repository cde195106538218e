//! Cross-version analysis of enriched records.

pub mod ranking;

pub use ranking::{format_ranking, rank_versions, VersionRank};
