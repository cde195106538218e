//! Derive display statistics (mean, error bars, bounds) from timing aggregates.
//!
//! Outlier exclusion swaps in the aggregates computed without the single
//! largest sample. Projection never touches the enriched records it reads,
//! so it can be re-run whenever the mode changes.

use crate::records::{EnrichedRecord, ProjectedRecord, TimingAggregates, TimingStatistics};
use crate::utils::config::US_PER_MS;
use log::debug;

/// The mean and bounds chosen for one outlier mode, in microseconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectedTimings {
    pub average_us: f64,
    pub max_us: f64,
    pub min_us: f64,
}

impl SelectedTimings {
    /// Pick the aggregates for the given outlier mode
    ///
    /// `min_us` is used as-is in both modes.
    pub fn select(timings: &TimingAggregates, exclude_max_outlier: bool) -> Self {
        if exclude_max_outlier {
            Self {
                average_us: timings.average_us_exmax,
                max_us: timings.inner_max_us,
                min_us: timings.min_us,
            }
        } else {
            Self {
                average_us: timings.average_us,
                max_us: timings.max_us,
                min_us: timings.min_us,
            }
        }
    }
}

/// Compute display statistics from selected timings
///
/// A NaN bound means no error band is drawn: the adjusted bounds are NaN
/// while the error values are zero. The millisecond error values are
/// scaled from those zeros and so stay numeric.
pub fn derive_statistics(selected: &SelectedTimings) -> TimingStatistics {
    let SelectedTimings {
        average_us,
        max_us,
        min_us,
    } = *selected;

    let (error_plus_us, error_minus_us, adjusted_max_ms, adjusted_min_ms) =
        if max_us.is_nan() || min_us.is_nan() {
            (0.0, 0.0, f64::NAN, f64::NAN)
        } else {
            (
                max_us - average_us,
                average_us - min_us,
                max_us / US_PER_MS,
                min_us / US_PER_MS,
            )
        };

    TimingStatistics {
        average_ms: average_us / US_PER_MS,
        error_plus_us,
        error_minus_us,
        error_plus_ms: error_plus_us / US_PER_MS,
        error_minus_ms: error_minus_us / US_PER_MS,
        adjusted_max_ms,
        adjusted_min_ms,
    }
}

/// Project a single enriched record
///
/// The copy's `average_us` is replaced by the selected mean.
pub fn project_record(record: &EnrichedRecord, exclude_max_outlier: bool) -> ProjectedRecord {
    let selected = SelectedTimings::select(&record.timings, exclude_max_outlier);
    let stats = derive_statistics(&selected);

    let mut record = record.clone();
    record.timings.average_us = selected.average_us;

    ProjectedRecord { stats, record }
}

/// Project every enriched record, preserving order
///
/// **Public** - main entry point for projection
pub fn project_records(records: &[EnrichedRecord], exclude_max_outlier: bool) -> Vec<ProjectedRecord> {
    debug!(
        "Projecting {} records (exclude_max_outlier={})",
        records.len(),
        exclude_max_outlier
    );

    records
        .iter()
        .map(|record| project_record(record, exclude_max_outlier))
        .collect()
}
