//! Record shapes at each pipeline stage.
//!
//! raw → enriched (version + trend label) → projected (display statistics)
//! → annotated (per-machine min/max flags). Fields the pipeline does not
//! interpret (suite, test_name, renderer, ...) ride along in `extra`.

use super::nan_as_null;
use super::trend::Trend;
use crate::version::{VersionDescriptor, XemuVersion};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Passthrough fields not interpreted by the pipeline
pub type ExtraFields = Map<String, Value>;

/// Pre-aggregated timing values for one test run, in microseconds
///
/// NaN means "insufficient samples".
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimingAggregates {
    #[serde(with = "nan_as_null", default = "nan_as_null::nan")]
    pub average_us: f64,

    /// Mean with the single largest sample removed
    #[serde(with = "nan_as_null", default = "nan_as_null::nan")]
    pub average_us_exmax: f64,

    #[serde(with = "nan_as_null", default = "nan_as_null::nan")]
    pub max_us: f64,

    /// Second-largest sample
    #[serde(with = "nan_as_null", default = "nan_as_null::nan")]
    pub inner_max_us: f64,

    #[serde(with = "nan_as_null", default = "nan_as_null::nan")]
    pub min_us: f64,
}

impl Default for TimingAggregates {
    fn default() -> Self {
        Self {
            average_us: f64::NAN,
            average_us_exmax: f64::NAN,
            max_us: f64::NAN,
            inner_max_us: f64::NAN,
            min_us: f64::NAN,
        }
    }
}

/// One benchmark measurement as produced by the results flattener
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    /// Groups records by host
    pub machine_id: String,

    pub xemu_version_obj: VersionDescriptor,

    /// One-letter trend code
    #[serde(default)]
    pub trend: String,

    #[serde(flatten)]
    pub timings: TimingAggregates,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Raw record with a parsed version and expanded trend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedRecord {
    pub machine_id: String,

    pub xemu_version_obj: XemuVersion,

    /// Cached `xemu_version_obj.to_string()`
    pub xemu_short_version: String,

    pub trend: Trend,

    #[serde(flatten)]
    pub timings: TimingAggregates,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Display statistics derived from the timing aggregates, in the units charts plot
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimingStatistics {
    #[serde(with = "nan_as_null", default = "nan_as_null::nan")]
    pub average_ms: f64,

    #[serde(with = "nan_as_null", default = "nan_as_null::nan")]
    pub error_plus_us: f64,

    #[serde(with = "nan_as_null", default = "nan_as_null::nan")]
    pub error_minus_us: f64,

    #[serde(with = "nan_as_null", default = "nan_as_null::nan")]
    pub error_plus_ms: f64,

    #[serde(with = "nan_as_null", default = "nan_as_null::nan")]
    pub error_minus_ms: f64,

    /// NaN when no error band should be drawn
    #[serde(with = "nan_as_null", default = "nan_as_null::nan")]
    pub adjusted_max_ms: f64,

    /// NaN when no error band should be drawn
    #[serde(with = "nan_as_null", default = "nan_as_null::nan")]
    pub adjusted_min_ms: f64,
}

/// Enriched record plus display statistics for one outlier mode
///
/// `record.timings.average_us` holds the mean selected for that mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectedRecord {
    // Declared before `record` so its keys are claimed ahead of the
    // record's catch-all map when reading back.
    #[serde(flatten)]
    pub stats: TimingStatistics,

    #[serde(flatten)]
    pub record: EnrichedRecord,
}

impl ProjectedRecord {
    pub fn machine_id(&self) -> &str {
        &self.record.machine_id
    }

    pub fn average_ms(&self) -> f64 {
        self.stats.average_ms
    }
}

/// Projected record with sparse per-machine extremum flags
///
/// Flags are absent, not false, on records that are not an extremum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedRecord {
    #[serde(rename = "isMin", default, skip_serializing_if = "Option::is_none")]
    pub is_min: Option<bool>,

    #[serde(rename = "isMax", default, skip_serializing_if = "Option::is_none")]
    pub is_max: Option<bool>,

    #[serde(flatten)]
    pub record: ProjectedRecord,
}

impl AnnotatedRecord {
    pub fn is_min(&self) -> bool {
        self.is_min == Some(true)
    }

    pub fn is_max(&self) -> bool {
        self.is_max == Some(true)
    }
}

/// Chart-ready output document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartOutput {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Timestamp when the output was generated
    pub generated_at: String,

    /// Outlier mode the statistics were derived with
    pub exclude_max_outlier: bool,

    pub records: Vec<AnnotatedRecord>,
}
