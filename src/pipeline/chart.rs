//! Chart data holder for repeated projection.
//!
//! Expansion runs once; projection and annotation are re-run from the
//! stored enriched records every time the outlier mode changes.

use super::annotator::annotate_extrema;
use super::expander::{expand_records, expand_records_with_tags};
use super::projector::project_records;
use crate::records::{AnnotatedRecord, ChartOutput, EnrichedRecord, RawRecord};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::PipelineError;
use crate::version::TagConfig;
use chrono::Utc;
use log::info;

/// Enriched records ready to be rendered in either outlier mode
#[derive(Debug, Clone)]
pub struct ChartData {
    records: Vec<EnrichedRecord>,
}

impl ChartData {
    /// Expand raw records, optionally aliasing versions with tag rules
    ///
    /// # Errors
    /// * `PipelineError::InvalidVersion` - any record has a malformed version
    pub fn from_raw(raw: &[RawRecord], tags: Option<&TagConfig>) -> Result<Self, PipelineError> {
        let records = match tags {
            Some(tags) => expand_records_with_tags(raw, tags)?,
            None => expand_records(raw)?,
        };

        info!("Expanded {} records", records.len());
        Ok(Self { records })
    }

    pub fn records(&self) -> &[EnrichedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Project and annotate for one outlier mode
    pub fn render(&self, exclude_max_outlier: bool) -> Vec<AnnotatedRecord> {
        annotate_extrema(project_records(&self.records, exclude_max_outlier))
    }

    /// Render into a timestamped output document
    pub fn to_output(&self, exclude_max_outlier: bool) -> ChartOutput {
        ChartOutput {
            schema_version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            exclude_max_outlier,
            records: self.render(exclude_max_outlier),
        }
    }
}

/// Run the full pipeline: expand, project, annotate
///
/// **Public** - one-shot entry point
pub fn process_records(
    raw: &[RawRecord],
    exclude_max_outlier: bool,
) -> Result<Vec<AnnotatedRecord>, PipelineError> {
    Ok(ChartData::from_raw(raw, None)?.render(exclude_max_outlier))
}
