//! Expand raw records with parsed versions and trend labels.

use crate::records::{EnrichedRecord, RawRecord, Trend};
use crate::utils::error::{PipelineError, VersionError};
use crate::version::{TagConfig, XemuVersion};
use log::debug;

/// Expand a single raw record
///
/// If `tags` is given, the first matching tag rule is applied to the
/// version before its short name is cached.
///
/// # Errors
/// * `VersionError` - the record's version descriptor has no usable names
pub fn expand_record(
    raw: &RawRecord,
    tags: Option<&TagConfig>,
) -> Result<EnrichedRecord, VersionError> {
    let mut version = XemuVersion::from_descriptor(&raw.xemu_version_obj)?;
    if let Some(tags) = tags {
        tags.apply(&mut version);
    }

    Ok(EnrichedRecord {
        machine_id: raw.machine_id.clone(),
        xemu_short_version: version.to_string(),
        xemu_version_obj: version,
        trend: Trend::from_code(&raw.trend),
        timings: raw.timings,
        extra: raw.extra.clone(),
    })
}

/// Expand every raw record, preserving order
///
/// **Public** - main entry point for expansion
///
/// A single malformed version fails the whole batch; no partial output
/// is returned.
///
/// # Errors
/// * `PipelineError::InvalidVersion` - names the first failing record
pub fn expand_records(raw: &[RawRecord]) -> Result<Vec<EnrichedRecord>, PipelineError> {
    expand_all(raw, None)
}

/// Expand every raw record, aliasing versions with the given tag rules
pub fn expand_records_with_tags(
    raw: &[RawRecord],
    tags: &TagConfig,
) -> Result<Vec<EnrichedRecord>, PipelineError> {
    expand_all(raw, Some(tags))
}

fn expand_all(
    raw: &[RawRecord],
    tags: Option<&TagConfig>,
) -> Result<Vec<EnrichedRecord>, PipelineError> {
    debug!("Expanding {} raw records", raw.len());

    let expanded = raw
        .iter()
        .enumerate()
        .map(|(index, record)| {
            expand_record(record, tags)
                .map_err(|source| PipelineError::InvalidVersion { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if tags.is_some() {
        let tagged = expanded
            .iter()
            .filter(|r| r.xemu_version_obj.is_tagged())
            .count();
        debug!("Tagged {} of {} records", tagged, expanded.len());
    }

    Ok(expanded)
}
