//! Flag the fastest and slowest record on each machine.
//!
//! Records are grouped by `machine_id` in encounter order. Groups with fewer
//! than two records get no flags at all.

use crate::records::{AnnotatedRecord, ProjectedRecord};
use log::debug;
use std::collections::HashMap;

/// Indices of the extremum records within one machine group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineExtrema {
    pub machine_id: String,

    /// Index into the input of the minimum `average_ms` record
    pub min_index: usize,

    /// Index into the input of the maximum `average_ms` record
    pub max_index: usize,
}

/// Partition record indices by machine, preserving encounter order
fn group_by_machine(records: &[ProjectedRecord]) -> Vec<(&str, Vec<usize>)> {
    let mut groups: Vec<(&str, Vec<usize>)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for (index, record) in records.iter().enumerate() {
        let machine_id = record.machine_id();
        let position = *positions.entry(machine_id).or_insert_with(|| {
            groups.push((machine_id, Vec::new()));
            groups.len() - 1
        });
        groups[position].1.push(index);
    }

    groups
}

/// Reduce left to right, replacing the candidate only on a strict win
///
/// Ties keep the first occurrence. NaN never wins a comparison.
fn reduce_extremum(
    records: &[ProjectedRecord],
    members: &[usize],
    better: impl Fn(f64, f64) -> bool,
) -> Option<usize> {
    let (&first, rest) = members.split_first()?;
    Some(rest.iter().fold(first, |best, &candidate| {
        if better(records[candidate].average_ms(), records[best].average_ms()) {
            candidate
        } else {
            best
        }
    }))
}

/// Find the min/max `average_ms` record of every machine group with two or more records
///
/// **Public** - index-based view of the annotation
pub fn find_machine_extrema(records: &[ProjectedRecord]) -> Vec<MachineExtrema> {
    let groups = group_by_machine(records);
    debug!("Annotating {} records across {} machines", records.len(), groups.len());

    groups
        .into_iter()
        .filter(|(_, members)| members.len() >= 2)
        .filter_map(|(machine_id, members)| {
            let min_index = reduce_extremum(records, &members, |a, b| a < b)?;
            let max_index = reduce_extremum(records, &members, |a, b| a > b)?;
            Some(MachineExtrema {
                machine_id: machine_id.to_string(),
                min_index,
                max_index,
            })
        })
        .collect()
}

/// Attach per-machine min/max flags
///
/// **Public** - main entry point for annotation
///
/// Order is preserved. Within each qualifying group exactly one record
/// carries `is_min` and exactly one carries `is_max` (possibly the same
/// record); every other record has both flags absent.
pub fn annotate_extrema(records: Vec<ProjectedRecord>) -> Vec<AnnotatedRecord> {
    let extrema = find_machine_extrema(&records);

    let mut annotated: Vec<AnnotatedRecord> = records
        .into_iter()
        .map(|record| AnnotatedRecord {
            is_min: None,
            is_max: None,
            record,
        })
        .collect();

    for extremum in extrema {
        annotated[extremum.min_index].is_min = Some(true);
        annotated[extremum.max_index].is_max = Some(true);
    }

    annotated
}
