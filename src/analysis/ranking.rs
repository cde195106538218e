//! Rank builds by normalized performance across machines and tests.
//!
//! Every (machine, suite, test) combination gets a baseline: the mean
//! outlier-excluded average across all versions. Each record is divided by
//! its baseline, and a version's score is the mean of those ratios. A score
//! below 1.0 means the version runs faster than typical.

use crate::records::EnrichedRecord;
use crate::version::locale_compare;
use log::debug;
use std::collections::HashMap;

/// Ranking entry for one version
#[derive(Debug, Clone, PartialEq)]
pub struct VersionRank {
    /// Display name of the version (tag, if aliased)
    pub version: String,

    /// Mean normalized performance, lower is faster
    pub score: f64,

    /// Number of records contributing to the score
    pub samples: usize,
}

#[derive(Default)]
struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn value(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

fn extra_str<'a>(record: &'a EnrichedRecord, key: &str) -> &'a str {
    record.extra.get(key).and_then(|v| v.as_str()).unwrap_or("")
}

fn test_key(record: &EnrichedRecord) -> (&str, &str, &str) {
    (
        record.machine_id.as_str(),
        extra_str(record, "suite"),
        extra_str(record, "test_name"),
    )
}

/// Rank versions by mean normalized `average_us_exmax`, fastest first
///
/// NaN timings are skipped, as are records whose baseline is zero.
pub fn rank_versions(records: &[EnrichedRecord]) -> Vec<VersionRank> {
    let mut baselines: HashMap<(&str, &str, &str), Mean> = HashMap::new();
    for record in records {
        let value = record.timings.average_us_exmax;
        if !value.is_nan() {
            baselines.entry(test_key(record)).or_default().add(value);
        }
    }

    let mut scores: HashMap<&str, Mean> = HashMap::new();
    for record in records {
        let Some(baseline) = baselines.get(&test_key(record)).and_then(Mean::value) else {
            continue;
        };

        let normalized = record.timings.average_us_exmax / baseline;
        if normalized.is_finite() {
            scores
                .entry(record.xemu_short_version.as_str())
                .or_default()
                .add(normalized);
        }
    }

    let mut ranking: Vec<VersionRank> = scores
        .into_iter()
        .filter_map(|(version, mean)| {
            Some(VersionRank {
                version: version.to_string(),
                score: mean.value()?,
                samples: mean.count,
            })
        })
        .collect();

    ranking.sort_by(|a, b| {
        a.score
            .total_cmp(&b.score)
            .then_with(|| locale_compare(&a.version, &b.version))
    });

    debug!("Ranked {} versions from {} records", ranking.len(), records.len());
    ranking
}

/// Render the ranking as an aligned text table
pub fn format_ranking(ranking: &[VersionRank]) -> String {
    let width = ranking
        .iter()
        .map(|r| r.version.len())
        .max()
        .unwrap_or(0)
        .max("version".len());

    let mut out = format!("{:<width$}  {:>10}  {:>7}\n", "version", "score", "samples");
    for rank in ranking {
        out.push_str(&format!(
            "{:<width$}  {:>10.4}  {:>7}\n",
            rank.version, rank.score, rank.samples
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{TimingAggregates, Trend};
    use crate::version::{VersionDescriptor, XemuVersion};
    use serde_json::json;

    fn record(machine: &str, test: &str, version: &str, exmax: f64) -> EnrichedRecord {
        let mut extra = serde_json::Map::new();
        extra.insert("suite".to_string(), json!("Suite"));
        extra.insert("test_name".to_string(), json!(test));

        let version_obj = XemuVersion::from_descriptor(&VersionDescriptor {
            short: Some(version.to_string()),
            compare: Some(version.to_string()),
            ..Default::default()
        })
        .unwrap();

        EnrichedRecord {
            machine_id: machine.to_string(),
            xemu_short_version: version_obj.to_string(),
            xemu_version_obj: version_obj,
            trend: Trend::NotEnoughData,
            timings: TimingAggregates {
                average_us_exmax: exmax,
                ..Default::default()
            },
            extra,
        }
    }

    #[test]
    fn test_faster_version_ranks_first() {
        let records = vec![
            record("m1", "t1", "old", 300.0),
            record("m1", "t1", "new", 100.0),
            record("m2", "t1", "old", 30.0),
            record("m2", "t1", "new", 10.0),
        ];

        let ranking = rank_versions(&records);

        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].version, "new");
        assert_eq!(ranking[0].score, 0.5);
        assert_eq!(ranking[0].samples, 2);
        assert_eq!(ranking[1].version, "old");
        assert_eq!(ranking[1].score, 1.5);
    }

    #[test]
    fn test_nan_records_skipped() {
        let records = vec![
            record("m1", "t1", "a", 100.0),
            record("m1", "t1", "b", f64::NAN),
        ];

        let ranking = rank_versions(&records);
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].version, "a");
        assert_eq!(ranking[0].score, 1.0);
    }

    #[test]
    fn test_ties_break_by_version_name() {
        let records = vec![record("m1", "t1", "b", 10.0), record("m2", "t1", "a", 10.0)];

        let ranking = rank_versions(&records);
        let names: Vec<_> = ranking.iter().map(|r| r.version.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_format_ranking() {
        let text = format_ranking(&[VersionRank {
            version: "0.8.5".to_string(),
            score: 0.75,
            samples: 3,
        }]);

        assert!(text.starts_with("version"));
        assert!(text.contains("0.7500"));
    }
}
