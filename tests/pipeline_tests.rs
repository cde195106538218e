use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::cmp::Ordering;
use xemu_perf_renderer::pipeline::{
    annotate_extrema, expand_records, find_machine_extrema, process_records, project_records,
    ChartData,
};
use xemu_perf_renderer::records::{expand_trend, RawRecord};
use xemu_perf_renderer::utils::error::{PipelineError, VersionError};
use xemu_perf_renderer::version::{VersionDescriptor, XemuVersion};

fn raw(machine: &str, version: &str, average_us: Value, max_us: Value, min_us: Value) -> RawRecord {
    serde_json::from_value(json!({
        "machine_id": machine,
        "xemu_version_obj": { "short": version, "compare": version },
        "trend": "S",
        "average_us": average_us,
        "average_us_exmax": average_us,
        "max_us": max_us,
        "inner_max_us": max_us,
        "min_us": min_us,
        "test_name": "Suite::test"
    }))
    .unwrap()
}

fn with_average(machine: &str, average_us: f64) -> RawRecord {
    raw(machine, "0.8.5", json!(average_us), json!(average_us * 2.0), json!(average_us / 2.0))
}

fn version(short: &str, compare: &str) -> Result<XemuVersion, VersionError> {
    XemuVersion::from_descriptor(&VersionDescriptor {
        short: Some(short.to_string()),
        compare: Some(compare.to_string()),
        ..Default::default()
    })
}

#[test]
fn test_version_requires_both_names() {
    assert!(version("0.8.5", "0.8.5").is_ok());
    assert_eq!(version("", "x"), Err(VersionError::MissingShortName));
    assert_eq!(version("x", ""), Err(VersionError::MissingCompareName));
}

#[test]
fn test_version_ordering_is_consistent() {
    let names = ["0.7.120", "0.8.5", "0.8.10", "master", "Master", "v2"];
    let versions: Vec<_> = names.iter().map(|n| version(n, n).unwrap()).collect();

    for a in &versions {
        for b in &versions {
            assert_eq!(a.locale_compare(b), b.locale_compare(a).reverse());
        }
    }

    let mut sorted = versions.clone();
    sorted.sort_by(|a, b| a.locale_compare(b));
    let order: Vec<_> = sorted.iter().map(|v| v.to_string()).collect();
    assert_eq!(order, vec!["0.7.120", "0.8.10", "0.8.5", "master", "Master", "v2"]);
}

#[test]
fn test_set_tag_matches_fresh_version() {
    let mut tagged = version("0.8.5", "0008.0005").unwrap();
    tagged.set_tag("v2").unwrap();
    let fresh = version("v2", "v2").unwrap();
    let other = version("0.9.0", "0.9.0").unwrap();

    assert_eq!(tagged.to_string(), "v2");
    assert_eq!(tagged.locale_compare(&fresh), Ordering::Equal);
    assert_eq!(tagged.locale_compare(&other), fresh.locale_compare(&other));
}

#[test]
fn test_build_fields_survive_expansion() {
    let mut record = with_average("m1", 100.0);
    record.xemu_version_obj = serde_json::from_value(json!({
        "major": "0", "minor": 8, "patch": 5, "build": 1.5,
        "short": "0.8.5", "compare": "0.8.5"
    }))
    .unwrap();

    let enriched = expand_records(&[record]).unwrap();
    let json = serde_json::to_value(&enriched[0]).unwrap();

    assert_eq!(json["xemu_version_obj"]["major"], "0");
    assert_eq!(json["xemu_version_obj"]["minor"], 8);
    assert_eq!(json["xemu_version_obj"]["build"], 1.5);
}

#[test]
fn test_trend_labels() {
    assert_eq!(expand_trend("W"), "Worsening");
    assert_eq!(expand_trend("S"), "Stable");
    assert_eq!(expand_trend("I"), "Improving");
    assert_eq!(expand_trend("N"), "");
}

#[test]
fn test_expand_all_or_nothing() {
    let mut records: Vec<RawRecord> = (0..5).map(|i| with_average("m1", i as f64)).collect();
    assert_eq!(expand_records(&records).unwrap().len(), 5);

    records[3].xemu_version_obj.short = None;
    match expand_records(&records) {
        Err(PipelineError::InvalidVersion { index, .. }) => assert_eq!(index, 3),
        Ok(_) => panic!("expansion should fail on a malformed version"),
    }
}

#[test]
fn test_project_full_bounds() {
    let enriched = expand_records(&[raw("m1", "a", json!(100), json!(150), json!(50))]).unwrap();
    let stats = project_records(&enriched, false)[0].stats;

    let close = |a: f64, b: f64| (a - b).abs() < 1e-12;
    assert!(close(stats.average_ms, 0.1));
    assert!(close(stats.error_plus_us, 50.0));
    assert!(close(stats.error_minus_us, 50.0));
    assert!(close(stats.error_plus_ms, 0.05));
    assert!(close(stats.error_minus_ms, 0.05));
    assert!(close(stats.adjusted_max_ms, 0.15));
    assert!(close(stats.adjusted_min_ms, 0.05));
}

#[test]
fn test_project_nan_bound() {
    let enriched = expand_records(&[raw("m1", "a", json!(100), Value::Null, json!(50))]).unwrap();
    let stats = project_records(&enriched, false)[0].stats;

    assert_eq!(stats.error_plus_us, 0.0);
    assert_eq!(stats.error_minus_us, 0.0);
    assert_eq!(stats.error_plus_ms, 0.0);
    assert_eq!(stats.error_minus_ms, 0.0);
    assert!(stats.adjusted_max_ms.is_nan());
    assert!(stats.adjusted_min_ms.is_nan());
}

#[test]
fn test_annotate_min_and_max() {
    let raw_records = vec![
        with_average("m1", 5000.0),
        with_average("m1", 2000.0),
        with_average("m1", 8000.0),
    ];
    let annotated = process_records(&raw_records, false).unwrap();

    let flags: Vec<_> = annotated.iter().map(|r| (r.is_min, r.is_max)).collect();
    assert_eq!(flags, vec![(None, None), (Some(true), None), (None, Some(true))]);
}

#[test]
fn test_annotate_single_record_group() {
    let annotated = process_records(&[with_average("solo", 1000.0)], false).unwrap();

    let json = serde_json::to_value(&annotated[0]).unwrap();
    assert!(json.get("isMin").is_none());
    assert!(json.get("isMax").is_none());
}

#[test]
fn test_annotate_equal_pair() {
    let enriched = expand_records(&[with_average("m1", 4000.0), with_average("m1", 4000.0)]).unwrap();
    let projected = project_records(&enriched, false);

    let extrema = find_machine_extrema(&projected);
    assert_eq!(extrema.len(), 1);
    assert_eq!((extrema[0].min_index, extrema[0].max_index), (0, 0));

    let annotated = annotate_extrema(projected);
    assert!(annotated[0].is_min() && annotated[0].is_max());
    assert!(!annotated[1].is_min() && !annotated[1].is_max());
}

#[test]
fn test_rendering_does_not_touch_enriched_records() {
    let chart = ChartData::from_raw(&[with_average("m1", 100.0), with_average("m1", 300.0)], None).unwrap();
    let before = serde_json::to_value(chart.records()).unwrap();

    let first = serde_json::to_value(chart.render(true)).unwrap();
    chart.render(false);
    let second = serde_json::to_value(chart.render(true)).unwrap();

    assert_eq!(serde_json::to_value(chart.records()).unwrap(), before);
    assert_eq!(first, second);
}

#[test]
fn test_output_shape() {
    let annotated = process_records(
        &[raw("m1", "0.8.5", json!(100), Value::Null, json!(50)), with_average("m1", 10.0)],
        false,
    )
    .unwrap();
    let json = serde_json::to_value(&annotated[0]).unwrap();

    assert_eq!(json["machine_id"], "m1");
    assert_eq!(json["xemu_short_version"], "0.8.5");
    assert_eq!(json["xemu_version_obj"]["compare"], "0.8.5");
    assert_eq!(json["trend"], "Stable");
    assert_eq!(json["test_name"], "Suite::test");
    assert_eq!(json["adjusted_max_ms"], Value::Null);
    assert_eq!(json["error_plus_ms"], 0.0);
    assert_eq!(json["isMax"], true);
}
