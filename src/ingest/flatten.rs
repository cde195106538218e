//! Flatten result files into one raw record per test result.

use super::schema::{ResultFile, TestResult};
use crate::records::{ExtraFields, RawRecord, TimingAggregates};
use crate::utils::config::{
    GENERIC_INTEGRATED_GPU, MIN_SAMPLES_FOR_INNER_EXTREMA, SUITE_SEPARATOR, TREND_NOT_ENOUGH_DATA,
    UNKNOWN_SUITE,
};
use crate::version::VersionDescriptor;
use log::debug;
use serde_json::{json, Value};

/// Flatten every test result of every file
///
/// **Public** - produces the pipeline's raw input
pub fn flatten_results(files: &[ResultFile]) -> Vec<RawRecord> {
    let records: Vec<RawRecord> = files
        .iter()
        .flat_map(|file| {
            file.results
                .iter()
                .map(move |test_result| flatten_test_result(file, test_result))
        })
        .collect();

    debug!("Flattened {} files into {} records", files.len(), records.len());
    records
}

/// Build the raw record for one test result
pub fn flatten_test_result(file: &ResultFile, result: &TestResult) -> RawRecord {
    let (inner_min_us, inner_max_us) = inner_extrema(&result.raw_results);

    let cpu_manufacturer = file.machine_info.cpu_manufacturer.clone();
    let gpu_renderer = patch_gpu_renderer(file.gpu.renderer.clone(), cpu_manufacturer.as_deref());

    let mut extra = ExtraFields::new();
    extra.insert("suite".to_string(), json!(suite_name(&result.name)));
    extra.insert("test_name".to_string(), json!(result.name));
    extra.insert("total_us".to_string(), float_value(result.total_us));
    extra.insert("iterations".to_string(), json!(result.iterations));
    extra.insert("inner_min_us".to_string(), float_value(inner_min_us));
    extra.insert("xemu_version".to_string(), json!(file.xemu_version));
    extra.insert("renderer".to_string(), file.renderer.clone());
    extra.insert("iso".to_string(), file.iso.clone());
    extra.insert("os_system".to_string(), json!(file.machine_info.os_system));
    extra.insert("cpu_manufacturer".to_string(), json!(cpu_manufacturer));
    extra.insert("cpu_freq_max".to_string(), file.machine_info.cpu_freq_max.clone());
    extra.insert("gpu_vendor".to_string(), json!(file.gpu.vendor));
    extra.insert("gpu_renderer".to_string(), json!(gpu_renderer));
    extra.insert(
        "machine_id_with_renderer".to_string(),
        json!(file.machine_id_with_renderer),
    );

    RawRecord {
        machine_id: file.machine_id.clone(),
        xemu_version_obj: version_descriptor(file),
        trend: result
            .trend
            .clone()
            .unwrap_or_else(|| TREND_NOT_ENOUGH_DATA.to_string()),
        timings: TimingAggregates {
            average_us: result.average_us,
            average_us_exmax: average_excluding_max(result),
            max_us: result.max_us,
            inner_max_us,
            min_us: result.min_us,
        },
        extra,
    }
}

/// Mean with the single largest sample removed
///
/// Falls back to the plain mean when there is only one iteration.
pub fn average_excluding_max(result: &TestResult) -> f64 {
    if result.iterations > 1 {
        (result.total_us - result.max_us) / (result.iterations - 1) as f64
    } else {
        result.average_us
    }
}

/// Second-smallest and second-largest samples, NaN when too few samples
pub fn inner_extrema(raw_results: &[f64]) -> (f64, f64) {
    if raw_results.len() < MIN_SAMPLES_FOR_INNER_EXTREMA {
        return (f64::NAN, f64::NAN);
    }

    let mut sorted = raw_results.to_vec();
    sorted.sort_by(f64::total_cmp);
    (sorted[1], sorted[sorted.len() - 2])
}

/// Suite part of a "Suite::test" name
pub fn suite_name(test_name: &str) -> &str {
    match test_name.split_once(SUITE_SEPARATOR) {
        Some((suite, _)) => suite,
        None => UNKNOWN_SUITE,
    }
}

// Generic integrated graphics strings say nothing; the CPU name identifies the part
fn patch_gpu_renderer(gpu: Option<String>, cpu: Option<&str>) -> Option<String> {
    match gpu.as_deref() {
        Some(GENERIC_INTEGRATED_GPU) => cpu.map(str::to_string),
        _ => gpu,
    }
}

fn version_descriptor(file: &ResultFile) -> VersionDescriptor {
    file.xemu_version_obj.clone().unwrap_or_else(|| VersionDescriptor {
        short: Some(file.xemu_version.clone()),
        compare: Some(file.xemu_version.clone()),
        ..Default::default()
    })
}

fn float_value(value: f64) -> Value {
    serde_json::Number::from_f64(value).map_or(Value::Null, Value::Number)
}
