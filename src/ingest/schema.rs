//! Input schema of benchmark result files.
//!
//! One file per machine and renderer backend, named
//! `<machine_id>-<GL|VK>.json`, holding every test result of a run.

use crate::records::nan_as_null;
use crate::utils::config::{
    GL_RENDERER_KEY, GL_SHADING_LANGUAGE_VERSION_KEY, GL_VENDOR_KEY, GL_VERSION_KEY,
};
use crate::version::VersionDescriptor;
use serde::Deserialize;
use serde_json::Value;

/// A single benchmark result file
#[derive(Debug, Clone, Deserialize)]
pub struct ResultFile {
    /// Free-form version string of the emulator build
    #[serde(default)]
    pub xemu_version: String,

    /// Structured version, when the tester recorded one
    #[serde(default)]
    pub xemu_version_obj: Option<VersionDescriptor>,

    #[serde(default)]
    pub renderer: Value,

    #[serde(default)]
    pub iso: Value,

    #[serde(default)]
    pub machine_info: MachineInfo,

    /// `KEY: value` lines reported by the emulator's GL context
    #[serde(default)]
    pub xemu_machine_info: String,

    #[serde(default)]
    pub results: Vec<TestResult>,

    /// File stem, filled in by the loader
    #[serde(skip)]
    pub machine_id_with_renderer: String,

    /// File stem without the renderer suffix, filled in by the loader
    #[serde(skip)]
    pub machine_id: String,

    /// Parsed from `xemu_machine_info` by the loader
    #[serde(skip)]
    pub gpu: GpuInfo,
}

/// Host description recorded by the tester
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MachineInfo {
    #[serde(default)]
    pub os_system: Option<String>,

    #[serde(default)]
    pub cpu_manufacturer: Option<String>,

    #[serde(default)]
    pub cpu_freq_max: Value,
}

/// Timing results of one test
#[derive(Debug, Clone, Deserialize)]
pub struct TestResult {
    /// "Suite::test" or a bare test name
    pub name: String,

    #[serde(with = "nan_as_null", default = "nan_as_null::nan")]
    pub average_us: f64,

    #[serde(with = "nan_as_null", default = "nan_as_null::nan")]
    pub total_us: f64,

    #[serde(with = "nan_as_null", default = "nan_as_null::nan")]
    pub max_us: f64,

    #[serde(with = "nan_as_null", default = "nan_as_null::nan")]
    pub min_us: f64,

    #[serde(default)]
    pub iterations: u64,

    /// Individual sample durations in microseconds
    #[serde(default)]
    pub raw_results: Vec<f64>,

    /// Trend code, when the results were post-processed by an analyzer
    #[serde(default)]
    pub trend: Option<String>,
}

/// GPU details from the GL context
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GpuInfo {
    pub vendor: Option<String>,
    pub renderer: Option<String>,
    pub gl_version: Option<String>,
    pub glsl_version: Option<String>,
}

impl GpuInfo {
    /// Parse `KEY: value` lines, skipping lines that do not split in two
    pub fn from_machine_info(text: &str) -> Self {
        let mut info = GpuInfo::default();

        for line in text.lines() {
            let Some((key, value)) = line.split_once(": ") else {
                continue;
            };

            let slot = match key {
                GL_VENDOR_KEY => &mut info.vendor,
                GL_RENDERER_KEY => &mut info.renderer,
                GL_VERSION_KEY => &mut info.gl_version,
                GL_SHADING_LANGUAGE_VERSION_KEY => &mut info.glsl_version,
                _ => continue,
            };
            *slot = Some(value.to_string());
        }

        info
    }
}
