//! Configuration and constants for the pipeline and CLI.

/// Current chart output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Timing aggregates arrive in microseconds, charts plot milliseconds
pub const US_PER_MS: f64 = 1000.0;

// One-letter trend codes written by the results analyzer
pub const TREND_WORSENING: &str = "W";
pub const TREND_NOT_ENOUGH_DATA: &str = "N";
pub const TREND_STABLE: &str = "S";
pub const TREND_IMPROVING: &str = "I";

/// Extension of benchmark result files inside a results directory
pub const RESULT_FILE_EXTENSION: &str = "json";

/// Result file stems end with the renderer backend, "-GL" or "-VK"
pub const RENDERER_SUFFIX_LEN: usize = 3;

/// Raw samples needed before the inner (second-largest / second-smallest) extrema are reported
pub const MIN_SAMPLES_FOR_INNER_EXTREMA: usize = 4;

/// Suite name used for tests whose name has no "Suite::" prefix
pub const UNKNOWN_SUITE: &str = "N/A";

/// Separator between suite and test in result names
pub const SUITE_SEPARATOR: &str = "::";

/// Generic integrated graphics string that is replaced by the CPU name
pub const GENERIC_INTEGRATED_GPU: &str = "AMD Radeon (TM) Graphics";

// Keys in the `xemu_machine_info` text block
pub const GL_VENDOR_KEY: &str = "GL_VENDOR";
pub const GL_RENDERER_KEY: &str = "GL_RENDERER";
pub const GL_VERSION_KEY: &str = "GL_VERSION";
pub const GL_SHADING_LANGUAGE_VERSION_KEY: &str = "GL_SHADING_LANGUAGE_VERSION";
