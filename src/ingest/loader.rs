//! Load benchmark result files from results directories.

use super::schema::{GpuInfo, ResultFile};
use crate::utils::config::{RENDERER_SUFFIX_LEN, RESULT_FILE_EXTENSION};
use crate::utils::error::IngestError;
use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use walkdir::WalkDir;

/// Load every result file under the given directories
///
/// **Public** - main entry point for ingestion
///
/// Directories are searched recursively for `*.json` files, in file name
/// order so repeated runs produce identical output.
///
/// # Errors
/// * `IngestError::MissingDirectory` - a path is not a directory
/// * `IngestError::WalkFailed` - directory traversal failed
/// * `IngestError::InvalidFile` - a file is not a valid result file
pub fn load_results<P: AsRef<Path>>(results_dirs: &[P]) -> Result<Vec<ResultFile>, IngestError> {
    let mut results = Vec::new();

    for dir in results_dirs {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(IngestError::MissingDirectory(dir.display().to_string()));
        }

        debug!("Scanning results directory: {}", dir.display());

        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() || !is_result_file(entry.path()) {
                continue;
            }
            results.push(load_result_file(entry.path())?);
        }
    }

    info!("Loaded {} result files", results.len());
    Ok(results)
}

/// Load one result file and fill in the fields derived from its name and contents
pub fn load_result_file(path: &Path) -> Result<ResultFile, IngestError> {
    debug!("Reading result file: {}", path.display());

    let file = File::open(path)?;
    let mut result: ResultFile = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        IngestError::InvalidFile {
            path: path.display().to_string(),
            source,
        }
    })?;

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    result.machine_id = strip_renderer_suffix(&stem).to_string();
    result.machine_id_with_renderer = stem;
    result.gpu = GpuInfo::from_machine_info(&result.xemu_machine_info);

    Ok(result)
}

fn is_result_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == RESULT_FILE_EXTENSION)
}

/// Drop the "-GL"/"-VK" renderer suffix from a file stem
pub fn strip_renderer_suffix(stem: &str) -> &str {
    let keep = stem.chars().count().saturating_sub(RENDERER_SUFFIX_LEN);
    match stem.char_indices().nth(keep) {
        Some((end, _)) => &stem[..end],
        None => stem,
    }
}
