//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors raised while building or re-tagging a version identifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Invalid version object: missing short name")]
    MissingShortName,

    #[error("Invalid version object: missing compare name")]
    MissingCompareName,

    #[error("Version tag cannot be empty")]
    EmptyTag,
}

/// Errors that can occur while running the record pipeline
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Record {index} has an invalid version: {source}")]
    InvalidVersion {
        index: usize,
        #[source]
        source: VersionError,
    },
}

/// Errors that can occur while loading raw benchmark results
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Results directory '{0}' does not exist")]
    MissingDirectory(String),

    #[error("Failed to read results file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Failed to walk results directory: {0}")]
    WalkFailed(#[from] walkdir::Error),

    #[error("Invalid results file {path}: {source}")]
    InvalidFile {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur while loading configuration files
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Config TOML parse error: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("Invalid tag rule: {0}")]
    InvalidRule(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
