//! Build version identifiers.
//!
//! This module handles:
//! - Parsing version descriptors into `XemuVersion`
//! - Locale-style ordering of versions
//! - Aliasing groups of builds under a tag

pub mod collation;
pub mod tags;
pub mod xemu_version;

// Re-export main types
pub use collation::locale_compare;
pub use tags::{load_tag_config, parse_tag_config, TagConfig, TagRule};
pub use xemu_version::{BuildInfo, VersionDescriptor, XemuVersion};
