//! Build version identifiers attached to every benchmark record.
//!
//! A version is either the concrete build described by the results file, or
//! an alias created by tagging, which collapses several builds under one
//! display and ordering label.

use super::collation::locale_compare;
use crate::utils::error::VersionError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;

/// Version descriptor as it appears in raw records (`xemu_version_obj`)
///
/// The numeric build fields are stored as whatever JSON value the producer
/// wrote (integer, float, string), so foreign descriptors round-trip intact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionDescriptor {
    #[serde(default)]
    pub major: Option<Value>,

    #[serde(default)]
    pub minor: Option<Value>,

    #[serde(default)]
    pub patch: Option<Value>,

    #[serde(default)]
    pub build: Option<Value>,

    #[serde(default)]
    pub branch: Option<String>,

    #[serde(default)]
    pub git_hash: Option<String>,

    #[serde(default)]
    pub build_type: Option<String>,

    /// Primary display string
    #[serde(default)]
    pub short: Option<String>,

    /// Ordering key
    #[serde(default)]
    pub compare: Option<String>,

    /// Tag label, only present once a version has been aliased
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
}

/// Build fields carried through from the descriptor, uninterpreted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildInfo {
    pub major: Option<Value>,
    pub minor: Option<Value>,
    pub patch: Option<Value>,
    pub build: Option<Value>,
    pub branch: Option<String>,
    pub git_hash: Option<String>,
    pub build_type: Option<String>,
}

/// The label a version displays and sorts by
#[derive(Debug, Clone, PartialEq, Eq)]
enum VersionLabel {
    /// Names taken from the descriptor
    Concrete {
        short_name: String,
        compare_name: String,
    },

    /// A user-chosen tag replacing both names
    Aliased { tag: String },
}

/// Parsed, comparable build version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VersionDescriptor", into = "VersionDescriptor")]
pub struct XemuVersion {
    build: BuildInfo,
    label: VersionLabel,
}

impl XemuVersion {
    /// Build a version from its descriptor
    ///
    /// # Errors
    /// * `VersionError::MissingShortName` - `short` is absent or empty
    /// * `VersionError::MissingCompareName` - `compare` is absent or empty
    pub fn from_descriptor(descriptor: &VersionDescriptor) -> Result<Self, VersionError> {
        let short_name = non_empty(descriptor.short.as_deref())
            .ok_or(VersionError::MissingShortName)?;
        let compare_name = non_empty(descriptor.compare.as_deref())
            .ok_or(VersionError::MissingCompareName)?;

        Ok(Self {
            build: BuildInfo {
                major: descriptor.major.clone(),
                minor: descriptor.minor.clone(),
                patch: descriptor.patch.clone(),
                build: descriptor.build.clone(),
                branch: descriptor.branch.clone(),
                git_hash: descriptor.git_hash.clone(),
                build_type: descriptor.build_type.clone(),
            },
            label: VersionLabel::Concrete {
                short_name: short_name.to_string(),
                compare_name: compare_name.to_string(),
            },
        })
    }

    pub fn build_info(&self) -> &BuildInfo {
        &self.build
    }

    /// Display name, the tag once one has been applied
    pub fn short_name(&self) -> &str {
        match &self.label {
            VersionLabel::Concrete { short_name, .. } => short_name,
            VersionLabel::Aliased { tag } => tag,
        }
    }

    /// Ordering key, the tag once one has been applied
    pub fn compare_name(&self) -> &str {
        match &self.label {
            VersionLabel::Concrete { compare_name, .. } => compare_name,
            VersionLabel::Aliased { tag } => tag,
        }
    }

    pub fn friendly_name(&self) -> Option<&str> {
        match &self.label {
            VersionLabel::Concrete { .. } => None,
            VersionLabel::Aliased { tag } => Some(tag),
        }
    }

    pub fn is_tagged(&self) -> bool {
        matches!(self.label, VersionLabel::Aliased { .. })
    }

    /// Alias this version under `tag`
    ///
    /// Afterwards the version displays and orders exactly like a version
    /// whose short and compare names are both `tag`. Build fields are kept.
    ///
    /// # Errors
    /// * `VersionError::EmptyTag` - tag is empty; the version is left unchanged
    pub fn set_tag(&mut self, tag: impl Into<String>) -> Result<(), VersionError> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(VersionError::EmptyTag);
        }

        self.label = VersionLabel::Aliased { tag };
        Ok(())
    }

    /// Three-way, locale-style comparison of the ordering keys
    pub fn locale_compare(&self, other: &XemuVersion) -> Ordering {
        locale_compare(self.compare_name(), other.compare_name())
    }
}

impl fmt::Display for XemuVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl TryFrom<VersionDescriptor> for XemuVersion {
    type Error = VersionError;

    fn try_from(descriptor: VersionDescriptor) -> Result<Self, Self::Error> {
        let mut version = Self::from_descriptor(&descriptor)?;
        if let Some(tag) = descriptor.friendly_name {
            version.set_tag(tag)?;
        }
        Ok(version)
    }
}

impl From<XemuVersion> for VersionDescriptor {
    fn from(version: XemuVersion) -> Self {
        let friendly_name = version.friendly_name().map(str::to_string);
        let short = Some(version.short_name().to_string());
        let compare = Some(version.compare_name().to_string());
        let build = version.build;

        VersionDescriptor {
            major: build.major,
            minor: build.minor,
            patch: build.patch,
            build: build.build,
            branch: build.branch,
            git_hash: build.git_hash,
            build_type: build.build_type,
            short,
            compare,
            friendly_name,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn descriptor(short: &str, compare: &str) -> VersionDescriptor {
        VersionDescriptor {
            major: Some(json!(0)),
            minor: Some(json!(8)),
            patch: Some(json!(5)),
            build: Some(json!(12)),
            branch: Some("master".to_string()),
            git_hash: Some("abc1234".to_string()),
            build_type: Some("release".to_string()),
            short: Some(short.to_string()),
            compare: Some(compare.to_string()),
            friendly_name: None,
        }
    }

    #[test]
    fn test_from_descriptor_valid() {
        let version = XemuVersion::from_descriptor(&descriptor("0.8.5", "0008.0005")).unwrap();

        assert_eq!(version.to_string(), "0.8.5");
        assert_eq!(version.compare_name(), "0008.0005");
        assert_eq!(version.build_info().build, Some(json!(12)));
        assert!(version.friendly_name().is_none());
    }

    #[test]
    fn test_empty_short_name_rejected() {
        let result = XemuVersion::from_descriptor(&descriptor("", "x"));
        assert_eq!(result.unwrap_err(), VersionError::MissingShortName);
    }

    #[test]
    fn test_missing_compare_name_rejected() {
        let mut desc = descriptor("0.8.5", "x");
        desc.compare = None;

        let result = XemuVersion::from_descriptor(&desc);
        assert_eq!(result.unwrap_err(), VersionError::MissingCompareName);
    }

    #[test]
    fn test_numeric_fields_pass_through() {
        let mut desc = descriptor("weird", "weird");
        desc.major = Some(json!(-1));
        desc.build = None;

        let version = XemuVersion::from_descriptor(&desc).unwrap();
        assert_eq!(version.build_info().major, Some(json!(-1)));
        assert_eq!(version.build_info().build, None);
    }

    #[test]
    fn test_non_integer_build_fields_round_trip() {
        let json = json!({
            "major": "0", "minor": 8, "patch": 5, "build": 1.5,
            "short": "0.8.5", "compare": "0.8.5"
        });

        let version: XemuVersion = serde_json::from_value(json).unwrap();
        assert_eq!(version.build_info().major, Some(json!("0")));
        assert_eq!(version.build_info().build, Some(json!(1.5)));

        let written = serde_json::to_value(&version).unwrap();
        assert_eq!(written["major"], "0");
        assert_eq!(written["build"], 1.5);
    }

    #[test]
    fn test_set_tag_replaces_names() {
        let mut version = XemuVersion::from_descriptor(&descriptor("0.8.5", "0008.0005")).unwrap();
        version.set_tag("v2").unwrap();

        let fresh = XemuVersion::from_descriptor(&descriptor("v2", "v2")).unwrap();

        assert_eq!(version.to_string(), "v2");
        assert_eq!(version.friendly_name(), Some("v2"));
        assert_eq!(version.locale_compare(&fresh), Ordering::Equal);
        assert_eq!(version.build_info().git_hash.as_deref(), Some("abc1234"));
    }

    #[test]
    fn test_set_empty_tag_rejected() {
        let mut version = XemuVersion::from_descriptor(&descriptor("0.8.5", "0.8.5")).unwrap();

        assert_eq!(version.set_tag(""), Err(VersionError::EmptyTag));
        assert_eq!(version.to_string(), "0.8.5");
        assert!(!version.is_tagged());
    }

    #[test]
    fn test_serde_keeps_tag() {
        let mut version = XemuVersion::from_descriptor(&descriptor("0.8.5", "0.8.5")).unwrap();
        version.set_tag("release-candidate").unwrap();

        let json = serde_json::to_value(&version).unwrap();
        assert_eq!(json["short"], "release-candidate");
        assert_eq!(json["friendly_name"], "release-candidate");

        let restored: XemuVersion = serde_json::from_value(json).unwrap();
        assert_eq!(restored, version);
    }

    #[test]
    fn test_deserialize_invalid_descriptor_fails() {
        let json = serde_json::json!({ "short": "", "compare": "x" });
        assert!(serde_json::from_value::<XemuVersion>(json).is_err());
    }
}
