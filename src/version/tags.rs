//! Tag rules for aliasing sets of builds under one label.
//!
//! Loads rules from TOML, e.g.:
//!
//! ```toml
//! [[tag]]
//! name = "master"
//! branch = "master"
//!
//! [[tag]]
//! name = "perf-fix"
//! git_hashes = ["abc1234", "def5678"]
//! ```

use super::xemu_version::XemuVersion;
use crate::utils::error::ConfigError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete tag configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TagConfig {
    /// Rules in priority order, first match wins
    #[serde(default, rename = "tag")]
    pub rules: Vec<TagRule>,
}

/// A single alias rule
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TagRule {
    /// Label applied to matching versions
    pub name: String,

    /// Match versions built from this branch
    #[serde(default)]
    pub branch: Option<String>,

    /// Match versions whose git hash starts with any of these
    #[serde(default)]
    pub git_hashes: Vec<String>,
}

impl TagRule {
    /// Check whether every matcher this rule sets agrees with `version`
    pub fn matches(&self, version: &XemuVersion) -> bool {
        let build = version.build_info();

        if let Some(branch) = &self.branch {
            if build.branch.as_deref() != Some(branch.as_str()) {
                return false;
            }
        }

        if !self.git_hashes.is_empty() {
            let Some(hash) = build.git_hash.as_deref() else {
                return false;
            };
            if !self.git_hashes.iter().any(|prefix| hash.starts_with(prefix.as_str())) {
                return false;
            }
        }

        true
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::InvalidRule("tag name cannot be empty".to_string()));
        }

        if self.branch.is_none() && self.git_hashes.is_empty() {
            return Err(ConfigError::InvalidRule(format!(
                "tag '{}' must set branch or git_hashes",
                self.name
            )));
        }

        if self.git_hashes.iter().any(String::is_empty) {
            return Err(ConfigError::InvalidRule(format!(
                "tag '{}' lists an empty git hash",
                self.name
            )));
        }

        Ok(())
    }
}

impl TagConfig {
    /// Validate every rule
    ///
    /// # Errors
    /// * `ConfigError::InvalidRule` - empty name, no matcher, or empty hash
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rules.iter().try_for_each(TagRule::validate)
    }

    /// First rule matching `version`
    pub fn rule_for(&self, version: &XemuVersion) -> Option<&TagRule> {
        self.rules.iter().find(|rule| rule.matches(version))
    }

    /// Tag `version` with the first matching rule
    ///
    /// Returns true if a tag was applied.
    pub fn apply(&self, version: &mut XemuVersion) -> bool {
        let Some(rule) = self.rule_for(version) else {
            return false;
        };

        // Names are validated non-empty on load
        match version.set_tag(rule.name.as_str()) {
            Ok(()) => true,
            Err(e) => {
                debug!("Skipping tag rule '{}': {}", rule.name, e);
                false
            }
        }
    }
}

/// Parse tag rules from a TOML string
pub fn parse_tag_config(contents: &str) -> Result<TagConfig, ConfigError> {
    let config: TagConfig = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

/// Load tag rules from a TOML file
///
/// # Errors
/// * `ConfigError::ReadFailed` - If file cannot be read
/// * `ConfigError::ParseFailed` - If TOML is invalid
/// * `ConfigError::InvalidRule` - If a rule is incomplete
pub fn load_tag_config(path: impl AsRef<Path>) -> Result<TagConfig, ConfigError> {
    let path = path.as_ref();
    debug!("Loading tag rules from: {}", path.display());

    let contents = fs::read_to_string(path)?;
    let config = parse_tag_config(&contents)?;

    debug!("Loaded {} tag rules", config.rules.len());
    Ok(config)
}
