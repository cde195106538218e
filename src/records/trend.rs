//! Trend classification of a test's performance across builds.
//!
//! The results analyzer writes a one-letter code per record; charts show
//! the expanded label.

use crate::utils::config::{TREND_IMPROVING, TREND_NOT_ENOUGH_DATA, TREND_STABLE, TREND_WORSENING};
use log::warn;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Performance trend of a test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trend {
    Worsening,
    /// Insufficient data to detect trending
    NotEnoughData,
    Stable,
    Improving,
    /// Code not written by any known analyzer version
    Unrecognized,
}

impl Trend {
    /// Classify a one-letter trend code
    ///
    /// Unknown codes degrade to `Trend::Unrecognized`, which renders blank.
    pub fn from_code(code: &str) -> Self {
        match code {
            TREND_WORSENING => Trend::Worsening,
            TREND_NOT_ENOUGH_DATA => Trend::NotEnoughData,
            TREND_STABLE => Trend::Stable,
            TREND_IMPROVING => Trend::Improving,
            other => {
                warn!("Unrecognized trend code {:?}, rendering as blank", other);
                Trend::Unrecognized
            }
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Worsening => "Worsening",
            Trend::Stable => "Stable",
            Trend::Improving => "Improving",
            Trend::NotEnoughData | Trend::Unrecognized => "",
        }
    }

    fn from_label_or_code(value: &str) -> Self {
        match value {
            "Worsening" => Trend::Worsening,
            "Stable" => Trend::Stable,
            "Improving" => Trend::Improving,
            "" => Trend::NotEnoughData,
            code => Trend::from_code(code),
        }
    }
}

/// Expand a trend code straight to its label
pub fn expand_trend(code: &str) -> &'static str {
    Trend::from_code(code).label()
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Enriched records carry the label in place of the code
impl Serialize for Trend {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Trend {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.map_or(Trend::NotEnoughData, |v| Trend::from_label_or_code(&v)))
    }
}
