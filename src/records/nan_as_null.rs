//! Serde helpers for NaN-capable timing values.
//!
//! JSON has no NaN, so "insufficient samples" travels as `null` (or a
//! missing key) and becomes NaN in memory.
//!
//! Only NaN is mapped to `null` here. Infinities are handed to the
//! serializer unchanged; `serde_json` has no infinity literal and writes
//! them as `null` too, so they read back as NaN.

use serde::{Deserialize, Deserializer, Serializer};

/// Default for absent timing fields
pub fn nan() -> f64 {
    f64::NAN
}

pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_nan() {
        serializer.serialize_none()
    } else {
        serializer.serialize_f64(*value)
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}
