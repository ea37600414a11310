//! Forgiving field deserializers for hand-maintained catalog files.
//!
//! A null, non-numeric, negative, or out-of-range number reads as zero
//! instead of rejecting the whole snapshot.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Best-effort numeric reading of a JSON value. Numeric strings count.
fn as_number(value: Option<Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite() && *n >= 0.0)
}

pub(crate) fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(as_number(Option::deserialize(deserializer)?).unwrap_or(0.0))
}

pub(crate) fn u16_or_zero<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(as_number(Option::deserialize(deserializer)?)
        .filter(|n| *n <= f64::from(u16::MAX))
        .map_or(0, |n| n.trunc() as u16))
}

pub(crate) fn u32_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(as_number(Option::deserialize(deserializer)?)
        .filter(|n| *n <= f64::from(u32::MAX))
        .map_or(0, |n| n.trunc() as u32))
}

/// `null` reads as the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
