//! Small shared helpers: status normalization, date-prefix parsing, and the
//! lenient serde coercions used by the wire model.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Normalize a status string for comparison: trim + lowercase.
///
/// Every status comparison in the deriver goes through this one helper so
/// "Done", " done " and "done" are the same value.
pub(crate) fn normalize_status(value: Option<&str>) -> String {
    value.unwrap_or("").trim().to_lowercase()
}

/// Parse the date-only prefix of an ISO 8601 string.
///
/// A trailing time component ("2026-03-01T09:00:00Z", "2026-03-01 09:00")
/// is stripped before parsing; day arithmetic is date-only.
pub(crate) fn parse_day(raw: &str) -> Option<NaiveDate> {
    let day = raw.trim().split(['T', ' ']).next().unwrap_or_default();
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Deserialize a number that may arrive as a JSON number or a numeric
/// string. Anything else reads as 0.
pub(crate) fn de_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(coerce_f64(&Value::deserialize(deserializer)?))
}

/// Deserialize a non-negative count; negatives and junk read as 0.
pub(crate) fn de_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let n = coerce_f64(&Value::deserialize(deserializer)?);
    if n.is_finite() && n > 0.0 {
        Ok(n.min(u32::MAX as f64) as u32)
    } else {
        Ok(0)
    }
}

/// Deserialize an optional string, stringifying scalar numbers/bools.
/// Structured values (arrays, objects) and null read as `None`.
pub(crate) fn de_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

fn coerce_f64(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}
