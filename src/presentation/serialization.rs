//! Lenient deserializers for the inconsistent shapes ENT services return.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Deserializes an integer sent either as a JSON number or as a string
pub fn int_from_any<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .ok_or_else(|| de::Error::custom(format!("invalid integer {n}"))),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("invalid integer {s:?}"))),
        other => Err(de::Error::custom(format!("expected integer, got {other}"))),
    }
}

/// Like [`int_from_any`], `null` or missing gives 0
pub fn int_from_any_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(0),
        Some(value) => int_from_any(value).map_err(de::Error::custom),
    }
}

/// Deserializes an identifier sent either as a string or as a number
pub fn string_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!("expected identifier, got {other}"))),
    }
}

/// Treats an explicit `null` as the type's default
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// JSON truthiness as the ENT front-end understands it
#[must_use]
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

/// Renders a scalar or a list of scalars as a label, e.g. a profile type
/// that some endpoints send as `"Student"` and others as `["Student"]`
#[must_use]
pub fn value_to_label(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let labels: Vec<String> = items.iter().filter_map(value_to_label).collect();
            (!labels.is_empty()).then(|| labels.join(","))
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
