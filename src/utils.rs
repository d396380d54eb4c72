use zbus::zvariant::{Str, Value};

#[must_use]
/// Converts a [`Value`] into [`Str`], or return [`None`] if it's not `str`.
pub const fn extract_str<'a, 'b>(v: &'a Value<'b>) -> Option<&'a Str<'b>> {
    if let Value::Str(v) = v {
        Some(v)
    } else {
        None
    }
}

#[must_use]
/// Converts a [`Value`] holding any integer type into microseconds.
pub fn extract_micros(v: &Value<'_>) -> Option<i64> {
    match v {
        Value::I64(v) => Some(*v),
        Value::U64(v) => i64::try_from(*v).ok(),
        Value::I32(v) => Some(i64::from(*v)),
        Value::U32(v) => Some(i64::from(*v)),
        Value::Value(v) => extract_micros(v),
        _ => None,
    }
}

#[must_use]
/// Returns the first string of an `as` array, or the string itself for players
/// that report a single `s`.
pub fn extract_first_str(v: &Value<'_>) -> Option<String> {
    match v {
        Value::Str(s) => Some(s.to_string()),
        Value::Array(a) => a.iter().find_map(extract_str).map(ToString::to_string),
        Value::Value(v) => extract_first_str(v),
        _ => None,
    }
}
