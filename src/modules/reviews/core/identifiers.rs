// Parsing of identifiers that arrive as raw path, query or body values.

use serde_json::Value;

/// Parses a strictly positive integer identifier from its text form.
pub fn parse_id(raw: Option<&str>) -> Option<i64> {
    raw.map(str::trim)
        .and_then(|s| s.parse::<i64>().ok())
        .filter(|id| *id > 0)
}

/// Reads a strictly positive integer identifier from a JSON value. Numeric
/// strings are accepted too.
pub fn id_from_json(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64().filter(|id| *id > 0),
        Value::String(s) => parse_id(Some(s)),
        _ => None,
    }
}

/// Reads a non-empty string from a JSON value.
pub fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}
