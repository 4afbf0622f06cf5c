//! JSON documents: whole-document parse and sorted, 4-space-indented output.

use crate::error::ParamError;
use crate::ParamMap;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

/// Parse a JSON document whose root must be an object.
///
/// Syntax errors come back as [`ParamError::Json`] so the loader can tell a
/// format failure apart from a well-formed document of the wrong shape.
pub fn parse(text: &str) -> Result<ParamMap, ParamError> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(map),
        other => Err(ParamError::NotAMapping(kind(&other))),
    }
}

/// Render a parameter set with keys sorted at every level and 4-space indent.
pub fn to_sorted_string(params: &ParamMap) -> Result<String, ParamError> {
    let sorted = sorted_map(params);
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    sorted.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn sorted_map(map: &ParamMap) -> ParamMap {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
        .into_iter()
        .map(|(key, value)| (key.clone(), sorted_value(value)))
        .collect()
}

fn sorted_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(sorted_map(map)),
        Value::Array(items) => Value::Array(items.iter().map(sorted_value).collect()),
        other => other.clone(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
