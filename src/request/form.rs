//! `application/x-www-form-urlencoded` bodies
//!
//! Structured payloads are flattened query-builder style: nested objects
//! become `outer[inner]`, arrays become `outer[0]`, booleans become `1`/`0`
//! and `null` members are dropped.

use serde_json::{Map, Value as JsonValue};

use crate::errors::{HttpToCurlError, Result};

/// Encode a payload as a form body, keeping key insertion order
pub fn encode_form(payload: &JsonValue) -> Result<String> {
    let mut pairs: Vec<(String, String)> = Vec::new();

    match payload {
        JsonValue::Object(map) => {
            for (key, value) in map {
                flatten(key.clone(), value, &mut pairs);
            }
        }
        JsonValue::Array(items) => {
            for (index, value) in items.iter().enumerate() {
                flatten(index.to_string(), value, &mut pairs);
            }
        }
        other => return Err(HttpToCurlError::FormPayload(type_name(other))),
    }

    Ok(serde_urlencoded::to_string(&pairs)?)
}

/// Decode a form body into an ordered object of string values
///
/// A repeated key keeps its first position and collects every value, in
/// order, into an array.
pub fn decode_form(bytes: &[u8]) -> Result<JsonValue> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(bytes)?;

    let mut map = Map::new();
    for (key, value) in pairs {
        let value = JsonValue::String(value);
        match map.get_mut(&key) {
            Some(JsonValue::Array(values)) => values.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = JsonValue::Array(vec![first, value]);
            }
            None => {
                map.insert(key, value);
            }
        }
    }
    Ok(JsonValue::Object(map))
}

fn flatten(key: String, value: &JsonValue, pairs: &mut Vec<(String, String)>) {
    match value {
        JsonValue::Null => {}
        JsonValue::Bool(b) => pairs.push((key, if *b { "1" } else { "0" }.to_string())),
        JsonValue::Number(n) => pairs.push((key, n.to_string())),
        JsonValue::String(s) => pairs.push((key, s.clone())),
        JsonValue::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten(format!("{}[{}]", key, index), item, pairs);
            }
        }
        JsonValue::Object(map) => {
            for (inner, item) in map {
                flatten(format!("{}[{}]", key, inner), item, pairs);
            }
        }
    }
}

fn type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
