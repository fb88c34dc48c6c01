//! Request item parser
//!
//! Parses CLI input strings like "Header:Value", "key=value" and
//! "key:=json" into InputItem variants.

use super::InputItem;
use crate::errors::HttpToCurlError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SeparatorKind {
    Header,
    DataField,
    JsonField,
}

/// Separators, longest first so `:=` wins over `:` at the same position
const SEPARATORS: &[(&str, SeparatorKind)] = &[
    (":=", SeparatorKind::JsonField),
    (":", SeparatorKind::Header),
    ("=", SeparatorKind::DataField),
];

/// Parse a CLI request item string into an InputItem
pub fn parse(input: &str) -> Result<InputItem, HttpToCurlError> {
    let mut best: Option<(usize, &str, SeparatorKind)> = None;

    for &(sep, kind) in SEPARATORS {
        if let Some(pos) = input.find(sep) {
            match best {
                // Earlier position wins; at equal positions the longer
                // separator was seen first
                Some((best_pos, _, _)) if pos >= best_pos => {}
                _ => best = Some((pos, sep, kind)),
            }
        }
    }

    match best {
        Some((pos, sep, kind)) => build_item(input, pos, sep, kind),
        None => Err(HttpToCurlError::Parse(format!(
            "Invalid request item '{}': no valid separator found. \
            Use formats like Header:Value, key=value, key:=json",
            input
        ))),
    }
}

fn build_item(input: &str, pos: usize, sep: &str, kind: SeparatorKind) -> Result<InputItem, HttpToCurlError> {
    let key = &input[..pos];
    let value = &input[pos + sep.len()..];

    if key.is_empty() {
        return Err(HttpToCurlError::Parse(format!(
            "Invalid request item '{}': empty key",
            input
        )));
    }

    match kind {
        SeparatorKind::Header => Ok(InputItem::Header {
            name: key.to_string(),
            value: value.trim_start().to_string(),
        }),

        SeparatorKind::DataField => Ok(InputItem::DataField {
            key: key.to_string(),
            value: value.to_string(),
        }),

        SeparatorKind::JsonField => {
            let json_value = serde_json::from_str(value)
                .map_err(|e| HttpToCurlError::Parse(format!("Invalid JSON in '{}': {}", input, e)))?;
            Ok(InputItem::JsonField {
                key: key.to_string(),
                value: json_value,
            })
        }
    }
}
