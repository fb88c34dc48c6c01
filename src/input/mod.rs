//! Input parsing module
//!
//! Parses CLI request items into typed variants:
//!
//! - `Name:Value` is a header
//! - `key=value` is a string data field
//! - `key:=json` is a raw JSON data field

mod parser;

use serde_json::Value as JsonValue;

pub use parser::parse;

/// A parsed CLI request item
#[derive(Debug, Clone, PartialEq)]
pub enum InputItem {
    /// HTTP header: "Name:Value"
    Header { name: String, value: String },

    /// Data field: "key=value"
    DataField { key: String, value: String },

    /// JSON field with parsed value: "key:=value"
    JsonField { key: String, value: JsonValue },
}

impl InputItem {
    /// Parse a CLI argument string into an InputItem
    pub fn parse(input: &str) -> Result<Self, crate::errors::HttpToCurlError> {
        parser::parse(input)
    }

    /// Check if this item contributes request data
    pub fn is_data(&self) -> bool {
        matches!(self, InputItem::DataField { .. } | InputItem::JsonField { .. })
    }
}
