//! Request descriptors
//!
//! A [`RequestDescriptor`] is the plain-data view of an outgoing request that
//! the curl translator reads: method, URL, ordered headers and an optional
//! classified body. Descriptors are built by callers, or captured from a
//! fully-built `reqwest::Request` just before it is sent.

mod capture;
mod form;
mod headers;

pub use form::{decode_form, encode_form};
pub use headers::HeaderList;

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::errors::Result;

/// How a request body should be rendered
///
/// Supplied by the caller alongside the body; the translator never derives
/// it from header content itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Rendered as compact JSON
    Json,
    /// Rendered as `application/x-www-form-urlencoded`
    Form,
    /// Multipart form data; not rendered
    Multipart,
    /// Anything else; not rendered
    Raw,
}

impl BodyKind {
    /// Classify a `Content-Type` header value
    ///
    /// Any media type mentioning `json` is JSON, the urlencoded media type is
    /// form, `multipart/*` is multipart, everything else is raw.
    pub fn from_content_type(content_type: &str) -> Self {
        let lowered = content_type.to_ascii_lowercase();
        let essence = lowered.split(';').next().unwrap_or("").trim();

        if essence.contains("json") {
            BodyKind::Json
        } else if essence == "application/x-www-form-urlencoded" {
            BodyKind::Form
        } else if essence.starts_with("multipart/") {
            BodyKind::Multipart
        } else {
            BodyKind::Raw
        }
    }
}

/// A structured request body plus its classification
///
/// Bodies captured from a built request also keep the exact text that goes
/// on the wire; that text is rendered instead of re-encoding the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestBody {
    pub kind: BodyKind,
    pub payload: JsonValue,
    wire: Option<String>,
}

impl RequestBody {
    pub fn new(kind: BodyKind, payload: JsonValue) -> Self {
        Self { kind, payload, wire: None }
    }

    /// A body whose encoded form is already known
    pub fn captured(kind: BodyKind, payload: JsonValue, wire: impl Into<String>) -> Self {
        Self {
            kind,
            payload,
            wire: Some(wire.into()),
        }
    }

    /// The exact body text, for captured bodies
    pub fn wire(&self) -> Option<&str> {
        self.wire.as_deref()
    }

    /// A JSON body from any serializable payload
    pub fn json<T: Serialize + ?Sized>(payload: &T) -> Result<Self> {
        Ok(Self::new(BodyKind::Json, serde_json::to_value(payload)?))
    }

    /// A form body from any serializable payload
    pub fn form<T: Serialize + ?Sized>(payload: &T) -> Result<Self> {
        Ok(Self::new(BodyKind::Form, serde_json::to_value(payload)?))
    }

    pub fn is_json(&self) -> bool {
        self.kind == BodyKind::Json
    }

    pub fn is_form(&self) -> bool {
        self.kind == BodyKind::Form
    }

    /// Encode the payload according to its kind
    ///
    /// Returns `Ok(None)` for kinds that are not rendered (multipart, raw).
    pub fn encode(&self) -> Result<Option<String>> {
        match self.kind {
            BodyKind::Json | BodyKind::Form if self.wire.is_some() => Ok(self.wire.clone()),
            BodyKind::Json => Ok(Some(serde_json::to_string(&self.payload)?)),
            BodyKind::Form => encode_form(&self.payload).map(Some),
            BodyKind::Multipart | BodyKind::Raw => Ok(None),
        }
    }
}

/// Transport options that accompany a request through the before-send hooks
///
/// Carried for hook implementations; the curl translation does not read them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions(Map<String, JsonValue>);

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: JsonValue) -> Option<JsonValue> {
        self.0.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Plain-data description of an outgoing HTTP request
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    /// HTTP method as given; compared case-insensitively
    pub method: String,
    /// Target URL, kept verbatim
    pub url: String,
    /// Headers in insertion order
    pub headers: HeaderList,
    pub body: Option<RequestBody>,
}

impl RequestDescriptor {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: HeaderList::new(),
            body: None,
        }
    }

    /// Append a header value
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.append(name, value);
        self
    }

    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn is_json(&self) -> bool {
        self.body.as_ref().is_some_and(RequestBody::is_json)
    }

    pub fn is_form(&self) -> bool {
        self.body.as_ref().is_some_and(RequestBody::is_form)
    }
}
