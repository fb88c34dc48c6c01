//! Capture a descriptor from a built `reqwest::Request`

use reqwest::header::{CONTENT_TYPE, HOST};
use tracing::warn;
use url::Url;

use super::{decode_form, BodyKind, HeaderList, RequestBody, RequestDescriptor};
use crate::errors::{HttpToCurlError, Result};

impl RequestDescriptor {
    /// Snapshot a request that is about to be sent
    ///
    /// Header names come out lower-case, as the HTTP stack stores them. A
    /// `Host` header is added first when the request does not carry one,
    /// since the connection layer sends it. Streaming bodies have no bytes
    /// to inspect and are captured as absent. A body that does not decode
    /// under its content type is kept as raw text.
    pub fn from_reqwest(request: &reqwest::Request) -> Self {
        let mut headers: HeaderList = request
            .headers()
            .iter()
            .map(|(name, value)| {
                (name.as_str().to_string(), String::from_utf8_lossy(value.as_bytes()).into_owned())
            })
            .collect();

        if !request.headers().contains_key(HOST) {
            if let Some(host) = host_header(request.url()) {
                headers.prepend("Host", host);
            }
        }

        let kind = request
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(BodyKind::from_content_type)
            .unwrap_or(BodyKind::Raw);

        let bytes = request
            .body()
            .and_then(|b| b.as_bytes())
            .filter(|b| !b.is_empty());

        let body = bytes.map(|bytes| {
            capture_body(kind, bytes).unwrap_or_else(|e| {
                warn!(url = %request.url(), error = %e, "Request body does not match its content type");
                raw_body(BodyKind::Raw, bytes)
            })
        });

        Self {
            method: request.method().as_str().to_string(),
            url: request.url().as_str().to_string(),
            headers,
            body,
        }
    }
}

fn capture_body(kind: BodyKind, bytes: &[u8]) -> Result<RequestBody> {
    let payload = match kind {
        BodyKind::Json => serde_json::from_slice(bytes)?,
        BodyKind::Form => decode_form(bytes)?,
        BodyKind::Multipart | BodyKind::Raw => return Ok(raw_body(kind, bytes)),
    };
    let wire = std::str::from_utf8(bytes)
        .map_err(|e| HttpToCurlError::Parse(format!("Body is not UTF-8: {}", e)))?;
    Ok(RequestBody::captured(kind, payload, wire))
}

fn raw_body(kind: BodyKind, bytes: &[u8]) -> RequestBody {
    let text = String::from_utf8_lossy(bytes).into_owned();
    RequestBody::captured(kind, serde_json::Value::String(text.clone()), text)
}

/// `host[:port]` as it would appear in the `Host` header
fn host_header(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}
