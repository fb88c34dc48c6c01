//! Curl command generation
//!
//! Converts a [`RequestDescriptor`] into an equivalent `curl` invocation for
//! sharing and debugging. Tokens are always emitted in the same order:
//!
//! ```text
//! curl [-H '<Name>: <value>']... [-d '<body>'] -X '<METHOD>' '<url>'
//! ```
//!
//! Bodies are only rendered for POST, PUT and PATCH, and only when they are
//! classified as JSON or form data. Multipart bodies are not rendered.

mod pretty;

pub use pretty::format_curl_pretty;

use crate::command::CommandLineGenerator;
use crate::errors::Result;
use crate::http;
use crate::request::{RequestDescriptor, RequestOptions};

/// Binary name at the head of every generated command
pub const CURL_BINARY: &str = "curl";

/// Generate an equivalent curl command for the request
///
/// Fails only when the body cannot be encoded under its classification.
pub fn generate_curl_command(request: &RequestDescriptor) -> Result<String> {
    let mut cmd = CommandLineGenerator::new(CURL_BINARY);

    for (name, value) in request.headers.iter() {
        cmd.add_option('H', format!("{}: {}", display_name(name), value));
    }

    if http::carries_body(&request.method) {
        if let Some(body) = &request.body {
            if let Some(data) = body.encode()? {
                cmd.add_option('d', data);
            }
        }
    }

    cmd.add_option('X', request.method.to_uppercase());
    cmd.add_argument(request.url.as_str());

    Ok(cmd.generate())
}

/// Same as [`generate_curl_command`], with the transport options that travel
/// alongside the request through the before-send hooks
pub fn generate_curl_command_with(request: &RequestDescriptor, _options: &RequestOptions) -> Result<String> {
    generate_curl_command(request)
}

/// Upper-case only the first character of a header name
///
/// `content-type` becomes `Content-type`; the rest of the name is untouched.
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
