//! HTTP method constants and utilities

pub const GET: &str = "GET";
pub const POST: &str = "POST";
pub const PUT: &str = "PUT";
pub const PATCH: &str = "PATCH";
pub const DELETE: &str = "DELETE";
pub const HEAD: &str = "HEAD";
pub const OPTIONS: &str = "OPTIONS";

/// Methods accepted as the first CLI positional
pub const STANDARD_METHODS: &[&str] = &[GET, POST, PUT, PATCH, DELETE, HEAD, OPTIONS];

/// Methods whose body is rendered into the curl command
pub const BODY_METHODS: &[&str] = &[POST, PUT, PATCH];

pub fn is_standard(method: &str) -> bool {
    STANDARD_METHODS.iter().any(|&m| m.eq_ignore_ascii_case(method))
}

/// Check whether a request body is rendered for this method (case-insensitive)
pub fn carries_body(method: &str) -> bool {
    BODY_METHODS.iter().any(|&m| m.eq_ignore_ascii_case(method))
}

/// Method used when none is given: POST with data, GET without
pub fn infer(has_data: bool) -> &'static str {
    if has_data {
        POST
    } else {
        GET
    }
}
