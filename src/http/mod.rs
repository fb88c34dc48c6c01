//! HTTP protocol types and constants
//!
//! Provides HTTP-related constants and utilities for the request methods curl commands are built from.

mod method;

pub use method::*;
