//! http-to-curl library interface
//!
//! Renders an outgoing HTTP request as a copy-pasteable, shell-quoted curl
//! command, and provides a client that can log or dump that command before
//! the request is sent.
//!
//! # Module Organization
//!
//! - [`curl`] - Command generation (generate_curl_command)
//! - [`command`] - Generic command line builder and shell quoting
//! - [`request`] - Request descriptor, headers and body encoding
//! - [`hooks`] - Before-send hooks (logging, dump-and-halt)
//! - [`client`] - reqwest client that runs the hooks (CurlClient)
//! - [`config`] - Logging configuration
//! - [`errors`] - Error types (HttpToCurlError, Result)
//! - [`status`] - Exit status codes (ExitStatus)

pub mod cli;
pub mod client;
pub mod command;
pub mod config;
pub mod curl;
pub mod errors;
pub mod hooks;
pub mod http;
pub mod input;
pub mod request;
pub mod status;

pub use client::CurlClient;
pub use command::{shell_quote, CommandLineGenerator};
pub use config::{Config, LogLevel, LoggingConfig};
pub use curl::{generate_curl_command, generate_curl_command_with};
pub use errors::{HttpToCurlError, Result};
pub use request::{BodyKind, HeaderList, RequestBody, RequestDescriptor, RequestOptions};
pub use status::ExitStatus;
