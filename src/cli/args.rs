//! CLI argument definitions using clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// http-to-curl - print the curl command equivalent to an HTTP request
#[derive(Parser, Debug, Clone)]
#[command(name = "http-to-curl", version, about, long_about = None)]
pub struct Args {
    /// HTTP method (GET, POST, PUT, PATCH, DELETE, ...)
    /// Defaults to GET, or POST if data is present
    #[arg(value_name = "METHOD")]
    pub method: String,

    /// The URL of the request, used verbatim
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Request items: headers (Name:Value), data (key=value), JSON (key:=json)
    #[arg(value_name = "REQUEST_ITEM")]
    pub request_items: Vec<String>,

    /// (default) Serialize data as a JSON object
    #[arg(short = 'j', long = "json", action = ArgAction::SetTrue, conflicts_with = "form")]
    pub json: bool,

    /// Serialize data as form fields (application/x-www-form-urlencoded)
    #[arg(short = 'f', long = "form", action = ArgAction::SetTrue)]
    pub form: bool,

    /// Colorize the printed command
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pub pretty: bool,

    /// Send the request, logging it as a curl command if logging is enabled
    #[arg(long = "send", action = ArgAction::SetTrue)]
    pub send: bool,

    /// Print the curl command for the request and exit with status 1 instead of sending it
    #[arg(long = "dump", action = ArgAction::SetTrue, conflicts_with = "send")]
    pub dump: bool,

    /// Configuration file (defaults to config.toml in the config directory)
    #[arg(long = "config", value_name = "FILE", env = "HTTP_TO_CURL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long = "debug", action = ArgAction::SetTrue)]
    pub debug: bool,
}
