//! Command-line entry point
//!
//! By default the request described on the command line is only rendered as
//! a curl command. `--send` sends it through a [`CurlClient`] (so the logging
//! hook applies) and `--dump` prints the command and halts instead.

pub mod args;

pub use args::Args;

use clap::Parser;
use serde_json::{Map, Value as JsonValue};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::client::CurlClient;
use crate::config::Config;
use crate::curl::{format_curl_pretty, generate_curl_command};
use crate::errors::{HttpToCurlError, Result};
use crate::http;
use crate::input::InputItem;
use crate::request::{RequestBody, RequestDescriptor};
use crate::status::ExitStatus;

/// Parse arguments and run
pub fn run(args: Vec<String>) -> ExitStatus {
    let parsed = match Args::try_parse_from(&args) {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            return if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            };
        }
    };

    let config = match parsed.config.as_deref() {
        Some(path) => Config::load_from(Some(path)),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {}", e);
            Config::default()
        }
    };

    init_tracing(&config, parsed.debug);

    match execute(&parsed, &config) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("http-to-curl: error: {}", e);
            ExitStatus::Error
        }
    }
}

fn init_tracing(config: &Config, debug: bool) {
    let mut default = String::from(if debug { "debug" } else { "warn" });
    if config.logging.enabled {
        default.push_str(&format!(",http_to_curl={}", config.logging.log_level));
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn execute(args: &Args, config: &Config) -> Result<ExitStatus> {
    let descriptor = build_descriptor(args)?;
    debug!(method = %descriptor.method, url = %descriptor.url, "Request described");

    if !args.send && !args.dump {
        let command = generate_curl_command(&descriptor)?;
        if args.pretty {
            println!("{}", format_curl_pretty(&command));
        } else {
            println!("{}", command);
        }
        return Ok(ExitStatus::Success);
    }

    let client = CurlClient::from_config(reqwest::Client::new(), config);
    let client = if args.dump {
        client.dump_with_curl(Vec::new())
    } else {
        client
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let request = to_reqwest(&client, &descriptor)?;
        let response = client.execute(request).await?;
        let status = response.status();
        println!("{}", status);
        println!("{}", response.text().await?);
        Ok::<_, HttpToCurlError>(ExitStatus::Success)
    })
}

/// Split the positionals into method, URL and items
///
/// With a single positional, or when the first is not an HTTP method, the
/// first positional is the URL and the method is inferred from the items.
fn resolve_target(args: &Args) -> (Option<String>, String, Vec<String>) {
    match &args.url {
        Some(url) if http::is_standard(&args.method) => {
            (Some(args.method.clone()), url.clone(), args.request_items.clone())
        }
        Some(item) => {
            let mut items = vec![item.clone()];
            items.extend(args.request_items.iter().cloned());
            (None, args.method.clone(), items)
        }
        None => (None, args.method.clone(), args.request_items.clone()),
    }
}

/// Build a descriptor from the command line
///
/// Data items become a JSON body, or a form body with `--form`. A matching
/// `Content-Type` header is appended unless one was given.
pub fn build_descriptor(args: &Args) -> Result<RequestDescriptor> {
    let (method, url, raw_items) = resolve_target(args);

    let items = raw_items
        .iter()
        .map(|s| InputItem::parse(s))
        .collect::<Result<Vec<_>>>()?;

    let has_data = items.iter().any(InputItem::is_data);
    let method = method.unwrap_or_else(|| http::infer(has_data).to_string());

    let mut descriptor = RequestDescriptor::new(method, url);
    let mut data = Map::new();

    for item in items {
        match item {
            InputItem::Header { name, value } => descriptor.headers.append(name, value),
            InputItem::DataField { key, value } => {
                data.insert(key, JsonValue::String(value));
            }
            InputItem::JsonField { key, value } => {
                data.insert(key, value);
            }
        }
    }

    if has_data {
        let payload = JsonValue::Object(data);
        let (body, content_type) = if args.form {
            (RequestBody::form(&payload)?, "application/x-www-form-urlencoded")
        } else {
            (RequestBody::json(&payload)?, "application/json")
        };
        if !descriptor.headers.contains("Content-Type") {
            descriptor.headers.append("Content-Type", content_type);
        }
        descriptor.body = Some(body);
    }

    Ok(descriptor)
}

fn to_reqwest(client: &CurlClient, descriptor: &RequestDescriptor) -> Result<reqwest::Request> {
    let method = reqwest::Method::from_bytes(descriptor.method.to_uppercase().as_bytes())
        .map_err(|e| HttpToCurlError::Argument(format!("Invalid method '{}': {}", descriptor.method, e)))?;

    let mut builder = client.request(method, descriptor.url.as_str());
    for (name, value) in descriptor.headers.iter() {
        builder = builder.header(name, value);
    }
    if let Some(body) = &descriptor.body {
        if let Some(text) = body.encode()? {
            builder = builder.body(text);
        }
    }

    Ok(builder.build()?)
}
