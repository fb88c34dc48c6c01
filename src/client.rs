//! HTTP client with before-send hooks
//!
//! [`CurlClient`] wraps a `reqwest::Client`. Every request sent through it is
//! snapshotted into a [`RequestDescriptor`] and shown to the registered
//! [`BeforeSendHooks`] before it leaves.

use std::fmt;
use std::sync::Arc;

use reqwest::{IntoUrl, Method, RequestBuilder, Response};
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::config::{Config, LoggingConfig};
use crate::errors::{HttpToCurlError, Result};
use crate::hooks::{self, BeforeSendHook, BeforeSendHooks, CurlLogHook, DumpWithCurl, Dumper, HookFlow, LogSink, TracingSink};
use crate::request::{RequestDescriptor, RequestOptions};
use crate::status::ExitStatus;

/// Called when a hook asks to halt; the default terminates the process
pub type HaltHandler = Arc<dyn Fn(ExitStatus) + Send + Sync>;

/// A `reqwest::Client` that runs before-send hooks
#[derive(Clone)]
pub struct CurlClient {
    client: reqwest::Client,
    hooks: BeforeSendHooks,
    options: RequestOptions,
    on_halt: HaltHandler,
}

impl CurlClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            hooks: BeforeSendHooks::new(),
            options: RequestOptions::new(),
            on_halt: Arc::new(|status: ExitStatus| {
                hooks::halt(status);
            }),
        }
    }

    /// Client with the hooks the configuration enables
    pub fn from_config(client: reqwest::Client, config: &Config) -> Self {
        Self::new(client).with_logging(&config.logging)
    }

    /// Log every request as a curl command through `tracing`, if enabled
    pub fn with_logging(self, logging: &LoggingConfig) -> Self {
        self.with_logging_sink(logging, Arc::new(TracingSink))
    }

    /// Log every request as a curl command to `sink`, if enabled
    pub fn with_logging_sink(mut self, logging: &LoggingConfig, sink: Arc<dyn LogSink>) -> Self {
        if logging.enabled {
            debug!(level = %logging.log_level, channel = %logging.channel, "Curl logging enabled");
            self.hooks.register(Arc::new(CurlLogHook::new(logging, sink)));
        }
        self
    }

    /// Register a custom before-send hook
    pub fn before_sending(mut self, hook: Arc<dyn BeforeSendHook>) -> Self {
        self.hooks.register(hook);
        self
    }

    /// Print `values` and the curl command for the next request, then halt
    pub fn dump_with_curl(self, values: Vec<JsonValue>) -> Self {
        self.before_sending(Arc::new(DumpWithCurl::new(values)))
    }

    /// Like [`dump_with_curl`](Self::dump_with_curl), writing to `dumper`
    pub fn dump_with_curl_to(self, values: Vec<JsonValue>, dumper: Arc<dyn Dumper>) -> Self {
        self.before_sending(Arc::new(DumpWithCurl::with_dumper(values, dumper)))
    }

    /// Attach a transport option passed to every hook
    pub fn with_option(mut self, key: impl Into<String>, value: JsonValue) -> Self {
        self.options.insert(key, value);
        self
    }

    /// Replace what happens when a hook asks to halt
    ///
    /// If the handler returns, the request is not sent and
    /// [`HttpToCurlError::Halted`] is returned instead.
    pub fn with_halt_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(ExitStatus) + Send + Sync + 'static,
    {
        self.on_halt = Arc::new(handler);
        self
    }

    pub fn hooks(&self) -> &BeforeSendHooks {
        &self.hooks
    }

    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    pub fn inner(&self) -> &reqwest::Client {
        &self.client
    }

    /// Start building a request
    pub fn request<U: IntoUrl>(&self, method: Method, url: U) -> RequestBuilder {
        self.client.request(method, url)
    }

    pub fn get<U: IntoUrl>(&self, url: U) -> RequestBuilder {
        self.request(Method::GET, url)
    }

    pub fn post<U: IntoUrl>(&self, url: U) -> RequestBuilder {
        self.request(Method::POST, url)
    }

    pub fn put<U: IntoUrl>(&self, url: U) -> RequestBuilder {
        self.request(Method::PUT, url)
    }

    pub fn patch<U: IntoUrl>(&self, url: U) -> RequestBuilder {
        self.request(Method::PATCH, url)
    }

    pub fn delete<U: IntoUrl>(&self, url: U) -> RequestBuilder {
        self.request(Method::DELETE, url)
    }

    /// Build and send a request
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        self.execute(builder.build()?).await
    }

    /// Run the hooks, then send the request
    pub async fn execute(&self, request: reqwest::Request) -> Result<Response> {
        if !self.hooks.is_empty() {
            let descriptor = RequestDescriptor::from_reqwest(&request);
            if let HookFlow::Halt(status) = self.hooks.dispatch(&descriptor, &self.options)? {
                (self.on_halt)(status);
                return Err(HttpToCurlError::Halted(status));
            }
        }

        Ok(self.client.execute(request).await?)
    }
}

impl Default for CurlClient {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

impl fmt::Debug for CurlClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurlClient")
            .field("hooks", &self.hooks)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
