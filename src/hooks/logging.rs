//! Log every outgoing request as a curl command

use std::sync::Arc;

use tracing::{debug, error, info, trace, warn};

use super::{BeforeSendHook, HookFlow};
use crate::config::{LogLevel, LoggingConfig};
use crate::curl::generate_curl_command_with;
use crate::errors::Result;
use crate::request::{RequestDescriptor, RequestOptions};

/// Destination for generated commands
///
/// Implementations must not fail; an unknown channel is theirs to handle.
pub trait LogSink: Send + Sync {
    fn log(&self, channel: &str, level: LogLevel, message: &str);
}

/// Writes commands as `tracing` events carrying a `channel` field
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, channel: &str, level: LogLevel, message: &str) {
        match level {
            LogLevel::Error => error!(target: "http_to_curl", channel, "{}", message),
            LogLevel::Warn => warn!(target: "http_to_curl", channel, "{}", message),
            LogLevel::Info => info!(target: "http_to_curl", channel, "{}", message),
            LogLevel::Debug => debug!(target: "http_to_curl", channel, "{}", message),
            LogLevel::Trace => trace!(target: "http_to_curl", channel, "{}", message),
        }
    }
}

/// Before-send hook that logs each request as a curl command
///
/// A request that cannot be rendered is reported as a warning and still
/// sent; logging never blocks the request.
pub struct CurlLogHook {
    level: LogLevel,
    channel: String,
    sink: Arc<dyn LogSink>,
}

impl CurlLogHook {
    pub fn new(config: &LoggingConfig, sink: Arc<dyn LogSink>) -> Self {
        Self {
            level: config.log_level,
            channel: config.channel.clone(),
            sink,
        }
    }

    /// Hook writing to `tracing`
    pub fn tracing(config: &LoggingConfig) -> Self {
        Self::new(config, Arc::new(TracingSink))
    }
}

impl BeforeSendHook for CurlLogHook {
    fn name(&self) -> &str {
        "curl_log"
    }

    fn before_sending(&self, request: &RequestDescriptor, options: &RequestOptions) -> Result<HookFlow> {
        match generate_curl_command_with(request, options) {
            Ok(command) => self.sink.log(&self.channel, self.level, &command),
            Err(e) => warn!(url = %request.url, error = %e, "Could not render request as curl command"),
        }
        Ok(HookFlow::Continue)
    }
}
