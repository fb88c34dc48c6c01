//! Before-send hooks
//!
//! Hooks are registered explicitly on a [`BeforeSendHooks`] list owned by the
//! sending client. Just before a request goes out, every hook sees a snapshot
//! of it, synchronously and in registration order.
//!
//! Two hooks ship with the crate:
//!
//! - [`CurlLogHook`] logs each request as a curl command
//! - [`DumpWithCurl`] prints diagnostic values and the curl command, then
//!   asks the client to halt the process

pub mod dump;
pub mod logging;

pub use dump::{halt, DumpWithCurl, Dumper, MemoryDumper, StdoutDumper};
pub use logging::{CurlLogHook, LogSink, TracingSink};

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::errors::Result;
use crate::request::{RequestDescriptor, RequestOptions};
use crate::status::ExitStatus;

/// What the sender should do after a hook ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookFlow {
    /// Keep going; run the next hook, then send
    Continue,
    /// Do not send; terminate with the given status
    Halt(ExitStatus),
}

/// A hook invoked before each request is sent
pub trait BeforeSendHook: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Inspect the request about to be sent
    fn before_sending(&self, request: &RequestDescriptor, options: &RequestOptions) -> Result<HookFlow>;
}

/// Ordered list of before-send hooks
#[derive(Clone, Default)]
pub struct BeforeSendHooks {
    hooks: Vec<Arc<dyn BeforeSendHook>>,
}

impl BeforeSendHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook; it runs after every hook registered before it
    pub fn register(&mut self, hook: Arc<dyn BeforeSendHook>) {
        self.hooks.push(hook);
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Names of registered hooks, in order
    pub fn names(&self) -> Vec<&str> {
        self.hooks.iter().map(|h| h.name()).collect()
    }

    /// Run every hook in order
    ///
    /// Stops at the first hook that asks to halt, and at the first error.
    pub fn dispatch(&self, request: &RequestDescriptor, options: &RequestOptions) -> Result<HookFlow> {
        for hook in &self.hooks {
            let flow = hook.before_sending(request, options)?;
            if let HookFlow::Halt(status) = flow {
                debug!(hook = hook.name(), ?status, "Hook requested halt");
                return Ok(flow);
            }
        }
        Ok(HookFlow::Continue)
    }
}

impl fmt::Debug for BeforeSendHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
