//! Dump-and-halt debugging aid
//!
//! [`DumpWithCurl`] prints any number of diagnostic values followed by the
//! curl command for the pending request, then asks the sender to stop. The
//! process itself is only ever terminated through [`halt`].

use std::io::Write;
use std::sync::{Arc, Mutex};

use serde_json::Value as JsonValue;

use super::{BeforeSendHook, HookFlow};
use crate::curl::{format_curl_pretty, generate_curl_command_with};
use crate::errors::Result;
use crate::request::{RequestDescriptor, RequestOptions};
use crate::status::ExitStatus;

/// Exit status used after a dump
pub const DUMP_EXIT_STATUS: ExitStatus = ExitStatus::Error;

/// Displays dumped values
pub trait Dumper: Send + Sync {
    fn dump(&self, value: &JsonValue) -> Result<()>;

    /// Display the generated curl command
    fn dump_command(&self, command: &str) -> Result<()> {
        self.dump(&JsonValue::String(command.to_string()))
    }
}

/// Prints values to stdout
///
/// Strings print as-is, other values as pretty JSON. The generated command
/// is colorized when stdout is a terminal.
#[derive(Debug)]
pub struct StdoutDumper {
    colorize: bool,
}

impl StdoutDumper {
    pub fn new() -> Self {
        Self {
            colorize: atty::is(atty::Stream::Stdout),
        }
    }

    pub fn plain() -> Self {
        Self { colorize: false }
    }

    fn render(&self, value: &JsonValue) -> Result<String> {
        Ok(match value {
            JsonValue::String(s) => s.clone(),
            other => serde_json::to_string_pretty(other)?,
        })
    }

    fn render_command(&self, command: &str) -> String {
        if self.colorize {
            format_curl_pretty(command)
        } else {
            command.to_string()
        }
    }

    fn write_line(&self, line: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        stdout.flush()?;
        Ok(())
    }
}

impl Default for StdoutDumper {
    fn default() -> Self {
        Self::new()
    }
}

impl Dumper for StdoutDumper {
    fn dump(&self, value: &JsonValue) -> Result<()> {
        self.write_line(&self.render(value)?)
    }

    fn dump_command(&self, command: &str) -> Result<()> {
        self.write_line(&self.render_command(command))
    }
}

/// Collects dumped values in memory
#[derive(Debug, Default)]
pub struct MemoryDumper {
    values: Mutex<Vec<JsonValue>>,
}

impl MemoryDumper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything dumped so far
    pub fn values(&self) -> Vec<JsonValue> {
        self.values.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl Dumper for MemoryDumper {
    fn dump(&self, value: &JsonValue) -> Result<()> {
        if let Ok(mut values) = self.values.lock() {
            values.push(value.clone());
        }
        Ok(())
    }
}

/// Before-send hook that dumps values plus the curl command, then halts
pub struct DumpWithCurl {
    values: Vec<JsonValue>,
    dumper: Arc<dyn Dumper>,
}

impl DumpWithCurl {
    pub fn new(values: Vec<JsonValue>) -> Self {
        Self::with_dumper(values, Arc::new(StdoutDumper::new()))
    }

    pub fn with_dumper(values: Vec<JsonValue>, dumper: Arc<dyn Dumper>) -> Self {
        Self { values, dumper }
    }
}

impl BeforeSendHook for DumpWithCurl {
    fn name(&self) -> &str {
        "dump_with_curl"
    }

    /// A request that cannot be rendered aborts the dump with that error.
    fn before_sending(&self, request: &RequestDescriptor, options: &RequestOptions) -> Result<HookFlow> {
        let command = generate_curl_command_with(request, options)?;

        for value in &self.values {
            self.dumper.dump(value)?;
        }
        self.dumper.dump_command(&command)?;

        Ok(HookFlow::Halt(DUMP_EXIT_STATUS))
    }
}

/// Terminate the process with `status`
pub fn halt(status: ExitStatus) -> ! {
    std::process::exit(status.code())
}
