//! Common test utilities for http-to-curl integration tests
//!
//! This module provides shared test infrastructure including:
//! - CLI invocation helpers with an isolated config directory
//! - Helpers for splitting printed commands back into arguments

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// ANSI color escape sequence prefix
pub const COLOR: &str = "\x1b[";

/// Variables the binary reads, cleared so the caller's shell cannot leak in
const APP_ENV_VARS: &[&str] = &[
    "HTTP_TO_CURL_LOGGING",
    "HTTP_TO_CURL_LOG_LEVEL",
    "HTTP_TO_CURL_LOG_CHANNEL",
    "HTTP_TO_CURL_CONFIG",
    "RUST_LOG",
];

/// Exit status codes matching the binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    Error = 1,
}

impl From<i32> for ExitStatus {
    fn from(code: i32) -> Self {
        match code {
            0 => ExitStatus::Success,
            _ => ExitStatus::Error,
        }
    }
}

/// Result of running the CLI
#[derive(Debug)]
pub struct CliResponse {
    pub stdout: String,
    pub stderr: String,
    pub exit_status: ExitStatus,
    pub exit_code: i32,
}

impl CliResponse {
    /// Check if stdout contains a substring
    pub fn contains(&self, needle: &str) -> bool {
        self.stdout.contains(needle)
    }

    /// The first stdout line starting with `curl `
    pub fn command(&self) -> Option<&str> {
        self.stdout.lines().find(|line| line.starts_with("curl "))
    }

    /// The printed command split the way a POSIX shell would
    pub fn command_words(&self) -> Vec<String> {
        self.command()
            .and_then(shlex::split)
            .expect("no parseable curl command in stdout")
    }
}

impl std::ops::Deref for CliResponse {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.stdout
    }
}

/// Mock environment for testing
pub struct MockEnvironment {
    /// Temporary config directory
    pub config_dir: TempDir,
    /// Environment variables to set
    pub env_vars: HashMap<String, String>,
}

impl Default for MockEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEnvironment {
    pub fn new() -> Self {
        let config_dir = TempDir::new().expect("Failed to create temp config dir");
        Self {
            config_dir,
            env_vars: HashMap::new(),
        }
    }

    /// Set an environment variable
    pub fn set_env(&mut self, key: &str, value: &str) -> &mut Self {
        self.env_vars.insert(key.to_string(), value.to_string());
        self
    }

    /// Get the config directory path
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.path().to_path_buf()
    }

    /// Write `config.toml` into the config directory
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.config_path().join("config.toml");
        std::fs::write(&path, content).expect("Failed to write config file");
        path
    }
}

/// Run the CLI with the given arguments (excluding the program name)
pub fn run(args: &[&str]) -> CliResponse {
    run_with_env(args, &MockEnvironment::new())
}

/// Run the CLI with the given arguments and environment
pub fn run_with_env(args: &[&str], env: &MockEnvironment) -> CliResponse {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_http-to-curl"));
    cmd.args(args);

    for key in APP_ENV_VARS {
        cmd.env_remove(key);
    }
    cmd.env("HTTP_TO_CURL_CONFIG_DIR", env.config_path());
    for (key, value) in &env.env_vars {
        cmd.env(key, value);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let output = cmd.output().expect("Failed to execute command");
    parse_output(output)
}

fn parse_output(output: Output) -> CliResponse {
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(1);

    CliResponse {
        stdout,
        stderr,
        exit_status: ExitStatus::from(exit_code),
        exit_code,
    }
}

/// Strip ANSI color codes (`ESC [ ... m`) from a string
pub fn strip_colors(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_colors() {
        assert_eq!(strip_colors("\x1b[32mGreen\x1b[0m"), "Green");
        assert_eq!(strip_colors("\x1b[1;33mcurl\x1b[m -X"), "curl -X");
    }

    #[test]
    fn test_exit_status_from_i32() {
        assert_eq!(ExitStatus::from(0), ExitStatus::Success);
        assert_eq!(ExitStatus::from(1), ExitStatus::Error);
    }
}
