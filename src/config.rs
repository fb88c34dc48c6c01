//! Config file handling
//!
//! Settings come from an optional TOML file and are then overridden by
//! environment variables:
//!
//! ```toml
//! [logging]
//! enabled = true
//! log_level = "info"
//! channel = "outgoing"
//! ```
//!
//! | Variable                   | Setting             |
//! |----------------------------|---------------------|
//! | `HTTP_TO_CURL_LOGGING`     | `logging.enabled`   |
//! | `HTTP_TO_CURL_LOG_LEVEL`   | `logging.log_level` |
//! | `HTTP_TO_CURL_LOG_CHANNEL` | `logging.channel`   |

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::errors::HttpToCurlError;

pub const ENV_LOGGING: &str = "HTTP_TO_CURL_LOGGING";
pub const ENV_LOG_LEVEL: &str = "HTTP_TO_CURL_LOG_LEVEL";
pub const ENV_LOG_CHANNEL: &str = "HTTP_TO_CURL_LOG_CHANNEL";
pub const ENV_CONFIG_DIR: &str = "HTTP_TO_CURL_CONFIG_DIR";

pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Debug;
pub const DEFAULT_CHANNEL: &str = "stack";

/// Severity used when logging generated commands
///
/// Accepts the syslog-style names (`emergency` .. `debug`) as well as the
/// usual Rust level names, and maps them onto the five `tracing` levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    pub fn as_tracing(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

impl FromStr for LogLevel {
    type Err = HttpToCurlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "emergency" | "alert" | "critical" | "error" => Ok(LogLevel::Error),
            "warning" | "warn" => Ok(LogLevel::Warn),
            "notice" | "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(HttpToCurlError::Config(format!("Unknown log level '{}'", other))),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for logging every outgoing request as a curl command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub log_level: LogLevel,
    /// Channel name attached to each log record
    pub channel: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_level: DEFAULT_LOG_LEVEL,
            channel: DEFAULT_CHANNEL.to_string(),
        }
    }
}

/// http-to-curl configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub logging: LoggingConfig,
}

impl Config {
    /// Load `config.toml` from the default config directory, then apply
    /// environment overrides
    pub fn load() -> Result<Self, HttpToCurlError> {
        let config_file = Self::default_config_dir().join("config.toml");
        let path = config_file.exists().then_some(config_file);
        Self::load_from(path.as_deref())
    }

    /// Load from an explicit file (if any), then apply environment overrides
    pub fn load_from(path: Option<&Path>) -> Result<Self, HttpToCurlError> {
        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .map_err(|e| HttpToCurlError::Config(format!("Failed to read config: {}", e)))?;
                Self::from_toml_str(&content)?
            }
            None => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, HttpToCurlError> {
        let toml_value: toml::Value = toml::from_str(content)
            .map_err(|e| HttpToCurlError::Config(format!("Invalid config TOML: {}", e)))?;

        let mut logging = LoggingConfig::default();

        if let Some(section) = toml_value.get("logging") {
            if let Some(enabled) = section.get("enabled") {
                logging.enabled = enabled.as_bool().ok_or_else(|| {
                    HttpToCurlError::Config("logging.enabled must be a boolean".to_string())
                })?;
            }
            if let Some(level) = section.get("log_level") {
                logging.log_level = level
                    .as_str()
                    .ok_or_else(|| HttpToCurlError::Config("logging.log_level must be a string".to_string()))?
                    .parse()?;
            }
            if let Some(channel) = section.get("channel") {
                logging.channel = channel
                    .as_str()
                    .ok_or_else(|| HttpToCurlError::Config("logging.channel must be a string".to_string()))?
                    .to_string();
            }
        }

        Ok(Self { logging })
    }

    /// Apply overrides from a variable lookup (normally the process environment)
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), HttpToCurlError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_LOGGING) {
            self.logging.enabled = parse_bool(&value).ok_or_else(|| {
                HttpToCurlError::Config(format!("{} must be a boolean, got '{}'", ENV_LOGGING, value))
            })?;
        }
        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            self.logging.log_level = value.parse()?;
        }
        if let Some(value) = lookup(ENV_LOG_CHANNEL) {
            self.logging.channel = value;
        }
        Ok(())
    }

    /// Get the default config directory
    pub fn default_config_dir() -> PathBuf {
        if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
            return PathBuf::from(dir);
        }
        dirs::config_dir()
            .map(|p| p.join("http-to-curl"))
            .unwrap_or_else(|| PathBuf::from(".http-to-curl"))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
