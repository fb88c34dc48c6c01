//! Error types for http-to-curl

use thiserror::Error;

use crate::status::ExitStatus;

/// Main error type for http-to-curl
#[derive(Error, Debug)]
pub enum HttpToCurlError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Form encoding error: {0}")]
    FormEncode(#[from] serde_urlencoded::ser::Error),

    #[error("Form decoding error: {0}")]
    FormDecode(#[from] serde_urlencoded::de::Error),

    #[error("Form body must be an object or array, got {0}")]
    FormPayload(&'static str),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("Request halted by before-send hook ({0:?})")]
    Halted(ExitStatus),
}

impl HttpToCurlError {
    /// Whether this error came from encoding or decoding a request body
    pub fn is_serialization(&self) -> bool {
        matches!(
            self,
            HttpToCurlError::Json(_)
                | HttpToCurlError::FormEncode(_)
                | HttpToCurlError::FormDecode(_)
                | HttpToCurlError::FormPayload(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, HttpToCurlError>;
