// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SynthError>;

#[derive(Error, Debug)]
pub enum SynthError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("malformed repository URL {url:?}: {reason}")]
    MalformedUrl { url: String, reason: String },

    #[error("GitHub API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SynthError {
    pub(crate) fn malformed(url: &str, reason: impl Into<String>) -> Self {
        SynthError::MalformedUrl {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}
