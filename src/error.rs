//! Errors returned by management API calls.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Non-2xx response. Only the reason phrase is kept, never the body.
    #[error("{reason}")]
    Http { status: u16, reason: String },

    #[error("Malformed response body: {0}")]
    MalformedBody(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    Build(String),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ClientError::Timeout(error.to_string())
        } else {
            ClientError::Transport(error.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
