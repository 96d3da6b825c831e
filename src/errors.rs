use std::fmt;

use crate::models::error_response::ApiErrorDetail;

#[derive(Debug, Clone)]
pub enum ClientError {
    EncodeError(String),
    RequestError(String),
    NetworkError(String),
    ApiError {
        status: u16,
        body: String,
        error: Option<ApiErrorDetail>,
    },
    ParseError(String),
    ConfigError(String),
}

impl ClientError {
    /// HTTP status of a remote error response, `None` for local failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::EncodeError(msg) => write!(f, "Encode error: {}", msg),
            ClientError::RequestError(msg) => write!(f, "Request error: {}", msg),
            ClientError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            ClientError::ApiError {
                status,
                error: Some(detail),
                ..
            } => write!(f, "API error: status {}, {}", status, detail.message),
            ClientError::ApiError { status, body, .. } => {
                write!(f, "API error: status {}, text {}", status, body)
            }
            ClientError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ClientError::ConfigError(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            ClientError::NetworkError(err.to_string())
        } else if err.is_builder() {
            ClientError::RequestError(err.to_string())
        } else if err.is_decode() {
            ClientError::ParseError(err.to_string())
        } else {
            ClientError::NetworkError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::ConfigError(err.to_string())
    }
}
