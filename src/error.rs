//! Frontend Errors
//!
//! Failure types returned by the API wrappers.

use std::fmt;

/// Result type for admin API calls
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never produced a response
    Network(String),
    /// Backend answered with a non-success status
    Status { status: u16, body: String },
    /// Response body did not match the expected shape
    Decode(String),
    /// Bad client configuration (unusable base URL)
    Config(String),
}

impl ApiError {
    /// Message suitable for an alert box: the backend's own `message`
    /// field when it sent one.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { status, body } => {
                let message = serde_json::from_str::<serde_json::Value>(body)
                    .ok()
                    .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string));
                match message {
                    Some(m) => m,
                    None => format!("Request failed ({})", status),
                }
            }
            other => other.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status { status, body } => write!(f, "HTTP {}: {}", status, body),
            ApiError::Decode(msg) => write!(f, "Invalid response: {}", msg),
            ApiError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_backend_message() {
        let err = ApiError::Status {
            status: 409,
            body: r#"{"code":"Conflict","message":"Server is busy"}"#.to_string(),
        };
        assert_eq!(err.user_message(), "Server is busy");
    }

    #[test]
    fn test_user_message_fallback() {
        let err = ApiError::Status { status: 500, body: "oops".to_string() };
        assert_eq!(err.user_message(), "Request failed (500)");
        assert_eq!(ApiError::Network("down".into()).user_message(), "Network error: down");
    }
}
