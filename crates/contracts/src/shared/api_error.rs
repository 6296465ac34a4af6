use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибка обращения к REST API продаж.
///
/// Variants follow the failure taxonomy of the backend: transport failures,
/// non-2xx responses with or without a structured `{ "error": ... }` body,
/// and payloads that do not match the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Error body the backend returns on failed writes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiError {
    /// Build the error for a non-2xx response from its raw body text.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody {
                error: Some(message),
            }) if !message.trim().is_empty() => ApiError::Server { status, message },
            _ => ApiError::Status(status),
        }
    }

    /// Message supplied by the server, if the response carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Most specific message available, falling back to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_body_becomes_server_error() {
        let err = ApiError::from_response(400, r#"{"error":"Customer not found"}"#);
        assert_eq!(
            err,
            ApiError::Server {
                status: 400,
                message: "Customer not found".to_string()
            }
        );
        assert_eq!(err.user_message("Failed to create order"), "Customer not found");
    }

    #[test]
    fn unstructured_body_falls_back() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err, ApiError::Status(502));
        assert_eq!(err.user_message("Failed to record payment"), "Failed to record payment");
    }

    #[test]
    fn blank_error_field_is_not_a_message() {
        let err = ApiError::from_response(500, r#"{"error":"  "}"#);
        assert_eq!(err, ApiError::Status(500));
    }

    #[test]
    fn network_error_uses_fallback() {
        let err = ApiError::Network("TypeError: Failed to fetch".into());
        assert_eq!(err.user_message("Failed to process return"), "Failed to process return");
        assert!(err.to_string().contains("Failed to fetch"));
    }
}
