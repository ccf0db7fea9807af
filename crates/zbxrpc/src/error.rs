//! Error types for Zabbix API operations.

use crate::types::ApiError;

/// Result type alias for Zabbix API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the Zabbix API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request failed before a JSON-RPC envelope came back.
    #[error("HTTP request failed: {message}")]
    Http {
        /// Error message.
        message: String,
        /// HTTP status code if available.
        status: Option<u16>,
    },

    /// The response body was not a valid JSON-RPC envelope.
    #[error("invalid API response: {0}")]
    InvalidResponse(String),

    /// The API returned an error object on a call that must succeed
    /// (e.g. `user.login`).
    #[error("API error: {0}")]
    Api(ApiError),

    /// A call that requires a session was made before `login`.
    #[error("not authenticated: call login first")]
    NotLoggedIn,
}

impl Error {
    /// Create an HTTP error.
    pub fn http(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::Http {
            message: message.into(),
            status,
        }
    }
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(code) => Self::Http {
                message: format!("HTTP {}", code),
                status: Some(code),
            },
            other => Self::Http {
                message: other.to_string(),
                status: None,
            },
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_constructor() {
        let err = Error::http("connection reset", Some(502));
        match err {
            Error::Http { message, status } => {
                assert_eq!(message, "connection reset");
                assert_eq!(status, Some(502));
            }
            _ => panic!("Expected Error::Http"),
        }
    }

    #[test]
    fn test_display_api_error() {
        let err = Error::Api(ApiError {
            code: -32602,
            message: "Invalid params.".to_string(),
            data: Some("Incorrect user name or password.".to_string()),
        });
        let display = format!("{}", err);
        assert!(display.contains("Invalid params."));
        assert!(display.contains("Incorrect user name or password."));
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::InvalidResponse(_)));
    }
}
