//! JSON-RPC 2.0 envelope types for the Zabbix API.
//!
//! Zabbix speaks JSON-RPC 2.0 over HTTP POST with the session token carried
//! in the legacy `auth` field of the request body.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A JSON-RPC 2.0 request envelope.
#[derive(Debug, Serialize)]
pub struct RpcRequest<'a> {
    /// Protocol version, always `"2.0"`.
    pub jsonrpc: &'static str,
    /// API method, e.g. `"host.get"`.
    pub method: &'a str,
    /// Method parameters.
    pub params: Value,
    /// Session token. Omitted entirely for `user.login`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<&'a str>,
    /// Request correlation id.
    pub id: u64,
}

impl<'a> RpcRequest<'a> {
    /// Build a request envelope for `method` with the given params.
    #[must_use]
    pub fn new(method: &'a str, params: Value, auth: Option<&'a str>, id: u64) -> Self {
        Self {
            jsonrpc: "2.0",
            method,
            params,
            auth,
            id,
        }
    }
}

/// A JSON-RPC 2.0 response envelope.
///
/// Exactly one of `result` and `error` is populated by the server. Callers
/// classify `error` presence themselves; the client does not turn it into an
/// `Err` except for `login`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RpcResponse {
    /// Successful result payload.
    #[serde(default)]
    pub result: Option<Value>,
    /// Error object, present when the API rejected the call.
    #[serde(default)]
    pub error: Option<ApiError>,
}

impl RpcResponse {
    /// Build a successful response carrying `result`.
    #[must_use]
    pub fn ok(result: Value) -> Self {
        Self {
            result: Some(result),
            error: None,
        }
    }

    /// Build an error response.
    #[must_use]
    pub fn err(code: i64, message: impl Into<String>, data: Option<String>) -> Self {
        Self {
            result: None,
            error: Some(ApiError {
                code,
                message: message.into(),
                data,
            }),
        }
    }

    /// Whether the API rejected the call.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// The error object the Zabbix API attaches to rejected calls.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// JSON-RPC error code.
    pub code: i64,
    /// Short error message, e.g. `"Invalid params."`.
    pub message: String,
    /// Detail string, e.g. the offending parameter.
    #[serde(default)]
    pub data: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            Some(data) if !data.is_empty() => write!(f, "{} {}", self.message, data),
            _ => write!(f, "{}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serialization() {
        let request = RpcRequest::new(
            "host.get",
            json!({"filter": {"host": ["web01"]}}),
            Some("abc123"),
            7,
        );
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["jsonrpc"], "2.0");
        assert_eq!(value["method"], "host.get");
        assert_eq!(value["auth"], "abc123");
        assert_eq!(value["id"], 7);
        assert_eq!(value["params"]["filter"]["host"][0], "web01");
    }

    #[test]
    fn test_request_omits_auth_when_absent() {
        let request = RpcRequest::new("user.login", json!({}), None, 1);
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("auth").is_none());
    }

    #[test]
    fn test_response_deserializes_result() {
        let response: RpcResponse =
            serde_json::from_str(r#"{"jsonrpc":"2.0","result":["10084"],"id":1}"#).unwrap();
        assert!(!response.is_error());
        assert_eq!(response.result.unwrap()[0], "10084");
    }

    #[test]
    fn test_response_deserializes_error() {
        let response: RpcResponse = serde_json::from_str(
            r#"{"jsonrpc":"2.0","error":{"code":-32602,"message":"Invalid params.","data":"Host already exists."},"id":1}"#,
        )
        .unwrap();
        assert!(response.is_error());
        let error = response.error.unwrap();
        assert_eq!(error.code, -32602);
        assert_eq!(format!("{}", error), "Invalid params. Host already exists.");
    }

    #[test]
    fn test_api_error_display_without_data() {
        let error = ApiError {
            code: -32600,
            message: "Invalid request.".to_string(),
            data: None,
        };
        assert_eq!(format!("{}", error), "Invalid request.");
    }
}
