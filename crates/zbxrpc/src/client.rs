//! Blocking Zabbix API client.
//!
//! [`ZabbixClient`] owns a [`ureq::Agent`] and a session token obtained via
//! `user.login`. All API traffic goes through the single [`Rpc::call`]
//! primitive so callers (and tests, via [`crate::MockRpc`]) see one narrow
//! interface.

use crate::error::{Error, Result};
use crate::types::{RpcRequest, RpcResponse};
use serde_json::{Value, json};
use std::cell::Cell;

/// The single request/response primitive against the Zabbix API.
///
/// This abstraction keeps the transport out of the reconciliation logic and
/// enables call-counting mocks in tests.
pub trait Rpc {
    /// Perform one JSON-RPC call and return the raw envelope.
    ///
    /// An `error` field in the response is NOT an `Err` here — transport and
    /// decoding failures are. Callers decide what a rejected call means.
    fn call(&self, method: &str, params: Value) -> Result<RpcResponse>;
}

/// Blocking client for the Zabbix JSON-RPC API.
///
/// # Example
///
/// ```no_run
/// use zbxrpc::{Rpc, ZabbixClient};
/// use serde_json::json;
///
/// let mut client = ZabbixClient::new("http://zabbix.example.com/api_jsonrpc.php");
/// client.login("Admin", "zabbix").unwrap();
/// let response = client
///     .call("host.get", json!({"filter": {"host": ["web01"]}}))
///     .unwrap();
/// assert!(!response.is_error());
/// ```
pub struct ZabbixClient {
    /// HTTP agent for requests.
    agent: ureq::Agent,
    /// API endpoint URL (`.../api_jsonrpc.php`).
    url: String,
    /// Session token from `user.login`.
    auth: Option<String>,
    /// Monotonic request id counter.
    next_id: Cell<u64>,
}

impl ZabbixClient {
    /// Create an unauthenticated client for the given endpoint URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
            url: url.into(),
            auth: None,
            next_id: Cell::new(1),
        }
    }

    /// Get the endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether a session token is held.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.auth.is_some()
    }

    /// Authenticate via `user.login` and store the session token.
    ///
    /// # Errors
    ///
    /// Returns `Error::Api` when the server rejects the credentials and
    /// `Error::InvalidResponse` when the result is not a token string.
    pub fn login(&mut self, username: &str, password: &str) -> Result<()> {
        // user.login must not carry an auth field, even on re-login.
        let response = self.post(RpcRequest::new(
            "user.login",
            json!({"username": username, "password": password}),
            None,
            self.take_id(),
        ))?;

        if let Some(error) = response.error {
            return Err(Error::Api(error));
        }

        let token = response
            .result
            .as_ref()
            .and_then(Value::as_str)
            .ok_or_else(|| Error::InvalidResponse("user.login returned no token".to_string()))?;

        self.auth = Some(token.to_string());
        Ok(())
    }

    fn take_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn post(&self, request: RpcRequest<'_>) -> Result<RpcResponse> {
        let response: RpcResponse = self
            .agent
            .post(&self.url)
            .header("Content-Type", "application/json-rpc")
            .send_json(&request)?
            .body_mut()
            .read_json()?;
        Ok(response)
    }
}

impl Rpc for ZabbixClient {
    fn call(&self, method: &str, params: Value) -> Result<RpcResponse> {
        let auth = self.auth.as_deref().ok_or(Error::NotLoggedIn)?;
        self.post(RpcRequest::new(method, params, Some(auth), self.take_id()))
    }
}
