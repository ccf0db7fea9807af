//! In-memory [`Rpc`] implementation for testing without a server.
//!
//! Responses are queued per method and consumed in order; every call is
//! recorded so tests can assert which methods ran and how often.

use crate::client::Rpc;
use crate::error::{Error, Result};
use crate::types::RpcResponse;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Mock API endpoint that replays queued responses.
///
/// ```
/// use zbxrpc::{MockRpc, Rpc, RpcResponse};
/// use serde_json::json;
///
/// let mock = MockRpc::new();
/// mock.enqueue("host.get", RpcResponse::ok(json!([])));
///
/// let response = mock.call("host.get", json!({})).unwrap();
/// assert!(response.result.unwrap().as_array().unwrap().is_empty());
/// assert_eq!(mock.count("host.get"), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockRpc {
    responses: Mutex<HashMap<String, VecDeque<RpcResponse>>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl MockRpc {
    /// Create an empty mock with no queued responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for `method`. Responses are consumed FIFO.
    pub fn enqueue(&self, method: &str, response: RpcResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses
            .entry(method.to_string())
            .or_default()
            .push_back(response);
    }

    /// Queue a successful `result` payload for `method`.
    pub fn enqueue_result(&self, method: &str, result: Value) {
        self.enqueue(method, RpcResponse::ok(result));
    }

    /// Queue an API error object for `method`.
    pub fn enqueue_error(&self, method: &str, message: &str) {
        self.enqueue(method, RpcResponse::err(-32602, message, None));
    }

    /// All calls made so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls made to `method`.
    #[must_use]
    pub fn count(&self, method: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(m, _)| m == method)
            .count()
    }

    /// Total number of calls made, regardless of method.
    #[must_use]
    pub fn total(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Rpc for MockRpc {
    fn call(&self, method: &str, params: Value) -> Result<RpcResponse> {
        self.calls
            .lock()
            .unwrap()
            .push((method.to_string(), params));

        self.responses
            .lock()
            .unwrap()
            .get_mut(method)
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| {
                Error::InvalidResponse(format!("no mock response queued for {}", method))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_responses_consumed_in_order() {
        let mock = MockRpc::new();
        mock.enqueue_result("host.get", json!([]));
        mock.enqueue_result("host.get", json!([{"hostid": "1"}]));

        let first = mock.call("host.get", json!({})).unwrap();
        assert!(first.result.unwrap().as_array().unwrap().is_empty());

        let second = mock.call("host.get", json!({})).unwrap();
        assert_eq!(second.result.unwrap()[0]["hostid"], "1");
    }

    #[test]
    fn test_unqueued_method_is_an_error() {
        let mock = MockRpc::new();
        let result = mock.call("template.get", json!({}));
        assert!(matches!(result, Err(Error::InvalidResponse(_))));
    }

    #[test]
    fn test_call_recording() {
        let mock = MockRpc::new();
        mock.enqueue_result("hostgroup.get", json!([]));
        mock.enqueue_result("host.get", json!([]));

        mock.call("hostgroup.get", json!({"filter": {"name": ["g1"]}}))
            .unwrap();
        mock.call("host.get", json!({})).unwrap();

        assert_eq!(mock.total(), 2);
        assert_eq!(mock.count("hostgroup.get"), 1);
        assert_eq!(mock.count("host.create"), 0);

        let calls = mock.calls();
        assert_eq!(calls[0].0, "hostgroup.get");
        assert_eq!(calls[0].1["filter"]["name"][0], "g1");
    }

    #[test]
    fn test_enqueue_error() {
        let mock = MockRpc::new();
        mock.enqueue_error("host.create", "Host already exists.");

        let response = mock.call("host.create", json!({})).unwrap();
        assert!(response.is_error());
        assert_eq!(response.error.unwrap().message, "Host already exists.");
    }
}
