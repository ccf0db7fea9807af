//! Record kinds: the capability set the generic reconciler is parameterized
//! by.
//!
//! Every provisionable entity (agent host, SNMP host, host group, user
//! group) is one generic reconciliation loop with different load / screen /
//! derive / exists / create rules. A kind supplies those rules; the loop in
//! [`crate::reconcile`] supplies the control flow and error isolation.

use crate::error::ProvisionError;
use crate::interface::Interface;
use crate::inventory;
use crate::naming::HostNames;
use serde_json::{Value, json};
use std::path::Path;
use zbxrpc::{Rpc, RpcResponse};

pub mod group;
pub mod host;
pub mod snmp;

pub use group::{GroupClass, GroupKind};
pub use host::HostKind;
pub use snmp::SnmpHostKind;

/// Result of submitting one creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The server accepted the request and returned the created ids.
    Accepted(Vec<String>),
    /// The server rejected the request with a reason.
    Rejected(String),
}

/// Capability set for one entity kind.
///
/// The reconciler calls these in a fixed order per row: `screen` →
/// `derive` → `exists` → `create`; `prepare` runs once per batch before any
/// row. See `crate::reconcile::run` for the exact error-isolation rules.
pub trait RecordKind {
    /// Parsed input row.
    type Row;
    /// Derived, validated record ready for submission.
    type Prepared;
    /// Read-only state resolved once per batch (e.g. template ids).
    type Batch;

    /// Kind name for logs and headers.
    fn label(&self) -> &'static str;

    /// Load and shape-validate the input file. Failure here is fatal.
    fn load(&self, path: &Path) -> Result<Vec<(usize, Self::Row)>, ProvisionError>;

    /// Resolve batch-level dependencies. Failure here aborts the batch
    /// before any row is attempted.
    fn prepare(&self, rpc: &dyn Rpc) -> Result<Self::Batch, ProvisionError>;

    /// Pre-flight check; a returned reason rejects the row without any
    /// remote call.
    fn screen(&self, row: &Self::Row) -> Option<String>;

    /// Derive names and composite fields from the row.
    fn derive(&self, row: &Self::Row) -> Result<Self::Prepared, ProvisionError>;

    /// The name the server is asked about and keyed by.
    fn primary_name<'a>(&self, prepared: &'a Self::Prepared) -> &'a str;

    /// Best-effort identifying name for rows whose derivation failed.
    fn fallback_name(&self, row: &Self::Row) -> String;

    /// Whether the resource already exists remotely.
    fn exists(&self, rpc: &dyn Rpc, name: &str) -> Result<bool, ProvisionError>;

    /// Resolve row dependencies and submit the creation request.
    fn create(
        &self,
        rpc: &dyn Rpc,
        prepared: &Self::Prepared,
        batch: &Self::Batch,
    ) -> Result<Submission, ProvisionError>;
}

/// A host row after derivation: names, group list, interface.
#[derive(Debug, Clone)]
pub struct PreparedHost {
    pub names: HostNames,
    pub groups: Vec<String>,
    pub interface: Interface,
}

/// Shared `host.create` submission for the agent and SNMP kinds: resolve the
/// row's group names, build the request, classify the reply.
fn submit_host(
    rpc: &dyn Rpc,
    prepared: &PreparedHost,
    status: u8,
    template_ids: &[String],
) -> Result<Submission, ProvisionError> {
    let group_ids = inventory::hostgroup_ids(rpc, &prepared.groups)?;

    let mut params = json!({
        "host": prepared.names.host,
        "status": status,
        "groups": group_ids.iter().map(|id| json!({"groupid": id})).collect::<Vec<_>>(),
        "interfaces": [&prepared.interface],
        "templates": template_ids.iter().map(|id| json!({"templateid": id})).collect::<Vec<_>>(),
    });
    if let Some(visible) = &prepared.names.visible {
        params["name"] = json!(visible);
    }

    let response = rpc.call("host.create", params)?;
    Ok(classify(response, "hostids"))
}

/// Classify a creation reply: an error object is a rejection, anything else
/// is acceptance with whatever ids came back under `ids_key`.
fn classify(response: RpcResponse, ids_key: &str) -> Submission {
    if let Some(error) = response.error {
        return Submission::Rejected(error.to_string());
    }

    let ids = response
        .result
        .as_ref()
        .and_then(|r| r.get(ids_key))
        .and_then(Value::as_array)
        .map(|ids| ids.iter().map(id_string).collect())
        .unwrap_or_default();
    Submission::Accepted(ids)
}

fn id_string(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_extracts_ids() {
        let response = RpcResponse::ok(json!({"hostids": ["10542", 10543]}));
        assert_eq!(
            classify(response, "hostids"),
            Submission::Accepted(vec!["10542".to_string(), "10543".to_string()])
        );
    }

    #[test]
    fn test_classify_rejection_carries_reason() {
        let response = RpcResponse::err(
            -32602,
            "Invalid params.",
            Some("Host \"web01\" already exists.".to_string()),
        );
        match classify(response, "hostids") {
            Submission::Rejected(reason) => {
                assert!(reason.contains("already exists"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_tolerates_missing_ids_key() {
        let response = RpcResponse::ok(json!({}));
        assert_eq!(classify(response, "groupids"), Submission::Accepted(vec![]));
    }
}
