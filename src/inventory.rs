//! Read-side lookups against the remote inventory.
//!
//! Existence checks are exact-name filters and are the sole create-if-absent
//! guard — no attribute diffing. Name→id resolution is all-or-nothing: any
//! requested name missing from the server fails the whole call, so a host is
//! never created pointing at a partially-wrong set of groups.

use crate::error::ProvisionError;
use serde_json::{Value, json};
use std::collections::HashMap;
use zbxrpc::{Rpc, RpcResponse};

/// Unwrap a read response, turning an API error object into a hard error.
fn take_result(response: RpcResponse) -> Result<Value, ProvisionError> {
    if let Some(error) = response.error {
        return Err(ProvisionError::Remote(error));
    }
    Ok(response.result.unwrap_or(Value::Null))
}

fn has_records(result: &Value) -> bool {
    result.as_array().is_some_and(|records| !records.is_empty())
}

/// Whether a host with this exact technical name exists.
pub fn host_exists(rpc: &dyn Rpc, name: &str) -> Result<bool, ProvisionError> {
    let response = rpc.call(
        "host.get",
        json!({"output": ["hostid", "host"], "filter": {"host": [name]}}),
    )?;
    Ok(has_records(&take_result(response)?))
}

/// Whether a host group with this exact name exists.
pub fn hostgroup_exists(rpc: &dyn Rpc, name: &str) -> Result<bool, ProvisionError> {
    let response = rpc.call(
        "hostgroup.get",
        json!({"output": ["groupid", "name"], "filter": {"name": [name]}}),
    )?;
    Ok(has_records(&take_result(response)?))
}

/// Whether a user group with this exact name exists.
pub fn usergroup_exists(rpc: &dyn Rpc, name: &str) -> Result<bool, ProvisionError> {
    let response = rpc.call("usergroup.get", json!({"filter": {"name": [name]}}))?;
    Ok(has_records(&take_result(response)?))
}

/// Resolve host group names to ids, in request order.
///
/// # Errors
///
/// `ProvisionError::Resolution` listing every missing name when any requested
/// group does not exist.
pub fn hostgroup_ids(rpc: &dyn Rpc, names: &[String]) -> Result<Vec<String>, ProvisionError> {
    let found = fetch_id_map(
        rpc,
        "hostgroup.get",
        json!({"output": ["groupid", "name"], "filter": {"name": names}}),
        "name",
        "groupid",
    )?;
    require_all("hostgroup", names, &found)
}

/// Resolve template names to ids, in request order.
///
/// # Errors
///
/// `ProvisionError::Resolution` listing every missing name when any requested
/// template does not exist.
pub fn template_ids(rpc: &dyn Rpc, names: &[String]) -> Result<Vec<String>, ProvisionError> {
    let found = template_map(rpc, names)?;
    require_all("template", names, &found)
}

/// Look up template ids without failing on missing names.
///
/// Template names live in the `host` property on the server.
pub fn template_map(
    rpc: &dyn Rpc,
    names: &[String],
) -> Result<HashMap<String, String>, ProvisionError> {
    fetch_id_map(
        rpc,
        "template.get",
        json!({"output": ["templateid", "host"], "filter": {"host": names}}),
        "host",
        "templateid",
    )
}

fn fetch_id_map(
    rpc: &dyn Rpc,
    method: &str,
    params: Value,
    name_key: &str,
    id_key: &str,
) -> Result<HashMap<String, String>, ProvisionError> {
    let result = take_result(rpc.call(method, params)?)?;

    let mut found = HashMap::new();
    for record in result.as_array().into_iter().flatten() {
        if let (Some(name), Some(id)) = (record.get(name_key), record.get(id_key)) {
            found.insert(as_string(name), as_string(id));
        }
    }
    Ok(found)
}

fn require_all(
    kind: &'static str,
    names: &[String],
    found: &HashMap<String, String>,
) -> Result<Vec<String>, ProvisionError> {
    let missing: Vec<String> = names
        .iter()
        .filter(|n| !found.contains_key(*n))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(ProvisionError::Resolution {
            kind,
            names: missing,
        });
    }
    Ok(names.iter().map(|n| found[n].clone()).collect())
}

/// Ids come back as strings; tolerate numbers from older servers.
fn as_string(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}
