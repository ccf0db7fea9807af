//! Agent host kind.
//!
//! Covers both naming templates for regular (non-SNMP) hosts; which one runs
//! is the [`HostNaming`] variant carried by the kind.

use super::{PreparedHost, RecordKind, Submission, submit_host};
use crate::error::ProvisionError;
use crate::interface;
use crate::inventory;
use crate::naming::{self, HostNaming};
use crate::record::{self, HostRow};
use std::path::Path;
use zbxrpc::Rpc;

/// Agent hosts provisioned from a 10-column list.
#[derive(Debug, Clone)]
pub struct HostKind {
    /// Naming template for this batch.
    pub naming: HostNaming,
    /// Template names linked to every created host.
    pub templates: Vec<String>,
    /// Initial host status (0=enabled, 1=disabled).
    pub status: u8,
}

impl RecordKind for HostKind {
    type Row = HostRow;
    type Prepared = PreparedHost;
    type Batch = Vec<String>;

    fn label(&self) -> &'static str {
        "host"
    }

    fn load(&self, path: &Path) -> Result<Vec<(usize, HostRow)>, ProvisionError> {
        record::load_host_rows(path)
    }

    fn prepare(&self, rpc: &dyn Rpc) -> Result<Vec<String>, ProvisionError> {
        inventory::template_ids(rpc, &self.templates)
    }

    fn screen(&self, row: &HostRow) -> Option<String> {
        if row.group_names().is_empty() {
            return Some("hostgroup empty".to_string());
        }
        None
    }

    fn derive(&self, row: &HostRow) -> Result<PreparedHost, ProvisionError> {
        let names = match self.naming {
            HostNaming::Composed => {
                naming::composed_names(&row.utm_no, &row.specific_id, &row.display_name)?
            }
            HostNaming::Direct => {
                naming::direct_names(&row.host, &row.display_name, &row.utm_no, &row.specific_id)?
            }
        };
        let iface = interface::build(
            &row.interface_type,
            &row.main,
            &row.useip,
            &row.address,
            &row.port,
        )?;

        Ok(PreparedHost {
            names,
            groups: row.group_names(),
            interface: iface,
        })
    }

    fn primary_name<'a>(&self, prepared: &'a PreparedHost) -> &'a str {
        &prepared.names.host
    }

    fn fallback_name(&self, row: &HostRow) -> String {
        row.host.clone()
    }

    fn exists(&self, rpc: &dyn Rpc, name: &str) -> Result<bool, ProvisionError> {
        inventory::host_exists(rpc, name)
    }

    fn create(
        &self,
        rpc: &dyn Rpc,
        prepared: &PreparedHost,
        batch: &Vec<String>,
    ) -> Result<Submission, ProvisionError> {
        submit_host(rpc, prepared, self.status, batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use zbxrpc::MockRpc;

    fn kind(naming: HostNaming) -> HostKind {
        HostKind {
            naming,
            templates: vec!["Linux by Zabbix agent".to_string()],
            status: 1,
        }
    }

    fn row() -> HostRow {
        HostRow {
            groups: "GroupA".to_string(),
            host: "web01".to_string(),
            display_name: "Server1".to_string(),
            interface_type: "1".to_string(),
            main: "1".to_string(),
            useip: "1".to_string(),
            address: "10.0.0.5".to_string(),
            port: "10050".to_string(),
            utm_no: "UTM01".to_string(),
            specific_id: "7".to_string(),
        }
    }

    #[test]
    fn test_composed_derivation_ignores_row_host() {
        let prepared = kind(HostNaming::Composed).derive(&row()).unwrap();
        assert_eq!(prepared.names.host, "000007_BrainBoxCloud");
        assert_eq!(
            prepared.names.visible.as_deref(),
            Some("UTM01_000007_Server1")
        );
        assert_eq!(prepared.groups, vec!["GroupA"]);
    }

    #[test]
    fn test_direct_derivation_uses_row_host() {
        let prepared = kind(HostNaming::Direct).derive(&row()).unwrap();
        assert_eq!(prepared.names.host, "web01");
        assert_eq!(prepared.names.visible.as_deref(), Some("Server1"));
    }

    #[test]
    fn test_screen_rejects_empty_group_list() {
        let mut bad = row();
        bad.groups = " , ,".to_string();
        assert_eq!(
            kind(HostNaming::Composed).screen(&bad).as_deref(),
            Some("hostgroup empty")
        );
        assert!(kind(HostNaming::Composed).screen(&row()).is_none());
    }

    #[test]
    fn test_create_submits_full_request() {
        let mock = MockRpc::new();
        mock.enqueue_result("hostgroup.get", json!([{"groupid": "4", "name": "GroupA"}]));
        mock.enqueue_result("host.create", json!({"hostids": ["10542"]}));

        let kind = kind(HostNaming::Composed);
        let prepared = kind.derive(&row()).unwrap();
        let submission = kind
            .create(&mock, &prepared, &vec!["10001".to_string()])
            .unwrap();

        assert_eq!(submission, Submission::Accepted(vec!["10542".to_string()]));

        let calls = mock.calls();
        let params = &calls[1].1;
        assert_eq!(params["host"], "000007_BrainBoxCloud");
        assert_eq!(params["name"], "UTM01_000007_Server1");
        assert_eq!(params["status"], 1);
        assert_eq!(params["groups"][0]["groupid"], "4");
        assert_eq!(params["templates"][0]["templateid"], "10001");
        assert_eq!(params["interfaces"][0]["ip"], "10.0.0.5");
    }
}
