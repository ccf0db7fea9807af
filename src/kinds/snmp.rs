//! SNMP host kind.
//!
//! SNMP hosts share the host-creation plumbing but name themselves from the
//! UTM number alone, always get a main SNMPv3 interface on the row's IP, and
//! carry the configured security descriptor. The row's interface-type/main/
//! useip columns are ignored.

use super::{PreparedHost, RecordKind, Submission, submit_host};
use crate::config::SnmpSecurity;
use crate::error::ProvisionError;
use crate::interface;
use crate::inventory;
use crate::naming::{self, HostNames};
use crate::record::{self, HostRow};
use std::path::Path;
use zbxrpc::Rpc;

/// SNMP-monitored hosts provisioned from a 10-column list.
#[derive(Debug, Clone)]
pub struct SnmpHostKind {
    /// Template names linked to every created host.
    pub templates: Vec<String>,
    /// Initial host status (0=enabled, 1=disabled).
    pub status: u8,
    /// SNMPv3 security descriptor from configuration.
    pub security: SnmpSecurity,
}

impl RecordKind for SnmpHostKind {
    type Row = HostRow;
    type Prepared = PreparedHost;
    type Batch = Vec<String>;

    fn label(&self) -> &'static str {
        "snmp host"
    }

    fn load(&self, path: &Path) -> Result<Vec<(usize, HostRow)>, ProvisionError> {
        record::load_host_rows(path)
    }

    fn prepare(&self, rpc: &dyn Rpc) -> Result<Vec<String>, ProvisionError> {
        inventory::template_ids(rpc, &self.templates)
    }

    fn screen(&self, row: &HostRow) -> Option<String> {
        if row.group_names().is_empty() || row.address.is_empty() || row.utm_no.is_empty() {
            return Some("missing required group/ip/utm fields".to_string());
        }
        None
    }

    fn derive(&self, row: &HostRow) -> Result<PreparedHost, ProvisionError> {
        Ok(PreparedHost {
            names: HostNames {
                host: naming::snmp_host_name(&row.utm_no),
                visible: None,
            },
            groups: row.group_names(),
            interface: interface::build_snmp_v3(&row.address, &row.port, &self.security),
        })
    }

    fn primary_name<'a>(&self, prepared: &'a PreparedHost) -> &'a str {
        &prepared.names.host
    }

    fn fallback_name(&self, row: &HostRow) -> String {
        naming::snmp_host_name(&row.utm_no)
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

    fn kind() -> SnmpHostKind {
        SnmpHostKind {
            templates: vec!["FortiGate by SNMP".to_string()],
            status: 1,
            security: SnmpSecurity::default(),
        }
    }

    fn row() -> HostRow {
        HostRow {
            groups: "Firewalls".to_string(),
            host: String::new(),
            display_name: String::new(),
            interface_type: String::new(),
            main: String::new(),
            useip: String::new(),
            address: "192.0.2.10".to_string(),
            port: String::new(),
            utm_no: "01".to_string(),
            specific_id: String::new(),
        }
    }

    #[test]
    fn test_screen_requires_group_ip_and_utm() {
        let kind = kind();
        assert!(kind.screen(&row()).is_none());

        let mut no_ip = row();
        no_ip.address = String::new();
        assert!(kind.screen(&no_ip).is_some());

        let mut no_utm = row();
        no_utm.utm_no = String::new();
        assert!(kind.screen(&no_utm).is_some());

        let mut no_groups = row();
        no_groups.groups = " ".to_string();
        assert!(kind.screen(&no_groups).is_some());
    }

    #[test]
    fn test_derive_builds_snmp_interface() {
        let prepared = kind().derive(&row()).unwrap();
        assert_eq!(prepared.names.host, "UTM01-SNMP");
        assert!(prepared.names.visible.is_none());
        assert_eq!(prepared.interface.if_type, 2);
        assert_eq!(prepared.interface.port, "161");
        assert!(prepared.interface.details.is_some());
    }

    #[test]
    fn test_create_omits_visible_name() {
        let mock = MockRpc::new();
        mock.enqueue_result(
            "hostgroup.get",
            json!([{"groupid": "9", "name": "Firewalls"}]),
        );
        mock.enqueue_result("host.create", json!({"hostids": ["10600"]}));

        let kind = kind();
        let prepared = kind.derive(&row()).unwrap();
        let submission = kind
            .create(&mock, &prepared, &vec!["10100".to_string()])
            .unwrap();
        assert_eq!(submission, Submission::Accepted(vec!["10600".to_string()]));

        let params = &mock.calls()[1].1;
        assert_eq!(params["host"], "UTM01-SNMP");
        assert!(params.get("name").is_none());
        assert_eq!(params["interfaces"][0]["details"]["version"], "3");
    }
}
