//! Host interface construction.
//!
//! An interface tells the server how to reach a host: address family (`ip`
//! xor `dns`, chosen by the `useip` flag), port, and for SNMP interfaces a
//! security descriptor. The struct serializes directly into the
//! `host.create` `interfaces` entry.

use crate::config::SnmpSecurity;
use crate::error::ProvisionError;
use serde::Serialize;

/// Default port for SNMP interfaces when the row leaves it blank.
const SNMP_DEFAULT_PORT: &str = "161";

/// Interface type id for SNMP.
const IF_TYPE_SNMP: u8 = 2;

/// One host interface, in wire shape.
#[derive(Debug, Clone, Serialize)]
pub struct Interface {
    #[serde(rename = "type")]
    pub if_type: u8,
    pub main: u8,
    pub useip: u8,
    pub ip: String,
    pub dns: String,
    pub port: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<SnmpSecurity>,
}

/// Build an interface from raw row fields.
///
/// # Errors
///
/// `ProvisionError::Validation` when the type is not 1-4 or the flags are
/// not 0/1.
pub fn build(
    if_type: &str,
    main: &str,
    useip: &str,
    address: &str,
    port: &str,
) -> Result<Interface, ProvisionError> {
    let if_type: u8 = if_type
        .parse()
        .ok()
        .filter(|t| (1..=4).contains(t))
        .ok_or_else(|| {
            ProvisionError::validation(format!(
                "interface type must be 1-4 (agent/SNMP/IPMI/JMX), got {if_type:?}"
            ))
        })?;
    let main = parse_flag("main", main)?;
    let useip = parse_flag("useip", useip)?;

    let (ip, dns) = if useip == 1 {
        (address.to_string(), String::new())
    } else {
        (String::new(), address.to_string())
    };

    Ok(Interface {
        if_type,
        main,
        useip,
        ip,
        dns,
        port: port.to_string(),
        details: None,
    })
}

/// Build a main SNMPv3 interface for `ip`, defaulting the port to 161.
///
/// The security descriptor comes from configuration, never from the row.
#[must_use]
pub fn build_snmp_v3(ip: &str, port: &str, security: &SnmpSecurity) -> Interface {
    Interface {
        if_type: IF_TYPE_SNMP,
        main: 1,
        useip: 1,
        ip: ip.to_string(),
        dns: String::new(),
        port: if port.is_empty() {
            SNMP_DEFAULT_PORT.to_string()
        } else {
            port.to_string()
        },
        details: Some(security.clone()),
    }
}

fn parse_flag(field: &str, value: &str) -> Result<u8, ProvisionError> {
    match value {
        "0" => Ok(0),
        "1" => Ok(1),
        other => Err(ProvisionError::validation(format!(
            "{field} must be 0 or 1, got {other:?}"
        ))),
    }
}
