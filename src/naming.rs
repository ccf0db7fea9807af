//! Canonical host-name derivation.
//!
//! The remote system identifies a host by its technical name (`host`) and
//! shows operators an optional visible name (`name`). Three fixed templates
//! exist:
//!
//! - *Composed*: `host = "00" + zeroPad(specific_id, 4) + "_BrainBoxCloud"`,
//!   `visible = utm + "_00" + zeroPad(specific_id, 4) + "_" + display part`.
//!   The row-supplied host column is ignored.
//! - *Direct*: the row-supplied host name is used verbatim; the visible name
//!   falls back to `utm + "_" + specific_id + "_" + host` when the display
//!   column is blank.
//! - *SNMP*: `host = "UTM" + utm + "-SNMP"`, no visible name.

use crate::error::ProvisionError;

/// Suffix of composed-form host names.
const COMPOSED_SUFFIX: &str = "_BrainBoxCloud";

/// Technical host name plus optional visible name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostNames {
    /// Technical name, unique on the server.
    pub host: String,
    /// Operator-visible name, when the kind derives one.
    pub visible: Option<String>,
}

/// Which derivation template a host kind uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostNaming {
    /// Build the host name from the specific id, discarding the row's host
    /// column.
    Composed,
    /// Use the row's host column verbatim.
    Direct,
}

/// Derive composed-form names.
///
/// # Errors
///
/// `ProvisionError::Validation` when `specific_id` is not an integer.
pub fn composed_names(
    utm_no: &str,
    specific_id: &str,
    display_part: &str,
) -> Result<HostNames, ProvisionError> {
    let sid: u32 = specific_id.parse().map_err(|_| {
        ProvisionError::validation(format!("specific id is not numeric: {specific_id:?}"))
    })?;
    let sid4 = format!("{sid:04}");

    Ok(HostNames {
        host: format!("00{sid4}{COMPOSED_SUFFIX}"),
        visible: Some(format!("{utm_no}_00{sid4}_{display_part}")),
    })
}

/// Derive direct-form names.
///
/// # Errors
///
/// `ProvisionError::Validation` when the host column is empty, or when the
/// display column is empty and the fallback inputs (UTM number, specific id)
/// are too.
pub fn direct_names(
    host: &str,
    display_name: &str,
    utm_no: &str,
    specific_id: &str,
) -> Result<HostNames, ProvisionError> {
    if host.is_empty() {
        return Err(ProvisionError::validation("host name is empty"));
    }

    let visible = if display_name.is_empty() {
        if utm_no.is_empty() || specific_id.is_empty() {
            return Err(ProvisionError::validation(
                "display name is empty and utm/specific id are required to synthesize one",
            ));
        }
        format!("{utm_no}_{specific_id}_{host}")
    } else {
        display_name.to_string()
    };

    Ok(HostNames {
        host: host.to_string(),
        visible: Some(visible),
    })
}

/// Derive the SNMP host name from the UTM number.
#[must_use]
pub fn snmp_host_name(utm_no: &str) -> String {
    format!("UTM{utm_no}-SNMP")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composed_names_zero_pads_specific_id() {
        let names = composed_names("UTM01", "7", "Server1").unwrap();
        assert_eq!(names.host, "000007_BrainBoxCloud");
        assert_eq!(names.visible.as_deref(), Some("UTM01_000007_Server1"));
    }

    #[test]
    fn test_composed_names_keeps_wide_ids() {
        let names = composed_names("UTM99", "1234", "Depot").unwrap();
        assert_eq!(names.host, "001234_BrainBoxCloud");
        assert_eq!(names.visible.as_deref(), Some("UTM99_001234_Depot"));
    }

    #[test]
    fn test_composed_names_normalizes_leading_zeros() {
        let names = composed_names("UTM01", "0042", "Server1").unwrap();
        assert_eq!(names.host, "000042_BrainBoxCloud");
    }

    #[test]
    fn test_composed_names_rejects_non_numeric_id() {
        let err = composed_names("UTM01", "abc", "Server1").unwrap_err();
        assert!(matches!(err, ProvisionError::Validation(_)));
        assert!(format!("{}", err).contains("abc"));
    }

    #[test]
    fn test_direct_names_passes_host_through() {
        let names = direct_names("edge-fw-01", "Edge Firewall", "UTM01", "7").unwrap();
        assert_eq!(names.host, "edge-fw-01");
        assert_eq!(names.visible.as_deref(), Some("Edge Firewall"));
    }

    #[test]
    fn test_direct_names_synthesizes_visible_fallback() {
        let names = direct_names("edge-fw-01", "", "UTM01", "7").unwrap();
        assert_eq!(names.visible.as_deref(), Some("UTM01_7_edge-fw-01"));
    }

    #[test]
    fn test_direct_names_requires_fallback_inputs() {
        assert!(direct_names("edge-fw-01", "", "", "7").is_err());
        assert!(direct_names("edge-fw-01", "", "UTM01", "").is_err());
        assert!(direct_names("", "Edge Firewall", "UTM01", "7").is_err());
    }

    #[test]
    fn test_snmp_host_name() {
        assert_eq!(snmp_host_name("01"), "UTM01-SNMP");
    }
}
