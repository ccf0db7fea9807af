//! Desired-state list parsing.
//!
//! Two file shapes exist: host lists (10 comma-separated columns per row) and
//! group lists (one name per line). Both tolerate a UTF-8 byte-order mark,
//! skip blank lines and lines whose first field starts with `#`, and trim
//! every value. Anything else malformed fails the load — bad spreadsheets
//! must be caught before any remote mutation is attempted.

use crate::error::ProvisionError;
use std::fs;
use std::path::Path;

/// Required column count for host rows.
pub const HOST_FIELDS: usize = 10;

/// One 10-column host row, fields in file order.
#[derive(Debug, Clone)]
pub struct HostRow {
    /// Comma-separated host group names.
    pub groups: String,
    /// Host name column (used verbatim by the direct naming form).
    pub host: String,
    /// Display-name part.
    pub display_name: String,
    /// Interface type (1=agent, 2=SNMP, 3=IPMI, 4=JMX).
    pub interface_type: String,
    /// Main-interface flag (0/1).
    pub main: String,
    /// Address-family flag (1=ip, 0=dns).
    pub useip: String,
    /// IP address or DNS name.
    pub address: String,
    /// Interface port.
    pub port: String,
    /// UTM number.
    pub utm_no: String,
    /// Specific id.
    pub specific_id: String,
}

impl HostRow {
    fn from_fields(mut fields: Vec<String>) -> Self {
        let mut take = |i: usize| std::mem::take(&mut fields[i]);
        Self {
            groups: take(0),
            host: take(1),
            display_name: take(2),
            interface_type: take(3),
            main: take(4),
            useip: take(5),
            address: take(6),
            port: take(7),
            utm_no: take(8),
            specific_id: take(9),
        }
    }

    /// Group names parsed from the comma-separated group column, trimmed,
    /// empty entries dropped.
    #[must_use]
    pub fn group_names(&self) -> Vec<String> {
        self.groups
            .split(',')
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Load a 10-column host list.
///
/// Returns rows in file order, each tagged with its 1-based line number.
///
/// # Errors
///
/// `ProvisionError::Io` when the file cannot be read,
/// `ProvisionError::Format` on the first row with a wrong column count.
pub fn load_host_rows(path: &Path) -> Result<Vec<(usize, HostRow)>, ProvisionError> {
    let mut rows = Vec::new();
    for (line, raw) in read_lines(path)? {
        let fields: Vec<String> = raw.split(',').map(|f| f.trim().to_string()).collect();
        if fields[0].starts_with('#') {
            continue;
        }
        if fields.len() != HOST_FIELDS {
            return Err(ProvisionError::Format {
                path: path.to_path_buf(),
                line,
                expected: HOST_FIELDS,
                got: fields.len(),
            });
        }
        rows.push((line, HostRow::from_fields(fields)));
    }
    Ok(rows)
}

/// Load a one-name-per-line group list.
///
/// # Errors
///
/// `ProvisionError::Io` when the file cannot be read.
pub fn load_names(path: &Path) -> Result<Vec<(usize, String)>, ProvisionError> {
    let mut names = Vec::new();
    for (line, raw) in read_lines(path)? {
        let name = raw.trim();
        if name.starts_with('#') {
            continue;
        }
        names.push((line, name.to_string()));
    }
    Ok(names)
}

/// Read a file as (1-based line number, content) pairs, stripping a leading
/// BOM and dropping blank lines.
fn read_lines(path: &Path) -> Result<Vec<(usize, String)>, ProvisionError> {
    let content = fs::read_to_string(path).map_err(|e| ProvisionError::io(path, e))?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

    Ok(content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.to_string()))
        .filter(|(_, line)| !line.trim().is_empty())
        .collect())
}
