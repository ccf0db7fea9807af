//! Error taxonomy for provisioning runs.
//!
//! The distinction that matters to the reconciler is *where* an error is
//! allowed to escape to: `Io`/`Format` abort the run before any row is
//! attempted, `Resolution` is fatal only for the batch-level template lookup,
//! and everything else is caught at the row boundary and becomes an outcome.

use std::io;
use std::path::PathBuf;

/// Errors raised while loading input or reconciling a row.
#[derive(Debug, thiserror::Error)]
pub enum ProvisionError {
    /// Input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },

    /// A row did not have the required column count.
    #[error("{}:{line}: expected {expected} fields, got {got}", path.display())]
    Format {
        /// File containing the row.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Required column count.
        expected: usize,
        /// Actual column count.
        got: usize,
    },

    /// A row field failed a semantic rule.
    #[error("{0}")]
    Validation(String),

    /// Referenced names do not exist on the server.
    #[error("{kind} not found: {}", names.join(", "))]
    Resolution {
        /// What was being resolved ("hostgroup" or "template").
        kind: &'static str,
        /// Every requested name that was missing.
        names: Vec<String>,
    },

    /// The API returned an error object on a read call.
    #[error("{0}")]
    Remote(zbxrpc::ApiError),

    /// Transport or protocol failure below the API layer.
    #[error(transparent)]
    Transport(#[from] zbxrpc::Error),
}

impl ProvisionError {
    /// Create an IO error with path context.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_names_file_line_and_count() {
        let err = ProvisionError::Format {
            path: PathBuf::from("hosts.csv"),
            line: 4,
            expected: 10,
            got: 7,
        };
        assert_eq!(format!("{}", err), "hosts.csv:4: expected 10 fields, got 7");
    }

    #[test]
    fn test_resolution_lists_every_missing_name() {
        let err = ProvisionError::Resolution {
            kind: "hostgroup",
            names: vec!["GroupA".to_string(), "GroupB".to_string()],
        };
        assert_eq!(format!("{}", err), "hostgroup not found: GroupA, GroupB");
    }
}
