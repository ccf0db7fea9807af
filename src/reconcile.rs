//! The batch reconciliation loop.
//!
//! Rows are processed strictly sequentially, in file order, each one
//! independently: a failure anywhere inside a row becomes that row's outcome
//! and the loop moves on. Two orderings are load-bearing and must not change:
//!
//! - the existence check runs before any per-row dependency resolution, so an
//!   existing resource never triggers group lookups;
//! - batch-level template resolution runs once, before the loop, and its
//!   failure aborts the run — there is nothing useful to create without it.

use crate::error::ProvisionError;
use crate::kinds::{RecordKind, Submission};
use crate::outcome::Outcome;
use log::debug;
use zbxrpc::Rpc;

/// Run one batch of rows through the kind's reconciliation rules.
///
/// `report` is invoked once per row, as soon as its outcome is known.
///
/// # Errors
///
/// Only batch-level preparation can fail; every row-scoped failure is
/// converted into an [`Outcome`] instead.
pub fn run<K: RecordKind>(
    rpc: &dyn Rpc,
    kind: &K,
    rows: &[(usize, K::Row)],
    dry_run: bool,
    mut report: impl FnMut(&Outcome),
) -> Result<Vec<Outcome>, ProvisionError> {
    let batch = kind.prepare(rpc)?;
    debug!("{}: reconciling {} rows", kind.label(), rows.len());

    let mut outcomes = Vec::with_capacity(rows.len());
    for (line, row) in rows {
        let outcome = reconcile_row(rpc, kind, *line, row, &batch, dry_run);
        report(&outcome);
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

/// Process one row, catching every failure at this boundary.
fn reconcile_row<K: RecordKind>(
    rpc: &dyn Rpc,
    kind: &K,
    line: usize,
    row: &K::Row,
    batch: &K::Batch,
    dry_run: bool,
) -> Outcome {
    if let Some(reason) = kind.screen(row) {
        return Outcome::Rejected {
            line,
            name: kind.fallback_name(row),
            reason,
        };
    }

    let prepared = match kind.derive(row) {
        Ok(prepared) => prepared,
        Err(e) => {
            return Outcome::Failed {
                line,
                name: kind.fallback_name(row),
                reason: e.to_string(),
            };
        }
    };
    let name = kind.primary_name(&prepared).to_string();

    match ensure(rpc, kind, &prepared, batch, dry_run) {
        Ok(step) => step.into_outcome(line, name),
        Err(e) => Outcome::Failed {
            line,
            name,
            reason: e.to_string(),
        },
    }
}

enum Step {
    Exists,
    Planned,
    Submitted(Submission),
}

impl Step {
    fn into_outcome(self, line: usize, name: String) -> Outcome {
        match self {
            Self::Exists => Outcome::Skipped { line, name },
            Self::Planned => Outcome::Planned { line, name },
            Self::Submitted(Submission::Accepted(ids)) => Outcome::Created { line, name, ids },
            Self::Submitted(Submission::Rejected(reason)) => Outcome::Rejected {
                line,
                name,
                reason,
            },
        }
    }
}

/// The create-if-absent steps for one derived record.
fn ensure<K: RecordKind>(
    rpc: &dyn Rpc,
    kind: &K,
    prepared: &K::Prepared,
    batch: &K::Batch,
    dry_run: bool,
) -> Result<Step, ProvisionError> {
    // existence is checked before any dependency resolution
    if kind.exists(rpc, kind.primary_name(prepared))? {
        return Ok(Step::Exists);
    }
    if dry_run {
        return Ok(Step::Planned);
    }
    Ok(Step::Submitted(kind.create(rpc, prepared, batch)?))
}
