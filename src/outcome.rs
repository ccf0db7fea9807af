//! Per-row outcomes and the batch summary.
//!
//! Every processed row produces exactly one [`Outcome`], created once and
//! reported immediately. The display shape (`OK L3: name -> ids`) is the
//! operator-facing contract.

use std::fmt;

/// What happened to one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Resource was created on the server.
    Created {
        line: usize,
        name: String,
        ids: Vec<String>,
    },
    /// Resource already exists, nothing was done.
    Skipped { line: usize, name: String },
    /// Row was rejected without mutation — by screening or by the server.
    Rejected {
        line: usize,
        name: String,
        reason: String,
    },
    /// A local failure was caught at the row boundary.
    Failed {
        line: usize,
        name: String,
        reason: String,
    },
    /// Dry run: resource is absent and would have been created.
    Planned { line: usize, name: String },
}

impl Outcome {
    /// 1-based input line this outcome belongs to.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::Created { line, .. }
            | Self::Skipped { line, .. }
            | Self::Rejected { line, .. }
            | Self::Failed { line, .. }
            | Self::Planned { line, .. } => *line,
        }
    }

    /// Resource name this outcome belongs to (best-effort for failures).
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Created { name, .. }
            | Self::Skipped { name, .. }
            | Self::Rejected { name, .. }
            | Self::Failed { name, .. }
            | Self::Planned { name, .. } => name,
        }
    }

    /// Operator-visible tag.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Created { .. } => "OK",
            Self::Skipped { .. } => "SKIP",
            Self::Rejected { .. } => "NG",
            Self::Failed { .. } => "ERROR",
            Self::Planned { .. } => "PLAN",
        }
    }

    /// Whether this outcome represents a failure (NG or ERROR).
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Rejected { .. } | Self::Failed { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created { line, name, ids } => {
                write!(f, "OK L{line}: {name} -> {ids:?}")
            }
            Self::Skipped { line, name } => {
                write!(f, "SKIP L{line}: {name} (already exists)")
            }
            Self::Rejected { line, name, reason } => {
                write!(f, "NG L{line}: {name} -> {reason}")
            }
            Self::Failed { line, name, reason } => {
                write!(f, "ERROR L{line}: {name} -> {reason}")
            }
            Self::Planned { line, name } => {
                write!(f, "PLAN L{line}: {name} (would create)")
            }
        }
    }
}

/// Outcome counts for one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub created: usize,
    pub skipped: usize,
    pub rejected: usize,
    pub failed: usize,
    pub planned: usize,
}

impl Summary {
    /// Tally a slice of outcomes.
    #[must_use]
    pub fn of(outcomes: &[Outcome]) -> Self {
        let mut summary = Self::default();
        for outcome in outcomes {
            match outcome {
                Outcome::Created { .. } => summary.created += 1,
                Outcome::Skipped { .. } => summary.skipped += 1,
                Outcome::Rejected { .. } => summary.rejected += 1,
                Outcome::Failed { .. } => summary.failed += 1,
                Outcome::Planned { .. } => summary.planned += 1,
            }
        }
        summary
    }

    /// Total rows processed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.created + self.skipped + self.rejected + self.failed + self.planned
    }

    /// Whether any row failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.rejected > 0 || self.failed > 0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} created, {} skipped, {} rejected, {} failed",
            self.created, self.skipped, self.rejected, self.failed
        )?;
        if self.planned > 0 {
            write!(f, ", {} planned", self.planned)?;
        }
        Ok(())
    }
}
