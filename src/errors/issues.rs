use std::fmt::Display;

use thiserror::Error;
use tracing::debug;

use crate::Position;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueKind {
    #[error("integer overflow")]
    IntegerOverflow,
    #[error("integer underflow")]
    IntegerUnderflow,
    #[error("loss of precision")]
    LossOfPrecision,
    #[error("invalid type conversion")]
    InvalidTypeConversion,
    #[error("unexpected token")]
    UnexpectedToken,
    #[error("unknown variable")]
    UnknownVariable,
    #[error("malformed literal")]
    MalformedLiteral,
}

impl IssueKind {
    /// Precision loss is the only kind demoted to a warning.
    pub fn severity(&self) -> Severity {
        match self {
            IssueKind::LossOfPrecision => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A collected, non-fatal diagnostic. Immutable once collected.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub kind: IssueKind,
    pub severity: Severity,
    pub location: Position,
    pub message: String,
}

impl Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} at {}: {}",
            self.severity, self.kind, self.location, self.message
        )
    }
}

/// Append-only diagnostic sink, one per sequential pass.
#[derive(Debug, Default)]
pub struct IssueCollector {
    issues: Vec<Issue>,
}

impl IssueCollector {
    pub fn new() -> Self {
        IssueCollector::default()
    }

    pub fn collect_issue(&mut self, kind: IssueKind, location: Position, message: String) {
        debug!(%kind, %location, %message, "collected issue");

        self.issues.push(Issue {
            kind,
            severity: kind.severity(),
            location,
            message,
        });
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.severity == Severity::Error)
    }

    pub fn count_of(&self, kind: IssueKind) -> usize {
        self.issues.iter().filter(|issue| issue.kind == kind).count()
    }
}
