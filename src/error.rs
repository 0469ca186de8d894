//! Error types.
//!
//! `ErrorKind` covers recoverable, field-level validation outcomes that only
//! gate submission. `PlannerError` covers everything else.

use thiserror::Error;

use crate::fields::Field;

/// Why a single form field is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("must be numeric")]
    NotNumeric,

    #[error("must be a whole number")]
    NotInteger,

    #[error("can not be negative")]
    Negative,

    #[error("is too large")]
    OutOfRange,

    #[error("can not be in the past")]
    DateInPast,

    #[error("must contain at least one task")]
    NoTaskSelected,

    #[error("must be selected")]
    NoQuantityType,

    #[error("can not be empty")]
    NameEmpty,

    #[error("can not be longer than {max} characters")]
    TooLong { max: usize },
}

/// A validation problem attached to the field it was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field} {kind}")]
pub struct FieldIssue {
    pub field: Field,
    pub kind: ErrorKind,
}

impl FieldIssue {
    pub fn new(field: Field, kind: ErrorKind) -> Self {
        FieldIssue { field, kind }
    }
}

/// Failures that are not field validation outcomes.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Submission attempted while the draft is not ready.
    #[error("draft is not ready for submission ({} field issue(s))", .0.len())]
    InvalidDraftState(Vec<FieldIssue>),

    #[error("the form has already been {0}")]
    FormClosed(&'static str),

    #[error("{0} is read-only for an existing activity")]
    ReadOnlyField(Field),

    #[error("{0} is not a text field")]
    NotTextField(Field),

    #[error("task {0} not found")]
    UnknownTask(u64),

    #[error("task {0} can not be added: it is already attached or has incomplete dependencies")]
    TaskNotSelectable(u64),

    #[error("unknown quantity type '{0}'")]
    UnknownQuantityType(String),

    #[error("could not parse date '{0}'")]
    InvalidDate(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PlannerError>;
