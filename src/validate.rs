//! Field validation for the activity form.
//!
//! Every check is a pure function of the field value (and, for dates, of the
//! current local date). `assess` runs all of them independently so each field
//! can report its own problem, and readiness is the conjunction of the results.

use chrono::{Local, NaiveDate};

use crate::draft::ActivityDraft;
use crate::error::{ErrorKind, FieldIssue};
use crate::fields::{Field, QuantityType, DETAILS_LIMIT, NAME_LIMIT};
use crate::task::Task;

/// The current calendar date in the system's local time zone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a non-negative whole number typed into a text field.
///
/// The text is trimmed first. Anything that is not a finite number is
/// `NotNumeric`; a number that is not written as an integer literal is
/// `NotInteger`; integers below zero are `Negative`, and integers that do not
/// fit in a `u32` are `OutOfRange`.
fn parse_whole(text: &str) -> Result<u32, ErrorKind> {
    let text = text.trim();
    let value: f64 = text.parse().map_err(|_| ErrorKind::NotNumeric)?;
    if !value.is_finite() {
        return Err(ErrorKind::NotNumeric);
    }

    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ErrorKind::NotInteger);
    }

    match text.parse::<i64>() {
        Ok(n) if n < 0 => Err(ErrorKind::Negative),
        Ok(n) => u32::try_from(n).map_err(|_| ErrorKind::OutOfRange),
        // Overflowed i64: the sign alone decides.
        Err(_) if value < 0.0 => Err(ErrorKind::Negative),
        Err(_) => Err(ErrorKind::OutOfRange),
    }
}

/// Validate the quantity field, returning the parsed value.
pub fn validate_quantity(text: &str) -> Result<u32, ErrorKind> {
    parse_whole(text)
}

/// Validate the duration field, returning the parsed value.
pub fn validate_duration(text: &str) -> Result<u32, ErrorKind> {
    parse_whole(text)
}

/// Validate a target date against today's local date.
pub fn validate_date(date: NaiveDate) -> Result<NaiveDate, ErrorKind> {
    validate_date_on(date, local_today())
}

/// Validate a target date against an explicit `today`.
///
/// Only dates strictly before `today` are rejected.
pub fn validate_date_on(date: NaiveDate, today: NaiveDate) -> Result<NaiveDate, ErrorKind> {
    if date < today {
        Err(ErrorKind::DateInPast)
    } else {
        Ok(date)
    }
}

/// Validate the name, returning it trimmed.
pub fn validate_name(text: &str) -> Result<&str, ErrorKind> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ErrorKind::NameEmpty);
    }
    if text.chars().count() > NAME_LIMIT {
        return Err(ErrorKind::TooLong { max: NAME_LIMIT });
    }
    Ok(trimmed)
}

/// Validate the free-text details, returning them trimmed.
pub fn validate_details(text: &str) -> Result<&str, ErrorKind> {
    if text.chars().count() > DETAILS_LIMIT {
        return Err(ErrorKind::TooLong { max: DETAILS_LIMIT });
    }
    Ok(text.trim())
}

/// Resolve the selected quantity type. `None` is the "no selection" sentinel.
pub fn validate_quantity_type(selected: Option<&str>) -> Result<QuantityType, ErrorKind> {
    selected
        .and_then(QuantityType::from_name)
        .ok_or(ErrorKind::NoQuantityType)
}

/// At least one task must be attached.
pub fn validate_tasks(tasks: &[Task]) -> Result<(), ErrorKind> {
    if tasks.is_empty() {
        Err(ErrorKind::NoTaskSelected)
    } else {
        Ok(())
    }
}

/// Outcome of validating every field of a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormReport {
    issues: Vec<FieldIssue>,
}

impl FormReport {
    pub(crate) fn from_issues(issues: Vec<FieldIssue>) -> Self {
        FormReport { issues }
    }

    /// All issues, in form order.
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// The problem reported for one field, if any.
    pub fn issue(&self, field: Field) -> Option<ErrorKind> {
        self.issues.iter().find(|i| i.field == field).map(|i| i.kind)
    }

    /// True when no field reported a problem.
    pub fn is_ready(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn into_issues(self) -> Vec<FieldIssue> {
        self.issues
    }
}

/// Validate every field of the draft independently.
pub fn assess(draft: &ActivityDraft, today: NaiveDate) -> FormReport {
    let checks: [(Field, Option<ErrorKind>); 7] = [
        (Field::Name, validate_name(&draft.name).err()),
        (Field::Details, validate_details(&draft.details).err()),
        (Field::QuantityType, validate_quantity_type(draft.quantity_type.as_deref()).err()),
        (Field::Quantity, validate_quantity(&draft.quantity).err()),
        (Field::Duration, validate_duration(&draft.duration).err()),
        (Field::Date, validate_date_on(draft.date, today).err()),
        (Field::Tasks, validate_tasks(&draft.tasks).err()),
    ];

    FormReport {
        issues: checks
            .into_iter()
            .filter_map(|(field, kind)| kind.map(|k| FieldIssue::new(field, k)))
            .collect(),
    }
}

/// Whether the draft may be submitted.
pub fn compute_readiness(draft: &ActivityDraft, today: NaiveDate) -> bool {
    assess(draft, today).is_ready()
}
