//! Draft field values and their promotion to an [`Activity`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::activity::Activity;
use crate::error::{PlannerError, Result};
use crate::task::Task;
use crate::validate::{self, assess};

/// Raw values of the activity form as the user typed them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityDraft {
    pub name: String,
    pub details: String,
    pub quantity: String,
    pub duration: String,
    pub date: NaiveDate,
    /// Display name of the selected quantity type; `None` means nothing is selected.
    pub quantity_type: Option<String>,
    pub tasks: Vec<Task>,
}

impl ActivityDraft {
    /// An empty draft whose date defaults to `today`.
    pub fn new(today: NaiveDate) -> Self {
        ActivityDraft {
            name: String::new(),
            details: String::new(),
            quantity: String::new(),
            duration: String::new(),
            date: today,
            quantity_type: None,
            tasks: Vec::new(),
        }
    }

    /// A draft filled in from an existing activity.
    pub fn from_activity(activity: &Activity) -> Self {
        ActivityDraft {
            name: activity.name().to_string(),
            details: activity.details().to_string(),
            quantity: activity.quantity().to_string(),
            duration: activity.duration().to_string(),
            date: activity.date(),
            quantity_type: Some(activity.quantity_type().name().to_string()),
            tasks: activity.tasks().to_vec(),
        }
    }
}

/// Build a new activity from draft values.
///
/// The draft is re-validated against `today`; if any field is invalid this
/// fails with [`PlannerError::InvalidDraftState`] instead of constructing a
/// partially valid activity. Name and details are stored trimmed. Every call
/// produces a new, independent activity.
pub fn materialize(draft: &ActivityDraft, today: NaiveDate) -> Result<Activity> {
    let report = assess(draft, today);
    if !report.is_ready() {
        warn!(issues = report.issues().len(), "materialize called on an invalid draft");
        return Err(PlannerError::InvalidDraftState(report.into_issues()));
    }

    let invalid = |_| PlannerError::InvalidDraftState(Vec::new());
    let name = validate::validate_name(&draft.name).map_err(invalid)?;
    let details = validate::validate_details(&draft.details).map_err(invalid)?;
    let quantity = validate::validate_quantity(&draft.quantity).map_err(invalid)?;
    let duration = validate::validate_duration(&draft.duration).map_err(invalid)?;
    let quantity_type =
        validate::validate_quantity_type(draft.quantity_type.as_deref()).map_err(invalid)?;

    let mut activity = Activity::new(name, details, draft.date, duration, quantity, quantity_type);
    activity.add_tasks(draft.tasks.iter().cloned());
    debug!(name = activity.name(), tasks = activity.tasks().len(), "activity materialized");
    Ok(activity)
}
