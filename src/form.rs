//! The activity form session.
//!
//! `ActivityForm` owns the transient draft state for one create or view
//! session. Every change re-derives the full validation report; submission is
//! only possible while the report is clean. Presentation (highlighting,
//! tooltips, confirmation dialogs) is left to the caller, which receives
//! structured results and supplies a [`Confirm`] implementation.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::activity::Activity;
use crate::draft::{materialize, ActivityDraft};
use crate::error::{ErrorKind, FieldIssue, PlannerError, Result};
use crate::fields::{Field, QuantityType};
use crate::filter::selectable;
use crate::input::InputField;
use crate::task::Task;
use crate::validate::{assess, local_today, validate_tasks, FormReport};

/// Prompt shown before a task is removed from the draft list.
pub const REMOVE_TASK_PROMPT: &str = "Are you sure you want to remove this Task from the list?";

/// Yes/no confirmation supplied by the presentation layer.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Lifecycle of a form session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Fields are mutable and at least one is invalid.
    Editing,
    /// Every field is valid; submission is allowed.
    Ready,
    /// An activity has been handed back. Terminal.
    Submitted,
    /// The session was abandoned. Terminal.
    Cancelled,
}

impl FormState {
    pub fn is_closed(self) -> bool {
        matches!(self, FormState::Submitted | FormState::Cancelled)
    }
}

/// Draft state for creating a new activity or viewing an existing one.
pub struct ActivityForm {
    name: InputField,
    details: InputField,
    quantity: InputField,
    duration: InputField,
    date: NaiveDate,
    quantity_type: Option<QuantityType>,
    tasks: Vec<Task>,
    /// Bound when viewing an existing activity; scalars are then read-only.
    activity: Option<Activity>,
    state: FormState,
    report: FormReport,
    clock: fn() -> NaiveDate,
}

impl ActivityForm {
    /// A blank form for a new activity, dated today.
    pub fn new() -> Self {
        Self::with_clock(local_today)
    }

    /// A blank form whose notion of "today" comes from `clock`.
    pub fn with_clock(clock: fn() -> NaiveDate) -> Self {
        let mut form = ActivityForm {
            name: InputField::with_limit(limit_of(Field::Name)),
            details: InputField::with_limit(limit_of(Field::Details)),
            quantity: InputField::with_limit(limit_of(Field::Quantity)),
            duration: InputField::with_limit(limit_of(Field::Duration)),
            date: clock(),
            quantity_type: None,
            tasks: Vec::new(),
            activity: None,
            state: FormState::Editing,
            report: FormReport::default(),
            clock,
        };
        form.recompute();
        form
    }

    /// A form bound to an existing activity.
    pub fn view(activity: Activity) -> Self {
        Self::view_with_clock(activity, local_today)
    }

    /// A form bound to an existing activity, using `clock` for "today".
    pub fn view_with_clock(activity: Activity, clock: fn() -> NaiveDate) -> Self {
        let mut form = Self::with_clock(clock);
        let draft = ActivityDraft::from_activity(&activity);
        // Read-only here, and a stored activity may predate the current limits.
        form.name = InputField::filled(&draft.name);
        form.details = InputField::filled(&draft.details);
        form.quantity = InputField::filled(&draft.quantity);
        form.duration = InputField::filled(&draft.duration);
        form.date = draft.date;
        form.quantity_type = Some(activity.quantity_type());
        form.tasks = draft.tasks;
        form.activity = Some(activity);
        form.recompute();
        form
    }

    /// True when the form is bound to an existing activity.
    pub fn is_viewing(&self) -> bool {
        self.activity.is_some()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Whether the submit action should be enabled.
    pub fn can_submit(&self) -> bool {
        self.state == FormState::Ready
    }

    /// The report produced by the most recent change.
    pub fn report(&self) -> &FormReport {
        &self.report
    }

    /// The current problem with one field, if any.
    pub fn issue(&self, field: Field) -> Option<ErrorKind> {
        self.report.issue(field)
    }

    /// Whether the user may change this field.
    pub fn is_editable(&self, field: Field) -> bool {
        !self.state.is_closed() && (field == Field::Tasks || !self.is_viewing())
    }

    /// Staged tasks, in the order they were added.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn quantity_type(&self) -> Option<QuantityType> {
        self.quantity_type
    }

    fn input(&self, field: Field) -> Option<&InputField> {
        match field {
            Field::Name => Some(&self.name),
            Field::Details => Some(&self.details),
            Field::Quantity => Some(&self.quantity),
            Field::Duration => Some(&self.duration),
            _ => None,
        }
    }

    /// Current text of a free-text field.
    pub fn text(&self, field: Field) -> Option<&str> {
        self.input(field).map(InputField::value)
    }

    /// Cursor position, in characters, of a free-text field.
    pub fn cursor(&self, field: Field) -> Option<usize> {
        self.input(field).map(InputField::cursor)
    }

    /// Snapshot of the current field values.
    pub fn draft(&self) -> ActivityDraft {
        ActivityDraft {
            name: self.name.value().to_string(),
            details: self.details.value().to_string(),
            quantity: self.quantity.value().to_string(),
            duration: self.duration.value().to_string(),
            date: self.date,
            quantity_type: self.quantity_type.map(|q| q.name().to_string()),
            tasks: self.tasks.clone(),
        }
    }

    fn ensure_open(&self) -> Result<()> {
        match self.state {
            FormState::Submitted => Err(PlannerError::FormClosed("submitted")),
            FormState::Cancelled => Err(PlannerError::FormClosed("cancelled")),
            FormState::Editing | FormState::Ready => Ok(()),
        }
    }

    fn ensure_editable(&self, field: Field) -> Result<()> {
        self.ensure_open()?;
        if !self.is_editable(field) {
            warn!(field = field.label(), "edit rejected on read-only field");
            return Err(PlannerError::ReadOnlyField(field));
        }
        Ok(())
    }

    fn input_mut(&mut self, field: Field) -> Result<&mut InputField> {
        self.ensure_editable(field)?;
        match field {
            Field::Name => Ok(&mut self.name),
            Field::Details => Ok(&mut self.details),
            Field::Quantity => Ok(&mut self.quantity),
            Field::Duration => Ok(&mut self.duration),
            _ => Err(PlannerError::NotTextField(field)),
        }
    }

    /// Replace a text field's value and re-validate.
    ///
    /// Returns the field's problem after the change. A value longer than the
    /// field's limit is not applied and reports `TooLong`.
    pub fn set_text(&mut self, field: Field, value: &str) -> Result<Option<ErrorKind>> {
        let accepted = self.input_mut(field)?.set_value(value);
        self.after_text_edit(field, accepted)
    }

    /// Type one character into a text field and re-validate.
    pub fn handle_char(&mut self, field: Field, c: char) -> Result<Option<ErrorKind>> {
        let accepted = self.input_mut(field)?.handle_char(c);
        self.after_text_edit(field, accepted)
    }

    /// Delete the character before the cursor in a text field and re-validate.
    pub fn handle_backspace(&mut self, field: Field) -> Result<Option<ErrorKind>> {
        self.input_mut(field)?.handle_backspace();
        self.after_text_edit(field, true)
    }

    /// Delete the character at the cursor in a text field and re-validate.
    pub fn handle_delete(&mut self, field: Field) -> Result<Option<ErrorKind>> {
        self.input_mut(field)?.handle_delete();
        self.after_text_edit(field, true)
    }

    pub fn move_cursor_left(&mut self, field: Field) -> Result<()> {
        self.input_mut(field)?.move_cursor_left();
        Ok(())
    }

    pub fn move_cursor_right(&mut self, field: Field) -> Result<()> {
        self.input_mut(field)?.move_cursor_right();
        Ok(())
    }

    fn after_text_edit(&mut self, field: Field, accepted: bool) -> Result<Option<ErrorKind>> {
        if !accepted {
            let max = limit_of(field);
            debug!(field = field.label(), max, "input beyond character limit rejected");
            return Ok(Some(ErrorKind::TooLong { max }));
        }
        self.recompute();
        Ok(self.issue(field))
    }

    /// Set the target date and re-validate.
    pub fn set_date(&mut self, date: NaiveDate) -> Result<Option<ErrorKind>> {
        self.ensure_editable(Field::Date)?;
        self.date = date;
        self.recompute();
        Ok(self.issue(Field::Date))
    }

    /// Select a quantity type, or clear the selection with `None`.
    pub fn select_quantity_type(&mut self, quantity_type: Option<QuantityType>) -> Result<Option<ErrorKind>> {
        self.ensure_editable(Field::QuantityType)?;
        self.quantity_type = quantity_type;
        self.recompute();
        Ok(self.issue(Field::QuantityType))
    }

    /// Select a quantity type by its display name.
    pub fn select_quantity_type_name(&mut self, name: &str) -> Result<Option<ErrorKind>> {
        let quantity_type = QuantityType::from_name(name)
            .ok_or_else(|| PlannerError::UnknownQuantityType(name.to_string()))?;
        self.select_quantity_type(Some(quantity_type))
    }

    /// Tasks from `pool` that may still be added to this form.
    pub fn selectable_tasks<'a>(&self, pool: &'a [Task]) -> Vec<&'a Task> {
        let on_activity = self.activity.as_ref().map(Activity::tasks).unwrap_or(&[]);
        selectable(pool, &self.tasks, on_activity)
    }

    /// Stage the tasks with the given IDs from `pool`.
    ///
    /// All IDs are checked before anything is added: each must exist in the
    /// pool and be selectable. Returns the number of tasks added.
    pub fn add_tasks(&mut self, pool: &[Task], ids: &[u64]) -> Result<usize> {
        self.ensure_editable(Field::Tasks)?;
        let candidates = self.selectable_tasks(pool);

        let mut chosen: Vec<Task> = Vec::with_capacity(ids.len());
        for &id in ids {
            if chosen.iter().any(|t| t.id == id) {
                continue;
            }
            match candidates.iter().find(|t| t.id == id) {
                Some(task) => chosen.push((*task).clone()),
                None if pool.iter().any(|t| t.id == id) => {
                    return Err(PlannerError::TaskNotSelectable(id))
                }
                None => return Err(PlannerError::UnknownTask(id)),
            }
        }

        let added = chosen.len();
        if let Some(activity) = self.activity.as_mut() {
            activity.add_tasks(chosen.iter().cloned());
        }
        self.tasks.extend(chosen);
        self.recompute();
        debug!(added, total = self.tasks.len(), "tasks staged");
        Ok(added)
    }

    /// Whether a remove action for `id` should be enabled.
    pub fn can_remove(&self, id: u64) -> bool {
        self.is_editable(Field::Tasks) && self.tasks.iter().any(|t| t.id == id)
    }

    /// Remove a staged task after the user confirms.
    ///
    /// Returns `Ok(false)` when the task is not staged or the user declines; in
    /// both cases nothing changes. When viewing an existing activity the task
    /// is detached from it as well.
    pub fn remove_task(&mut self, id: u64, confirm: &mut impl Confirm) -> Result<bool> {
        self.ensure_editable(Field::Tasks)?;
        let Some(idx) = self.tasks.iter().position(|t| t.id == id) else {
            return Ok(false);
        };
        if !confirm.confirm(REMOVE_TASK_PROMPT) {
            debug!(task = id, "task removal declined");
            return Ok(false);
        }
        self.tasks.remove(idx);
        if let Some(activity) = self.activity.as_mut() {
            activity.remove_task(id);
        }
        self.recompute();
        Ok(true)
    }

    /// Finish the session and hand back the activity.
    ///
    /// For a new form this materializes a fresh activity; when viewing, the
    /// bound activity is returned with its updated task list. Fails with
    /// `InvalidDraftState` if the form is not ready and `FormClosed` if the
    /// session already ended.
    pub fn submit(&mut self) -> Result<Activity> {
        self.ensure_open()?;
        self.recompute();
        if !self.can_submit() {
            warn!(issues = self.report.issues().len(), "submit while form not ready");
            return Err(PlannerError::InvalidDraftState(self.report.issues().to_vec()));
        }

        let activity = match self.activity.take() {
            Some(bound) => bound,
            None => materialize(&self.draft(), (self.clock)())?,
        };
        self.state = FormState::Submitted;
        info!(name = activity.name(), tasks = activity.tasks().len(), "activity submitted");
        Ok(activity)
    }

    /// Abandon the session without producing an activity.
    pub fn cancel(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.state = FormState::Cancelled;
        info!("activity form cancelled");
        Ok(())
    }

    /// Re-derive the report and Editing/Ready state from the current values.
    fn recompute(&mut self) {
        if self.state.is_closed() {
            return;
        }
        self.report = if self.is_viewing() {
            // Scalars are fixed once created; only the task list is re-checked.
            let issues = validate_tasks(&self.tasks)
                .err()
                .map(|kind| FieldIssue::new(Field::Tasks, kind));
            FormReport::from_issues(issues.into_iter().collect())
        } else {
            assess(&self.draft(), (self.clock)())
        };

        let next = if self.report.is_ready() { FormState::Ready } else { FormState::Editing };
        if next != self.state {
            debug!(from = ?self.state, to = ?next, "form readiness changed");
        }
        self.state = next;
    }
}

impl Default for ActivityForm {
    fn default() -> Self {
        Self::new()
    }
}

fn limit_of(field: Field) -> usize {
    field.char_limit().unwrap_or(usize::MAX)
}
