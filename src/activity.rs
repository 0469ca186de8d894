//! The `Activity` aggregate.
//!
//! Scalar fields are fixed at construction and only exposed through getters.
//! The attached task list stays mutable.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::fields::QuantityType;
use crate::task::Task;

/// A plannable unit of work with a target date, duration and quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    name: String,
    details: String,
    date: NaiveDate,
    duration: u32,
    quantity: u32,
    quantity_type: QuantityType,
    tasks: Vec<Task>,
    created_at_utc: i64,
}

impl Activity {
    /// Construct an activity with no tasks attached.
    ///
    /// No validation happens here; use [`crate::draft::materialize`] to build
    /// one from form input.
    pub fn new(
        name: &str,
        details: &str,
        date: NaiveDate,
        duration: u32,
        quantity: u32,
        quantity_type: QuantityType,
    ) -> Self {
        Activity {
            name: name.to_string(),
            details: details.to_string(),
            date,
            duration,
            quantity,
            quantity_type,
            tasks: Vec::new(),
            created_at_utc: Utc::now().timestamp(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn quantity_type(&self) -> QuantityType {
        self.quantity_type
    }

    pub fn created_at_utc(&self) -> i64 {
        self.created_at_utc
    }

    /// Attached tasks, in attachment order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Whether a task with this ID is attached.
    pub fn has_task(&self, id: u64) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    /// Attach a task. Returns false if a task with the same ID is already attached.
    pub fn add_task(&mut self, task: Task) -> bool {
        if self.has_task(task.id) {
            return false;
        }
        self.tasks.push(task);
        true
    }

    /// Attach several tasks, skipping any already attached.
    pub fn add_tasks<I: IntoIterator<Item = Task>>(&mut self, tasks: I) {
        for task in tasks {
            self.add_task(task);
        }
    }

    /// Detach a task by ID, returning it if it was attached.
    pub fn remove_task(&mut self, id: u64) -> Option<Task> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(idx))
    }
}
