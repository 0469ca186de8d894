//! # Activity Planner
//!
//! Core of an activity planning tool: users create *activities* (a named
//! target with a quantity, a duration and a due date) composed of *tasks*.
//!
//! ## Key Features
//!
//! - **Live Validation**: every field is checked on each change and reports its
//!   own problem (`NotNumeric`, `NotInteger`, `Negative`, `DateInPast`, ...).
//! - **Readiness Gating**: submission is allowed only while every field is valid
//!   and at least one task is attached.
//! - **Dependency-aware Task Selection**: only tasks whose prerequisites are all
//!   complete, and which are not attached already, are offered.
//! - **Activity Construction**: a validated draft becomes an [`Activity`] whose
//!   scalar fields are fixed and whose task list stays editable.
//!
//! ## Quick Start
//!
//! ```
//! use activity_planner::{ActivityForm, Field, QuantityType, Task};
//!
//! let pool = vec![Task::new(1, "Skim chapter")];
//! let mut form = ActivityForm::new();
//! form.set_text(Field::Name, "Read chapter 3").unwrap();
//! form.set_text(Field::Quantity, "1").unwrap();
//! form.set_text(Field::Duration, "30").unwrap();
//! form.select_quantity_type(Some(QuantityType::Pages)).unwrap();
//! form.add_tasks(&pool, &[1]).unwrap();
//!
//! assert!(form.can_submit());
//! let activity = form.submit().unwrap();
//! assert_eq!(activity.tasks().len(), 1);
//! ```
//!
//! Rendering, window management and storage of activities belong to the
//! caller. The `planner` binary is a thin command-line driver over this crate.

pub mod activity;
pub mod cli;
pub mod cmd;
pub mod db;
pub mod draft;
pub mod error;
pub mod fields;
pub mod filter;
pub mod form;
pub mod input;
pub mod logging;
pub mod task;
pub mod validate;

pub use activity::Activity;
pub use draft::{materialize, ActivityDraft};
pub use error::{ErrorKind, FieldIssue, PlannerError};
pub use fields::{Field, QuantityType};
pub use filter::{dependencies_complete, selectable};
pub use form::{ActivityForm, Confirm, FormState};
pub use task::Task;
pub use validate::{
    assess, compute_readiness, validate_date, validate_date_on, validate_duration,
    validate_quantity, FormReport,
};
