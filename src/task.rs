//! Task data structure and related functionality.
//!
//! A `Task` is a sub-unit of work that may depend on other tasks. Dependencies
//! are stored as task IDs and resolved through the task pool.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A unit of work that can be attached to an activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub completed: bool,
    /// IDs of tasks that must be complete before this one can be scheduled.
    #[serde(default)]
    pub dependencies: Vec<u64>,
}

impl Task {
    /// Create an incomplete task with no dependencies.
    pub fn new(id: u64, name: &str) -> Self {
        Task {
            id,
            name: name.to_string(),
            completed: false,
            dependencies: Vec::new(),
        }
    }

    /// Builder-style helper that adds a dependency on another task.
    pub fn depends_on(mut self, id: u64) -> Self {
        if !self.dependencies.contains(&id) {
            self.dependencies.push(id);
        }
        self
    }

    /// True when every dependency resolves to a completed task.
    ///
    /// `lookup` maps a dependency ID to its task. A dependency that cannot be
    /// resolved is treated as incomplete.
    pub fn dependencies_complete<'a, F>(&self, lookup: F) -> bool
    where
        F: Fn(u64) -> Option<&'a Task>,
    {
        self.dependencies
            .iter()
            .all(|&dep| lookup(dep).is_some_and(|t| t.completed))
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.completed { "x" } else { " " };
        write!(f, "[{}] #{} {}", mark, self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_marks_completion() {
        let mut t = Task::new(3, "Outline");
        assert_eq!(t.to_string(), "[ ] #3 Outline");
        t.completed = true;
        assert_eq!(t.to_string(), "[x] #3 Outline");
    }

    #[test]
    fn test_depends_on_dedups() {
        let t = Task::new(1, "a").depends_on(2).depends_on(2).depends_on(3);
        assert_eq!(t.dependencies, vec![2, 3]);
    }

    #[test]
    fn test_unresolved_dependency_is_incomplete() {
        let t = Task::new(1, "a").depends_on(99);
        assert!(!t.dependencies_complete(|_| None));
    }
}
