//! Task pool storage and input parsing helpers.
//!
//! This module provides the `Database` struct that holds the pool of known
//! tasks the activity form selects from, along with path resolution and
//! date-input parsing used by the command line.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{PlannerError, Result};
use crate::task::Task;

/// Environment variable that overrides the default database location.
pub const DB_ENV: &str = "PLANNER_DB";

/// In-memory pool of tasks backed by a JSON file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Database {
    pub tasks: Vec<Task>,
}

impl Database {
    /// Load the pool from a JSON file. A missing file yields an empty pool.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no task pool file, starting empty");
            return Ok(Database::default());
        }
        let mut buf = String::new();
        File::open(path)?.read_to_string(&mut buf)?;
        let db: Database = serde_json::from_str(&buf)?;
        debug!(path = %path.display(), tasks = db.tasks.len(), "task pool loaded");
        Ok(db)
    }

    /// Save the pool to JSON using atomic write (temp file + rename).
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let tmp = path.with_extension("json.tmp");
        let mut f = File::create(&tmp)?;
        let data = serde_json::to_string_pretty(self)?;
        f.write_all(data.as_bytes())?;
        f.flush()?;
        fs::rename(tmp, path)?;
        info!(path = %path.display(), tasks = self.tasks.len(), "task pool saved");
        Ok(())
    }

    /// Generate the next available task ID.
    pub fn next_id(&self) -> u64 {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    /// Get a task by ID.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Get a mutable reference to a task by ID.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Add a new task depending on existing tasks, returning its ID.
    pub fn add_task(&mut self, name: &str, dependencies: &[u64]) -> Result<u64> {
        if let Some(&missing) = dependencies.iter().find(|&&d| self.get(d).is_none()) {
            return Err(PlannerError::UnknownTask(missing));
        }
        let mut task = Task::new(self.next_id(), name.trim());
        let mut seen = HashSet::new();
        task.dependencies = dependencies
            .iter()
            .copied()
            .filter(|d| seen.insert(*d))
            .collect();
        let id = task.id;
        self.tasks.push(task);
        Ok(id)
    }

    /// Set a task's completion flag.
    pub fn set_completed(&mut self, id: u64, completed: bool) -> Result<()> {
        let task = self.get_mut(id).ok_or(PlannerError::UnknownTask(id))?;
        task.completed = completed;
        Ok(())
    }
}

/// Resolve the task pool path.
///
/// Order: explicit `--db` path, then `PLANNER_DB`, then
/// `$HOME/.planner/tasks.json`.
pub fn resolve_db_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    if let Some(path) = std::env::var_os(DB_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".planner").join("tasks.json")
}

/// Parse human-readable date input relative to `today`.
///
/// Supports:
/// - "today", "tomorrow"
/// - "monday" .. "sunday" and "next monday" ..
/// - "end of week", "end of month"
/// - "in 3d", "in 2w"
/// - "YYYY-MM-DD" format
pub fn parse_date_input(s: &str, today: NaiveDate) -> Result<NaiveDate> {
    let s = s.trim().to_lowercase();
    let invalid = || PlannerError::InvalidDate(s.clone());
    let shift = |days: Option<Duration>| {
        days.and_then(|d| today.checked_add_signed(d))
            .ok_or_else(invalid)
    };

    match s.as_str() {
        "today" => return Ok(today),
        "tomorrow" => return shift(Duration::try_days(1)),
        "end of week" | "eow" => {
            let to_sunday = 6 - today.weekday().num_days_from_monday() as i64;
            return shift(Duration::try_days(to_sunday));
        }
        "end of month" | "eom" => {
            let (year, month) = if today.month() == 12 {
                (today.year() + 1, 1)
            } else {
                (today.year(), today.month() + 1)
            };
            let first_of_next = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
            return first_of_next.pred_opt().ok_or_else(invalid);
        }
        _ => {}
    }

    if let Some(rest) = s.strip_prefix("in ") {
        if let Some(n) = rest.strip_suffix('d').and_then(|n| n.trim().parse::<i64>().ok()) {
            return shift(Duration::try_days(n));
        }
        if let Some(n) = rest.strip_suffix('w').and_then(|n| n.trim().parse::<i64>().ok()) {
            return shift(Duration::try_weeks(n));
        }
        return Err(invalid());
    }

    let weekdays = [
        "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
    ];
    let (next, day) = match s.strip_prefix("next ") {
        Some(day) => (true, day),
        None => (false, s.as_str()),
    };
    if let Some(target) = weekdays.iter().position(|w| *w == day || w[..3] == *day) {
        let current = today.weekday().num_days_from_monday() as i64;
        let mut ahead = (target as i64 + 7 - current) % 7;
        if next {
            ahead += 7;
        }
        return shift(Duration::try_days(ahead));
    }

    NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    #[test]
    fn test_parse_date_input() {
        let today = wednesday();
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        assert_eq!(parse_date_input("today", today).unwrap(), today);
        assert_eq!(parse_date_input("Tomorrow", today).unwrap(), d(2026, 10, 15));
        assert_eq!(parse_date_input("in 3d", today).unwrap(), d(2026, 10, 17));
        assert_eq!(parse_date_input("in 2w", today).unwrap(), d(2026, 10, 28));
        assert_eq!(parse_date_input("friday", today).unwrap(), d(2026, 10, 16));
        assert_eq!(parse_date_input("wed", today).unwrap(), today);
        assert_eq!(parse_date_input("next monday", today).unwrap(), d(2026, 10, 26));
        assert_eq!(parse_date_input("eow", today).unwrap(), d(2026, 10, 18));
        assert_eq!(parse_date_input("end of month", today).unwrap(), d(2026, 10, 31));
        assert_eq!(parse_date_input("2027-01-02", today).unwrap(), d(2027, 1, 2));
        assert!(matches!(
            parse_date_input("someday", today),
            Err(PlannerError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_parse_date_input_rejects_overflow() {
        let today = wednesday();
        for input in ["in 999999999d", "in 9223372036854775807w", "in -999999999d"] {
            assert!(
                matches!(parse_date_input(input, today), Err(PlannerError::InvalidDate(_))),
                "{input:?}"
            );
        }
        let last = NaiveDate::MAX;
        assert!(matches!(
            parse_date_input("tomorrow", last),
            Err(PlannerError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_date_input("next monday", last),
            Err(PlannerError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_add_task_checks_dependencies() {
        let mut db = Database::default();
        let a = db.add_task("  a ", &[]).unwrap();
        let b = db.add_task("b", &[a, a]).unwrap();
        assert_eq!(db.get(b).unwrap().dependencies, vec![a]);
        assert_eq!(db.get(a).unwrap().name, "a");
        assert!(matches!(db.add_task("c", &[77]), Err(PlannerError::UnknownTask(77))));
        assert_eq!(db.next_id(), 3);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("tasks.json");
        assert!(Database::load(&path).unwrap().tasks.is_empty());

        let mut db = Database::default();
        let id = db.add_task("Collect sources", &[]).unwrap();
        db.set_completed(id, true).unwrap();
        db.save(&path).unwrap();

        let loaded = Database::load(&path).unwrap();
        assert_eq!(loaded.tasks.len(), 1);
        assert!(loaded.get(id).unwrap().completed);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Database::load(&path), Err(PlannerError::Json(_))));
    }

    #[test]
    fn test_explicit_path_wins() {
        let p = PathBuf::from("/tmp/x.json");
        assert_eq!(resolve_db_path(Some(p.clone())), p);
    }
}
