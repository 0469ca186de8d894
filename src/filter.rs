//! Selection of tasks that may be attached to the activity being drafted.

use std::collections::{HashMap, HashSet};

use crate::task::Task;

/// True when every dependency of `task` is a completed task in `pool`.
///
/// A task without dependencies is always eligible. Dependencies that are not
/// in the pool count as incomplete.
pub fn dependencies_complete(task: &Task, pool: &[Task]) -> bool {
    if task.dependencies.is_empty() {
        return true;
    }
    let index: HashMap<u64, &Task> = pool.iter().map(|t| (t.id, t)).collect();
    task.dependencies_complete(|id| index.get(&id).copied())
}

/// Tasks from `all` that can still be attached.
///
/// Removes tasks already staged in the draft list, tasks already on the
/// activity being edited, and tasks with incomplete dependencies. The order
/// of `all` is kept.
pub fn selectable<'a>(all: &'a [Task], in_draft: &[Task], on_activity: &[Task]) -> Vec<&'a Task> {
    let taken: HashSet<u64> = in_draft
        .iter()
        .chain(on_activity.iter())
        .map(|t| t.id)
        .collect();
    let index: HashMap<u64, &Task> = all.iter().map(|t| (t.id, t)).collect();

    all.iter()
        .filter(|t| !taken.contains(&t.id))
        .filter(|t| t.dependencies_complete(|id| index.get(&id).copied()))
        .collect()
}
