//! Ordering policy: the deterministic sort applied before every display and
//! before resolving a selected row to a task.
//!
//! Ascending by `(priority, due_date)`. Absent priority sorts after every
//! present priority; absent due date sorts after every real date via a
//! sentinel that compares greater than any `YYYY-MM-DD` string. Ties keep
//! the relative order of the underlying collection.

use crate::task::Task;

/// Sorts after every real `YYYY-MM-DD` date under lexicographic comparison.
const NO_DUE_DATE: &str = "9999-99-99";

fn sort_key(task: &Task) -> (bool, u64, &str) {
    (
        task.priority.is_none(),
        task.priority.unwrap_or(0),
        task.due_date.as_deref().unwrap_or(NO_DUE_DATE),
    )
}

/// Return the tasks in display order.
///
/// Recomputed from the live collection on every call; never cached.
/// `Vec::sort_by` is stable, so structurally distinct tasks with equal keys
/// retain their insertion order across repeated re-sorts.
pub fn sorted(tasks: &[Task]) -> Vec<Task> {
    let mut ordered = tasks.to_vec();
    ordered.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
    ordered
}
