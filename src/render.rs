//! Display-line formatting for the presentation shell.

use crate::task::Task;

/// Format an ordered view as display rows: 1-based rank, description,
/// priority, due date, and a completion indicator. Absent priority and
/// due date render as `-`.
pub fn lines(tasks: &[Task]) -> Vec<String> {
    tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let status = if task.completed {
                "\u{2714} Completed"
            } else {
                "\u{2717} Pending"
            };
            let priority = task
                .priority
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string());
            format!(
                "{}. {} | Priority: {} | Due: {} | {}",
                idx + 1,
                task.description,
                priority,
                task.due_date.as_deref().unwrap_or("-"),
                status
            )
        })
        .collect()
}
