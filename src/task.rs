//! Core Task type and input parsing rules.
//!
//! # Invariants
//! - `description` is never empty or whitespace-only
//! - `priority`, if present, is a non-negative integer
//!
//! Tasks carry no identity field: two tasks are equal exactly when all four
//! attributes are equal, and mutation operations reference tasks by position
//! in a freshly recomputed sort order.

/// A unit of work in the task list.
///
/// Structural equality over all four fields is load-bearing: `remove`
/// deletes the first occurrence that compares equal to the selected task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// What to do. Non-empty after trimming.
    pub description: String,
    /// Lower sorts first; absent sorts after every present priority.
    pub priority: Option<u64>,
    /// `YYYY-MM-DD` text, compared lexicographically. Not validated.
    pub due_date: Option<String>,
    /// One-way flag; there is no "uncomplete" operation.
    pub completed: bool,
}

impl Task {
    /// Create a new pending task from raw user-entered text.
    ///
    /// The description is trimmed; priority text becomes a priority only if
    /// it is entirely decimal digits (anything else silently yields no
    /// priority); due-date text is trimmed and accepted verbatim, empty
    /// meaning no due date.
    ///
    /// # Errors
    /// Returns `TaskError::EmptyDescription` if the trimmed description is
    /// empty.
    pub fn new(
        description: &str,
        priority_text: &str,
        due_date_text: &str,
    ) -> Result<Self, TaskError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TaskError::EmptyDescription);
        }
        let due_date = due_date_text.trim();
        Ok(Self {
            description: description.to_string(),
            priority: parse_priority(priority_text),
            due_date: (!due_date.is_empty()).then(|| due_date.to_string()),
            completed: false,
        })
    }
}

/// Parse user-entered priority text.
///
/// Returns `Some` only for trimmed text composed entirely of ASCII decimal
/// digits that fits in a `u64`. Signs, decimals, and empty text all yield
/// `None`.
pub fn parse_priority(text: &str) -> Option<u64> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Errors that can occur constructing a task.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("Task description cannot be empty")]
    EmptyDescription,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_pending() {
        let task = Task::new("Write report", "2", "2025-01-10").unwrap();
        assert_eq!(task.description, "Write report");
        assert_eq!(task.priority, Some(2));
        assert_eq!(task.due_date.as_deref(), Some("2025-01-10"));
        assert!(!task.completed);
    }

    #[test]
    fn new_task_trims_description() {
        let task = Task::new("  Buy milk  ", "", "").unwrap();
        assert_eq!(task.description, "Buy milk");
        assert_eq!(task.priority, None);
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn empty_description_is_rejected() {
        assert_eq!(Task::new("", "1", "").unwrap_err(), TaskError::EmptyDescription);
        assert_eq!(
            Task::new("   ", "1", "").unwrap_err(),
            TaskError::EmptyDescription
        );
    }

    #[test]
    fn non_numeric_priority_text_is_silently_absent() {
        assert_eq!(Task::new("Task A", "abc", "").unwrap().priority, None);
        assert_eq!(Task::new("Task A", "-3", "").unwrap().priority, None);
        assert_eq!(Task::new("Task A", "1.5", "").unwrap().priority, None);
    }

    #[test]
    fn due_date_text_is_not_validated() {
        let task = Task::new("Task A", "", "whenever").unwrap();
        assert_eq!(task.due_date.as_deref(), Some("whenever"));
    }

    #[test]
    fn parse_priority_accepts_only_digits() {
        assert_eq!(parse_priority("7"), Some(7));
        assert_eq!(parse_priority(" 12 "), Some(12));
        assert_eq!(parse_priority("0"), Some(0));
        assert_eq!(parse_priority(""), None);
        assert_eq!(parse_priority("abc"), None);
        assert_eq!(parse_priority("+5"), None);
        assert_eq!(parse_priority("-5"), None);
        assert_eq!(parse_priority("3.0"), None);
    }

    #[test]
    fn parse_priority_rejects_overflow() {
        // All digits, but larger than u64::MAX.
        assert_eq!(parse_priority("99999999999999999999999"), None);
    }
}
