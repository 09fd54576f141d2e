//! Flat-file record store for the task collection.
//!
//! One record per line, newline-terminated, four comma-separated fields:
//!
//! ```text
//! description,priority,due_date,completed
//! ```
//!
//! `priority` is decimal digits or empty, `due_date` is `YYYY-MM-DD` or
//! empty, `completed` is the literal text `True` or `False`. Field values
//! must not contain the comma delimiter: a comma inside `description` or
//! `due_date` changes the field count and corrupts that row on reload. This
//! is a known format limitation, kept for compatibility rather than escaped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::task::Task;

/// Errors from reading or writing the backing file.
///
/// A missing file on load is not an error; malformed lines are dropped, not
/// reported. Everything here is a real I/O failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read task file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write task file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The load/save boundary to the flat persisted file.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full task collection.
    ///
    /// A missing file yields an empty collection. Lines that do not parse
    /// as a well-formed record are dropped with a `warn!`, never surfaced
    /// to the caller; load is best-effort tolerant of corruption by design.
    pub fn load(&self) -> Result<Vec<Task>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: err,
                })
            }
        };

        let mut tasks = Vec::new();
        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parse_line(line) {
                Some(task) => tasks.push(task),
                None => warn!(
                    "Skipping malformed line {} in {}",
                    lineno + 1,
                    self.path.display()
                ),
            }
        }
        debug!("Loaded {} tasks from {}", tasks.len(), self.path.display());
        Ok(tasks)
    }

    /// Overwrite the backing file with the collection in the given order.
    ///
    /// The in-memory order is written as-is, not re-sorted. Whole-file
    /// rewrite with no atomic rename: a crash mid-write can leave a
    /// partially-written file. Accepted limitation for a single-user tool.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let mut out = String::new();
        for task in tasks {
            out.push_str(&task.description);
            out.push(',');
            if let Some(priority) = task.priority {
                out.push_str(&priority.to_string());
            }
            out.push(',');
            if let Some(due_date) = &task.due_date {
                out.push_str(due_date);
            }
            out.push(',');
            out.push_str(if task.completed { "True" } else { "False" });
            out.push('\n');
        }
        fs::write(&self.path, out).map_err(|err| StoreError::Write {
            path: self.path.clone(),
            source: err,
        })?;
        debug!("Saved {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }
}

/// Parse one persisted record. `None` means the line is malformed: wrong
/// field count, empty description, or a priority field that is not an
/// unsigned integer.
fn parse_line(line: &str) -> Option<Task> {
    let fields: Vec<&str> = line.split(',').collect();
    let [description, priority, due_date, completed] = fields.as_slice() else {
        return None;
    };
    if description.is_empty() {
        return None;
    }
    let priority = if priority.is_empty() {
        None
    } else {
        Some(priority.trim().parse::<u64>().ok()?)
    };
    Some(Task {
        description: description.to_string(),
        priority,
        due_date: (!due_date.is_empty()).then(|| due_date.to_string()),
        completed: *completed == "True",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> TaskStore {
        TaskStore::new(dir.path().join("tasks.txt"))
    }

    fn task(description: &str, priority: Option<u64>, due_date: Option<&str>) -> Task {
        Task {
            description: description.to_string(),
            priority,
            due_date: due_date.map(|d| d.to_string()),
            completed: false,
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        assert_eq!(store.load().expect("load"), Vec::new());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        let tasks = vec![
            task("Write report", Some(2), Some("2025-01-10")),
            task("Buy milk", None, None),
            Task {
                completed: true,
                ..task("Ship release", Some(0), None)
            },
        ];
        store.save(&tasks).expect("save");
        assert_eq!(store.load().expect("load"), tasks);
    }

    #[test]
    fn save_preserves_in_memory_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        // Deliberately not in sorted order; save must not re-sort.
        let tasks = vec![task("b", Some(9), None), task("a", Some(1), None)];
        store.save(&tasks).expect("save");
        let text = std::fs::read_to_string(store.path()).expect("read");
        assert_eq!(text, "b,9,,False\na,1,,False\n");
    }

    #[test]
    fn wrong_field_count_is_skipped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        std::fs::write(store.path(), "only,three,fields\nkeep,1,2025-02-01,False\n")
            .expect("write");
        let tasks = store.load().expect("load");
        assert_eq!(tasks, vec![task("keep", Some(1), Some("2025-02-01"))]);
    }

    #[test]
    fn completed_is_compared_literally() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        std::fs::write(store.path(), "a,,,True\nb,,,TRUE\nc,,,true\nd,,,False\n")
            .expect("write");
        let completed: Vec<bool> = store
            .load()
            .expect("load")
            .into_iter()
            .map(|t| t.completed)
            .collect();
        assert_eq!(completed, vec![true, false, false, false]);
    }

    #[test]
    fn empty_fields_load_as_absent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        std::fs::write(store.path(), "a,,,False\n").expect("write");
        assert_eq!(store.load().expect("load"), vec![task("a", None, None)]);
    }

    #[test]
    fn non_numeric_priority_field_drops_the_line() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        std::fs::write(store.path(), "bad,abc,,False\ngood,3,,False\n").expect("write");
        assert_eq!(store.load().expect("load"), vec![task("good", Some(3), None)]);
    }

    #[test]
    fn comma_in_description_corrupts_the_row() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        store
            .save(&[task("pack, then ship", Some(1), None)])
            .expect("save");
        // Five fields on reload: the row is dropped as malformed.
        assert_eq!(store.load().expect("load"), Vec::new());
    }

    #[test]
    fn unwritable_directory_is_a_reported_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = TaskStore::new(dir.path().join("no-such-dir").join("tasks.txt"));
        let err = store.save(&[task("a", None, None)]).unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
    }
}
