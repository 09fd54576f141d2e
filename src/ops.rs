//! Task operations: the mutating commands behind the presentation shell.
//!
//! `TaskList` owns the in-memory collection and its store. Every successful
//! mutation ends with an unconditional save of the whole collection; a
//! failed operation leaves both memory and disk untouched. All operations
//! are synchronous and single-threaded; exactly one process instance is
//! assumed to own the backing file.

use thiserror::Error;

use crate::order;
use crate::store::{StoreError, TaskStore};
use crate::task::{self, Task, TaskError};

/// Errors reported by task operations.
///
/// Everything except `Store` is recoverable: the offending operation is
/// blocked and all state is unchanged. Persistence failures propagate; they
/// are never swallowed.
#[derive(Debug, Error)]
pub enum OpError {
    #[error("Task description cannot be empty")]
    EmptyDescription,

    #[error("No task selected")]
    NothingSelected,

    #[error("Selected row {index} is out of range ({len} tasks)")]
    SelectionOutOfRange { index: usize, len: usize },

    #[error("Priority must be a number")]
    PriorityNotNumeric,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<TaskError> for OpError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::EmptyDescription => OpError::EmptyDescription,
        }
    }
}

/// The task collection plus its store, owned by the composition root.
pub struct TaskList {
    store: TaskStore,
    tasks: Vec<Task>,
}

impl TaskList {
    /// Load the collection from the store's backing file.
    pub fn open(store: TaskStore) -> Result<Self, StoreError> {
        let tasks = store.load()?;
        Ok(Self { store, tasks })
    }

    /// The current collection in display order.
    ///
    /// Recomputed on every call from the live collection. Selection indices
    /// passed to the mutating operations are zero-based positions in this
    /// view; between user actions the collection does not change, so a
    /// fresh sort here always equals the last-rendered order.
    pub fn view(&self) -> Vec<Task> {
        order::sorted(&self.tasks)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a new pending task built from raw user-entered text.
    ///
    /// Non-numeric priority text silently becomes "no priority"; the
    /// due-date text is accepted verbatim. Only an empty description is an
    /// error.
    pub fn add(
        &mut self,
        description: &str,
        priority_text: &str,
        due_date_text: &str,
    ) -> Result<(), OpError> {
        let new_task = Task::new(description, priority_text, due_date_text)?;
        self.tasks.push(new_task);
        self.store.save(&self.tasks)?;
        Ok(())
    }

    /// Mark the selected task completed.
    ///
    /// The ordered view at the moment of mutation becomes the new canonical
    /// storage order.
    pub fn complete(&mut self, selection: Option<usize>) -> Result<(), OpError> {
        let (index, mut ordered) = self.resolve(selection)?;
        ordered[index].completed = true;
        self.replace_with(ordered)
    }

    /// Remove the selected task.
    ///
    /// Removes the first structurally equal occurrence from the underlying
    /// collection. With duplicate tasks this may remove a different but
    /// indistinguishable copy; tasks deliberately carry no identity beyond
    /// their four attributes.
    pub fn remove(&mut self, selection: Option<usize>) -> Result<(), OpError> {
        let (index, ordered) = self.resolve(selection)?;
        let target = &ordered[index];
        if let Some(position) = self.tasks.iter().position(|t| t == target) {
            self.tasks.remove(position);
        }
        self.store.save(&self.tasks)?;
        Ok(())
    }

    /// Overwrite the selected task's priority.
    ///
    /// Unlike `add`, non-numeric priority text here is a reported error
    /// rather than a silent "no priority".
    pub fn modify_priority(
        &mut self,
        selection: Option<usize>,
        priority_text: &str,
    ) -> Result<(), OpError> {
        if selection.is_none() {
            return Err(OpError::NothingSelected);
        }
        let priority = task::parse_priority(priority_text).ok_or(OpError::PriorityNotNumeric)?;
        let (index, mut ordered) = self.resolve(selection)?;
        ordered[index].priority = Some(priority);
        self.replace_with(ordered)
    }

    /// Overwrite the selected task's due date. Empty text clears it; any
    /// non-empty text is accepted verbatim.
    pub fn modify_due_date(
        &mut self,
        selection: Option<usize>,
        due_date_text: &str,
    ) -> Result<(), OpError> {
        let (index, mut ordered) = self.resolve(selection)?;
        let due_date = due_date_text.trim();
        ordered[index].due_date = (!due_date.is_empty()).then(|| due_date.to_string());
        self.replace_with(ordered)
    }

    /// Resolve a selected position against a freshly computed ordered view.
    fn resolve(&self, selection: Option<usize>) -> Result<(usize, Vec<Task>), OpError> {
        let index = selection.ok_or(OpError::NothingSelected)?;
        let ordered = self.view();
        if index >= ordered.len() {
            return Err(OpError::SelectionOutOfRange {
                index,
                len: ordered.len(),
            });
        }
        Ok((index, ordered))
    }

    /// Adopt an ordered-and-mutated view as the new canonical collection
    /// and persist it.
    fn replace_with(&mut self, ordered: Vec<Task>) -> Result<(), OpError> {
        self.tasks = ordered;
        self.store.save(&self.tasks)?;
        Ok(())
    }
}
