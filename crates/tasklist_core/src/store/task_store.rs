//! Single-owner task store.
//!
//! # Responsibility
//! - Create, complete, annotate and delete tasks.
//! - Keep `active` in insertion order and `completed` in completion order.
//!
//! # Invariants
//! - `toggle_complete` is the only path into `completed`, and it moves the
//!   task in one `&mut self` call so no caller sees it in both or neither.
//! - Notes are editable only in `active`.
//! - Nothing leaves `completed` except through `clear_completed`.

use crate::model::task::{normalize_description, Task, TaskId, TaskState};
use crate::store::{StoreError, StoreResult};

/// Addresses one task in the `active` partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTarget {
    /// Stable task ID.
    Id(TaskId),
    /// Zero-based index into `list_active()`.
    Position(usize),
}

/// In-memory owner of both task partitions.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    active: Vec<Task>,
    completed: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new task to the end of `active`.
    ///
    /// # Contract
    /// - `description` is trimmed; blank input returns
    ///   `StoreError::EmptyDescription` and creates nothing.
    /// - New task has an empty note and `completed = false`.
    pub fn create(&mut self, description: impl AsRef<str>, due_at: i64) -> StoreResult<TaskId> {
        let description =
            normalize_description(description.as_ref()).ok_or(StoreError::EmptyDescription)?;
        let task = Task::new(description, due_at);
        let id = task.id();
        self.active.push(task);
        Ok(id)
    }

    /// Moves an active task to the end of `completed`.
    ///
    /// Returns `TaskNotFound` for unknown IDs and for tasks that are already
    /// completed; completion cannot be undone.
    pub fn toggle_complete(&mut self, id: TaskId) -> StoreResult<()> {
        let position = self
            .active_position(id)
            .ok_or(StoreError::TaskNotFound(id))?;
        let mut task = self.active.remove(position);
        task.mark_completed();
        self.completed.push(task);
        Ok(())
    }

    /// Replaces the note of an active task verbatim.
    ///
    /// Empty `text` clears the note. Completed tasks return `NoteFrozen`.
    pub fn set_note(&mut self, id: TaskId, text: impl Into<String>) -> StoreResult<()> {
        if let Some(task) = self.active.iter_mut().find(|task| task.id() == id) {
            task.replace_note(text.into());
            return Ok(());
        }
        if self.completed.iter().any(|task| task.id() == id) {
            return Err(StoreError::NoteFrozen(id));
        }
        Err(StoreError::TaskNotFound(id))
    }

    /// Permanently removes one task from `active` and returns it.
    ///
    /// Completed tasks are not reachable here; use `clear_completed`.
    pub fn delete_active(&mut self, target: ActiveTarget) -> StoreResult<Task> {
        let position = match target {
            ActiveTarget::Id(id) => self
                .active_position(id)
                .ok_or(StoreError::TaskNotFound(id))?,
            ActiveTarget::Position(position) => {
                if position >= self.active.len() {
                    return Err(StoreError::PositionOutOfRange {
                        position,
                        len: self.active.len(),
                    });
                }
                position
            }
        };
        Ok(self.active.remove(position))
    }

    /// Drops every completed task. Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let cleared = self.completed.len();
        self.completed.clear();
        cleared
    }

    /// Active tasks in insertion order.
    pub fn list_active(&self) -> &[Task] {
        &self.active
    }

    /// Completed tasks in completion order.
    pub fn list_completed(&self) -> &[Task] {
        &self.completed
    }

    /// Finds a task in either partition.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.active
            .iter()
            .chain(self.completed.iter())
            .find(|task| task.id() == id)
    }

    /// Reports which partition holds `id`, if any.
    pub fn locate(&self, id: TaskId) -> Option<TaskState> {
        self.get(id).map(Task::state)
    }

    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    pub fn completed_len(&self) -> usize {
        self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.completed.is_empty()
    }

    fn active_position(&self, id: TaskId) -> Option<usize> {
        self.active.iter().position(|task| task.id() == id)
    }
}
