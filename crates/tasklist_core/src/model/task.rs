//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record rendered by active/completed views.
//! - Normalize creation input before a task enters the store.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `description` is never blank.
//! - `due_at` is fixed at creation; no API changes it.
//! - `completed` flips from `false` to `true` at most once.

use serde::Serialize;
use uuid::Uuid;

/// Stable identifier for one task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Which store partition currently holds a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    /// Not yet completed; note is mutable.
    Active,
    /// Completed; note is frozen.
    Completed,
}

/// One to-do entry.
///
/// Fields are read-only outside the crate. Mutation happens through
/// [`crate::TaskStore`] operations only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    description: String,
    /// Unix epoch milliseconds, taken from the shell's date picker.
    due_at: i64,
    note: String,
    completed: bool,
}

impl Task {
    /// Builds a fresh active task with a generated ID and an empty note.
    ///
    /// Callers must pass a description already checked by
    /// [`normalize_description`].
    pub(crate) fn new(description: String, due_at: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            description,
            due_at,
            note: String::new(),
            completed: false,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Due timestamp in Unix epoch milliseconds.
    pub fn due_at(&self) -> i64 {
        self.due_at
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn state(&self) -> TaskState {
        if self.completed {
            TaskState::Completed
        } else {
            TaskState::Active
        }
    }

    pub(crate) fn replace_note(&mut self, text: String) {
        self.note = text;
    }

    pub(crate) fn mark_completed(&mut self) {
        self.completed = true;
    }
}

/// Trims task description input.
///
/// Returns `None` when nothing but whitespace was provided.
pub fn normalize_description(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}
