//! In-memory task store and its error contract.
//!
//! # Responsibility
//! - Own the `active` and `completed` partitions.
//! - Expose the only mutation paths for tasks.
//!
//! # Invariants
//! - A task ID lives in exactly one partition from creation until deletion.
//! - Failed operations leave both partitions untouched.
//! - Store operations never log and never panic.

use crate::model::task::TaskId;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod shared;
mod task_store;

pub use shared::{SharedTaskStore, TaskSnapshot};
pub use task_store::{ActiveTarget, TaskStore};

pub type StoreResult<T> = Result<T, StoreError>;

/// Coarse classification of store failures for UI/FFI mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    InvalidInput,
    NotFound,
    Immutable,
}

impl StoreErrorKind {
    /// Stable snake_case code used across the FFI boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::NotFound => "not_found",
            Self::Immutable => "immutable",
        }
    }
}

/// Recoverable store error. State is unchanged whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Description was empty after trimming.
    EmptyDescription,
    /// No task with this ID in the partition the operation targets.
    TaskNotFound(TaskId),
    /// Position is past the end of `active`.
    PositionOutOfRange { position: usize, len: usize },
    /// Note edit attempted on a completed task.
    NoteFrozen(TaskId),
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            Self::EmptyDescription => StoreErrorKind::InvalidInput,
            Self::TaskNotFound(_) | Self::PositionOutOfRange { .. } => StoreErrorKind::NotFound,
            Self::NoteFrozen(_) => StoreErrorKind::Immutable,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "task description must not be blank"),
            Self::TaskNotFound(id) => write!(f, "active task not found: {id}"),
            Self::PositionOutOfRange { position, len } => write!(
                f,
                "active position {position} out of range for {len} task(s)"
            ),
            Self::NoteFrozen(id) => write!(f, "note is read-only for completed task: {id}"),
        }
    }
}

impl Error for StoreError {}
