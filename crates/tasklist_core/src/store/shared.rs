//! Thread-safe handle over one `TaskStore`.
//!
//! # Invariants
//! - Every operation takes the lock exactly once.
//! - Read operations return owned clones; no lock guard escapes.

use crate::model::task::{Task, TaskId, TaskState};
use crate::store::{ActiveTarget, StoreResult, TaskStore};
use std::sync::{Arc, Mutex, PoisonError};

/// Point-in-time copy of both partitions taken under one lock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskSnapshot {
    pub active: Vec<Task>,
    pub completed: Vec<Task>,
}

/// Cloneable, mutex-guarded task store for multi-threaded embeddings.
#[derive(Debug, Clone, Default)]
pub struct SharedTaskStore {
    inner: Arc<Mutex<TaskStore>>,
}

impl SharedTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_store(store: TaskStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn create(&self, description: impl AsRef<str>, due_at: i64) -> StoreResult<TaskId> {
        self.with_store(|store| store.create(description, due_at))
    }

    pub fn toggle_complete(&self, id: TaskId) -> StoreResult<()> {
        self.with_store(|store| store.toggle_complete(id))
    }

    pub fn set_note(&self, id: TaskId, text: impl Into<String>) -> StoreResult<()> {
        self.with_store(|store| store.set_note(id, text))
    }

    pub fn delete_active(&self, target: ActiveTarget) -> StoreResult<Task> {
        self.with_store(|store| store.delete_active(target))
    }

    pub fn clear_completed(&self) -> usize {
        self.with_store(TaskStore::clear_completed)
    }

    pub fn list_active(&self) -> Vec<Task> {
        self.with_store(|store| store.list_active().to_vec())
    }

    pub fn list_completed(&self) -> Vec<Task> {
        self.with_store(|store| store.list_completed().to_vec())
    }

    pub fn get(&self, id: TaskId) -> Option<Task> {
        self.with_store(|store| store.get(id).cloned())
    }

    pub fn locate(&self, id: TaskId) -> Option<TaskState> {
        self.with_store(|store| store.locate(id))
    }

    /// Copies both partitions under a single lock acquisition.
    pub fn snapshot(&self) -> TaskSnapshot {
        self.with_store(|store| TaskSnapshot {
            active: store.list_active().to_vec(),
            completed: store.list_completed().to_vec(),
        })
    }

    fn with_store<T>(&self, f: impl FnOnce(&mut TaskStore) -> T) -> T {
        // Store operations validate before mutating, so a poisoned guard still
        // holds consistent partitions.
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}
