//! Core domain logic for the task list.
//! This crate is the single source of truth for task invariants.

pub mod logging;
pub mod model;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::task::{Task, TaskId, TaskState};
pub use store::{
    ActiveTarget, SharedTaskStore, StoreError, StoreErrorKind, StoreResult, TaskSnapshot,
    TaskStore,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
