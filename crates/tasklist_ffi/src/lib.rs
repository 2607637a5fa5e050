//! Flutter-facing bindings for the task list core.

pub mod api;
pub mod shell;
