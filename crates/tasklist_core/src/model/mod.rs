//! Task list domain model.
//!
//! # Responsibility
//! - Define the task record shared by active and completed partitions.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Deletion is a hard delete performed by the store, never a flag.

pub mod task;
