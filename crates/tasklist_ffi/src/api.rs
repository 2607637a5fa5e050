//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the task store contract to Dart via FRB.
//! - Own the process-wide store and the shell's view state.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Task IDs cross the boundary as UUID strings; malformed IDs map to
//!   `not_found`.
//! - Logs carry IDs and error codes only, never task text.

use crate::shell::{ShellView, ViewMode};
use log::debug;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use tasklist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    ActiveTarget, SharedTaskStore, StoreError, StoreErrorKind, Task, TaskId,
};
use uuid::Uuid;

static TASK_STORE: OnceLock<SharedTaskStore> = OnceLock::new();
static SHELL_VIEW: OnceLock<Mutex<ShellView>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Task row rendered by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    /// Stable task ID in string form.
    pub task_id: String,
    pub description: String,
    /// Due timestamp in Unix epoch milliseconds.
    pub due_epoch_ms: i64,
    pub note: String,
    pub completed: bool,
}

/// Result envelope for every mutating call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Affected task ID, when one exists.
    pub task_id: Option<String>,
    /// `invalid_input|not_found|immutable` on failure.
    pub error_code: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl TaskActionResponse {
    fn success(message: impl Into<String>, task_id: Option<TaskId>) -> Self {
        Self {
            ok: true,
            task_id: task_id.map(|id| id.to_string()),
            error_code: None,
            message: message.into(),
        }
    }

    fn failure(op: &str, err: &StoreError) -> Self {
        let code = err.kind().as_str();
        debug!("event=task_{op} module=ffi status=rejected code={code}");
        Self {
            ok: false,
            task_id: None,
            error_code: Some(code.to_string()),
            message: format!("task_{op} failed: {err}"),
        }
    }

    fn malformed_id(op: &str, raw: &str) -> Self {
        let code = StoreErrorKind::NotFound.as_str();
        debug!("event=task_{op} module=ffi status=rejected code={code} reason=malformed_id");
        Self {
            ok: false,
            task_id: None,
            error_code: Some(code.to_string()),
            message: format!("task_{op} failed: malformed task id `{}`", raw.trim()),
        }
    }
}

/// Sets the due date used by the next `task_create`.
#[flutter_rust_bridge::frb(sync)]
pub fn set_selected_due(epoch_ms: i64) {
    shell_view().selected_due = epoch_ms;
}

/// Returns the due date currently selected in the shell.
#[flutter_rust_bridge::frb(sync)]
pub fn selected_due() -> i64 {
    shell_view().selected_due
}

/// Returns `active` or `completed`.
#[flutter_rust_bridge::frb(sync)]
pub fn view_mode() -> String {
    shell_view().mode.label().to_string()
}

/// Switches between active and completed views; returns the new mode.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_view_mode() -> String {
    let mode: ViewMode = shell_view().toggle_mode();
    debug!("event=view_toggle module=ffi status=ok mode={}", mode.label());
    mode.label().to_string()
}

/// Creates a task due at the currently selected date.
///
/// # FFI contract
/// - Blank descriptions return `invalid_input` and create nothing.
/// - Returns the created task ID on success.
#[flutter_rust_bridge::frb(sync)]
pub fn task_create(description: String) -> TaskActionResponse {
    let due = selected_due();
    match task_store().create(description, due) {
        Ok(id) => {
            debug!("event=task_create module=ffi status=ok task_id={id}");
            TaskActionResponse::success("Task created.", Some(id))
        }
        Err(err) => TaskActionResponse::failure("create", &err),
    }
}

/// Marks an active task completed and moves it to the completed list.
#[flutter_rust_bridge::frb(sync)]
pub fn task_toggle_complete(task_id: String) -> TaskActionResponse {
    let Some(id) = parse_task_id(&task_id) else {
        return TaskActionResponse::malformed_id("toggle_complete", &task_id);
    };
    match task_store().toggle_complete(id) {
        Ok(()) => {
            debug!("event=task_toggle_complete module=ffi status=ok task_id={id}");
            TaskActionResponse::success("Task completed.", Some(id))
        }
        Err(err) => TaskActionResponse::failure("toggle_complete", &err),
    }
}

/// Replaces the note of an active task. Completed tasks return `immutable`.
#[flutter_rust_bridge::frb(sync)]
pub fn task_set_note(task_id: String, note: String) -> TaskActionResponse {
    let Some(id) = parse_task_id(&task_id) else {
        return TaskActionResponse::malformed_id("set_note", &task_id);
    };
    match task_store().set_note(id, note) {
        Ok(()) => {
            debug!("event=task_set_note module=ffi status=ok task_id={id}");
            TaskActionResponse::success("Note saved.", Some(id))
        }
        Err(err) => TaskActionResponse::failure("set_note", &err),
    }
}

/// Discards an active task by ID.
#[flutter_rust_bridge::frb(sync)]
pub fn task_delete(task_id: String) -> TaskActionResponse {
    let Some(id) = parse_task_id(&task_id) else {
        return TaskActionResponse::malformed_id("delete", &task_id);
    };
    delete_active(ActiveTarget::Id(id))
}

/// Discards the active task at a zero-based list position.
#[flutter_rust_bridge::frb(sync)]
pub fn task_delete_at(position: u32) -> TaskActionResponse {
    delete_active(ActiveTarget::Position(position as usize))
}

/// Empties the completed list.
#[flutter_rust_bridge::frb(sync)]
pub fn completed_clear() -> TaskActionResponse {
    let cleared = task_store().clear_completed();
    debug!("event=completed_clear module=ffi status=ok cleared={cleared}");
    TaskActionResponse::success(format!("Cleared {cleared} completed task(s)."), None)
}

/// Tasks for the current view mode, in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_visible() -> Vec<TaskItem> {
    let view = shell_view().clone();
    to_task_items(view.visible_tasks(task_store()))
}

/// Active tasks in insertion order.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_active() -> Vec<TaskItem> {
    to_task_items(task_store().list_active())
}

/// Completed tasks in completion order.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_completed() -> Vec<TaskItem> {
    to_task_items(task_store().list_completed())
}

fn delete_active(target: ActiveTarget) -> TaskActionResponse {
    match task_store().delete_active(target) {
        Ok(task) => {
            debug!(
                "event=task_delete module=ffi status=ok task_id={}",
                task.id()
            );
            TaskActionResponse::success("Task deleted.", Some(task.id()))
        }
        Err(err) => TaskActionResponse::failure("delete", &err),
    }
}

fn task_store() -> &'static SharedTaskStore {
    TASK_STORE.get_or_init(SharedTaskStore::new)
}

fn shell_view() -> MutexGuard<'static, ShellView> {
    SHELL_VIEW
        .get_or_init(|| Mutex::new(ShellView::default()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn parse_task_id(raw: &str) -> Option<TaskId> {
    Uuid::parse_str(raw.trim()).ok()
}

fn to_task_items(tasks: Vec<Task>) -> Vec<TaskItem> {
    tasks
        .into_iter()
        .map(|task| TaskItem {
            task_id: task.id().to_string(),
            description: task.description().to_string(),
            due_epoch_ms: task.due_at(),
            note: task.note().to_string(),
            completed: task.is_completed(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        completed_clear, core_version, init_logging, ping, selected_due, set_selected_due,
        task_create, task_delete, task_delete_at, task_set_note, task_toggle_complete,
        tasks_active, tasks_completed, tasks_visible, toggle_view_mode, view_mode,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn task_create_rejects_blank_description() {
        let response = task_create("   ".to_string());
        assert!(!response.ok);
        assert_eq!(response.error_code.as_deref(), Some("invalid_input"));
        assert!(response.task_id.is_none());
        assert!(tasks_active()
            .iter()
            .all(|item| !item.description.trim().is_empty()));
    }

    #[test]
    fn completed_task_note_is_immutable() {
        let token = unique_token("immutable");
        let created = task_create(token.clone());
        assert!(created.ok, "{}", created.message);
        let task_id = created.task_id.expect("create should return task_id");

        let noted = task_set_note(task_id.clone(), "first".to_string());
        assert!(noted.ok, "{}", noted.message);

        let completed = task_toggle_complete(task_id.clone());
        assert!(completed.ok, "{}", completed.message);
        assert!(!tasks_active().iter().any(|item| item.task_id == task_id));

        let rejected = task_set_note(task_id.clone(), "second".to_string());
        assert!(!rejected.ok);
        assert_eq!(rejected.error_code.as_deref(), Some("immutable"));

        let item = tasks_completed()
            .into_iter()
            .find(|item| item.task_id == task_id);
        // A concurrent `completed_clear` test may have removed it already.
        if let Some(item) = item {
            assert_eq!(item.note, "first");
            assert!(item.completed);
            assert_eq!(item.description, token);
        }
    }

    #[test]
    fn malformed_id_maps_to_not_found() {
        let response = task_toggle_complete("not-a-uuid".to_string());
        assert!(!response.ok);
        assert_eq!(response.error_code.as_deref(), Some("not_found"));

        let response = task_delete(String::new());
        assert_eq!(response.error_code.as_deref(), Some("not_found"));
    }

    #[test]
    fn task_delete_removes_active_task() {
        let created = task_create(unique_token("delete"));
        let task_id = created.task_id.expect("create should return task_id");

        let deleted = task_delete(task_id.clone());
        assert!(deleted.ok, "{}", deleted.message);
        assert!(!tasks_active().iter().any(|item| item.task_id == task_id));

        let again = task_delete(task_id);
        assert_eq!(again.error_code.as_deref(), Some("not_found"));
    }

    #[test]
    fn task_delete_at_out_of_range_is_not_found() {
        let response = task_delete_at(u32::MAX);
        assert!(!response.ok);
        assert_eq!(response.error_code.as_deref(), Some("not_found"));
    }

    #[test]
    fn completed_clear_reports_success() {
        let response = completed_clear();
        assert!(response.ok);
        assert!(response.message.starts_with("Cleared"));
    }

    #[test]
    fn toggle_view_mode_flips_visible_list() {
        assert_eq!(view_mode(), "active");
        assert_eq!(toggle_view_mode(), "completed");
        assert!(tasks_visible().iter().all(|item| item.completed));
        assert_eq!(toggle_view_mode(), "active");
        assert!(tasks_visible().iter().all(|item| !item.completed));
    }

    #[test]
    fn selected_due_round_trips() {
        set_selected_due(1_767_225_600_000);
        assert_eq!(selected_due(), 1_767_225_600_000);
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
