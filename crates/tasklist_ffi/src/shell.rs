//! Shell-owned view state.
//!
//! # Responsibility
//! - Hold the date-picker selection and active/completed view mode.
//! - Keep presentation state out of the core store.
//!
//! # Invariants
//! - View mode is always one of `active|completed`.
//! - Selected due date defaults to process start time.

use std::time::{SystemTime, UNIX_EPOCH};
use tasklist_core::{SharedTaskStore, Task};

/// Which partition the shell is currently rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Active,
    Completed,
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Completed,
            Self::Completed => Self::Active,
        }
    }
}

/// Presentation state the shell passes alongside store calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellView {
    pub mode: ViewMode,
    /// Unix epoch milliseconds currently chosen in the date picker.
    pub selected_due: i64,
}

impl Default for ShellView {
    fn default() -> Self {
        Self {
            mode: ViewMode::default(),
            selected_due: now_epoch_ms(),
        }
    }
}

impl ShellView {
    /// Flips the view mode and returns the new one.
    pub fn toggle_mode(&mut self) -> ViewMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Tasks the current mode renders.
    pub fn visible_tasks(&self, store: &SharedTaskStore) -> Vec<Task> {
        match self.mode {
            ViewMode::Active => store.list_active(),
            ViewMode::Completed => store.list_completed(),
        }
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{ShellView, ViewMode};
    use tasklist_core::SharedTaskStore;

    #[test]
    fn default_view_is_active_with_current_due_date() {
        let view = ShellView::default();
        assert_eq!(view.mode, ViewMode::Active);
        assert!(view.selected_due > 0);
    }

    #[test]
    fn toggle_mode_switches_visible_partition() {
        let store = SharedTaskStore::new();
        let done = store.create("done", 1).unwrap();
        store.create("open", 2).unwrap();
        store.toggle_complete(done).unwrap();

        let mut view = ShellView::default();
        assert_eq!(view.visible_tasks(&store)[0].description(), "open");

        assert_eq!(view.toggle_mode(), ViewMode::Completed);
        assert_eq!(view.visible_tasks(&store)[0].description(), "done");

        assert_eq!(view.toggle_mode(), ViewMode::Active);
        assert_eq!(view.mode.label(), "active");
    }
}
