//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tasklist_core` linkage.
//! - Run one fixed task scenario with deterministic output.
//!
//! Set `TASKLIST_LOG_DIR` (absolute) to write logs; `TASKLIST_LOG_LEVEL`
//! overrides the build-mode default level.

use std::process::ExitCode;
use tasklist_core::{default_log_level, init_logging, StoreResult, Task, TaskStore};

const SAMPLE_DUE: i64 = 1_767_225_600_000;

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var("TASKLIST_LOG_DIR") {
        let level = std::env::var("TASKLIST_LOG_LEVEL")
            .unwrap_or_else(|_| default_log_level().as_str().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
            return ExitCode::FAILURE;
        }
    }

    println!("tasklist_core ping={}", tasklist_core::ping());
    println!("tasklist_core version={}", tasklist_core::core_version());

    let mut store = TaskStore::new();
    if let Err(err) = run_scenario(&mut store) {
        eprintln!("scenario failed: {err}");
        return ExitCode::FAILURE;
    }

    print_tasks("active", store.list_active());
    print_tasks("completed", store.list_completed());
    ExitCode::SUCCESS
}

fn run_scenario(store: &mut TaskStore) -> StoreResult<()> {
    let milk = store.create("Buy milk", SAMPLE_DUE)?;
    let bob = store.create("Call Bob", SAMPLE_DUE)?;
    store.set_note(bob, "ask about the weekend")?;
    store.toggle_complete(milk)?;
    if let Err(err) = store.set_note(milk, "ignored") {
        println!("rejected code={} reason={err}", err.kind().as_str());
    }
    Ok(())
}

fn print_tasks(label: &str, tasks: &[Task]) {
    println!("{label}={}", tasks.len());
    for task in tasks {
        println!(
            "  - {} due={} note={:?}",
            task.description(),
            task.due_at(),
            task.note()
        );
    }
}
