use std::collections::HashSet;
use std::thread;
use tasklist_core::{ActiveTarget, SharedTaskStore, StoreErrorKind, TaskId, TaskState};

#[test]
fn concurrent_creates_and_completions_keep_partitions_disjoint() {
    let store = SharedTaskStore::new();
    let workers: Vec<_> = (0..8)
        .map(|worker| {
            let store = store.clone();
            thread::spawn(move || {
                let mut ids = Vec::new();
                for index in 0..50 {
                    let id = store
                        .create(format!("worker {worker} task {index}"), index)
                        .unwrap();
                    if index % 2 == 0 {
                        store.toggle_complete(id).unwrap();
                    }
                    ids.push(id);
                }
                ids
            })
        })
        .collect();

    let mut all_ids = HashSet::new();
    for worker in workers {
        for id in worker.join().expect("worker thread should not panic") {
            assert!(all_ids.insert(id), "ids must be unique");
        }
    }

    let snapshot = store.snapshot();
    assert_eq!(snapshot.active.len(), 200);
    assert_eq!(snapshot.completed.len(), 200);

    let active: HashSet<TaskId> = snapshot.active.iter().map(|task| task.id()).collect();
    let completed: HashSet<TaskId> = snapshot.completed.iter().map(|task| task.id()).collect();
    assert!(active.is_disjoint(&completed));
    assert_eq!(active.len() + completed.len(), all_ids.len());
}

#[test]
fn racing_completions_of_one_task_succeed_once() {
    let store = SharedTaskStore::new();
    let id = store.create("contended", 0).unwrap();

    let results: Vec<_> = (0..8)
        .map(|_| {
            let store = store.clone();
            thread::spawn(move || store.toggle_complete(id))
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|handle| handle.join().expect("thread should not panic"))
        .collect();

    let successes = results.iter().filter(|result| result.is_ok()).count();
    assert_eq!(successes, 1);
    assert!(results
        .iter()
        .filter_map(|result| result.as_ref().err())
        .all(|err| err.kind() == StoreErrorKind::NotFound));
    assert_eq!(store.locate(id), Some(TaskState::Completed));
    assert_eq!(store.list_completed().len(), 1);
}

#[test]
fn shared_handle_exposes_full_contract() {
    let store = SharedTaskStore::new();
    let keep = store.create("keep", 1).unwrap();
    let drop = store.create("drop", 2).unwrap();

    store.set_note(keep, "kept").unwrap();
    let removed = store.delete_active(ActiveTarget::Id(drop)).unwrap();
    assert_eq!(removed.description(), "drop");

    store.toggle_complete(keep).unwrap();
    assert_eq!(
        store.set_note(keep, "late").unwrap_err().kind(),
        StoreErrorKind::Immutable
    );
    assert_eq!(store.get(keep).map(|task| task.note().to_string()), Some("kept".to_string()));

    assert_eq!(store.clear_completed(), 1);
    assert!(store.list_active().is_empty());
    assert!(store.list_completed().is_empty());
}
