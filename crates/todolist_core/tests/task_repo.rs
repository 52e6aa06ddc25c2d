use todolist_core::{KeyValueStore, MemoryStore, StorageKeys, TaskRepository, TaskStatus};

const EMAIL: &str = "ada@example.com";
const KEY: &str = "tasks_ada@example.com";

fn loaded_repo(store: &MemoryStore) -> TaskRepository<'_, MemoryStore> {
    let mut repo = TaskRepository::new(store, StorageKeys::default());
    repo.load_tasks(EMAIL).unwrap();
    repo
}

#[test]
fn added_task_round_trips_through_a_fresh_repository() {
    let store = MemoryStore::new();
    let added = {
        let mut repo = loaded_repo(&store);
        repo.add_task("buy milk", "2024-01-01").unwrap().unwrap()
    };

    let repo = loaded_repo(&store);
    assert_eq!(repo.tasks().to_vec(), vec![added.clone()]);
    assert_eq!(added.text, "buy milk");
    assert_eq!(added.date, "2024-01-01");
    assert_eq!(added.status, TaskStatus::Pending);
}

#[test]
fn stored_collection_uses_the_web_client_wire_format() {
    let store = MemoryStore::new();
    let mut repo = loaded_repo(&store);
    let task = repo.add_task("buy milk", "2024-01-01").unwrap().unwrap();

    let raw = store.get(KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "id": task.id,
            "text": "buy milk",
            "date": "2024-01-01",
            "completed": false,
            "inProgress": false
        }])
    );
}

#[test]
fn blank_text_is_a_silent_no_op() {
    let store = MemoryStore::new();
    let mut repo = loaded_repo(&store);

    assert!(repo.add_task("   ", "2024-01-01").unwrap().is_none());
    assert!(repo.tasks().is_empty());
    assert_eq!(store.write_count(), 0);
}

#[test]
fn add_without_loaded_user_does_nothing() {
    let store = MemoryStore::new();
    let mut repo = TaskRepository::new(&store, StorageKeys::default());

    assert!(repo.add_task("orphan", "2024-01-01").unwrap().is_none());
    assert_eq!(store.write_count(), 0);
}

#[test]
fn insertion_order_is_preserved_and_ids_increase() {
    let store = MemoryStore::new();
    let mut repo = loaded_repo(&store);
    for text in ["one", "two", "three"] {
        repo.add_task(text, "2024-01-01").unwrap();
    }

    let texts: Vec<_> = repo.tasks().iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, vec!["one", "two", "three"]);
    assert!(repo.tasks().windows(2).all(|pair| pair[0].id < pair[1].id));
}

#[test]
fn new_ids_sort_after_loaded_ids() {
    let store = MemoryStore::new();
    let far_future = i64::MAX / 2;
    store
        .set(
            KEY,
            &format!(
                r#"[{{"id":{far_future},"text":"old","date":"2024-01-01","completed":false,"inProgress":false}}]"#
            ),
        )
        .unwrap();

    let mut repo = loaded_repo(&store);
    let task = repo.add_task("new", "2024-01-01").unwrap().unwrap();
    assert!(task.id > far_future);
}

#[test]
fn saving_twice_without_mutation_is_idempotent() {
    let store = MemoryStore::new();
    let mut repo = loaded_repo(&store);
    repo.add_task("a", "2024-01-01").unwrap();

    repo.save_tasks().unwrap();
    let first = store.get(KEY).unwrap();
    repo.save_tasks().unwrap();
    let second = store.get(KEY).unwrap();
    assert_eq!(first, second);
}

#[test]
fn toggle_cycles_through_in_progress_and_completed() {
    let store = MemoryStore::new();
    let mut repo = loaded_repo(&store);
    let id = repo.add_task("cycle", "2024-01-01").unwrap().unwrap().id;

    assert_eq!(repo.toggle_status(id).unwrap(), Some(TaskStatus::InProgress));
    assert_eq!(repo.toggle_status(id).unwrap(), Some(TaskStatus::Completed));
    assert_eq!(repo.toggle_status(id).unwrap(), Some(TaskStatus::Pending));

    let reloaded = loaded_repo(&store);
    assert_eq!(reloaded.get(id).unwrap().status, TaskStatus::Pending);
}

#[test]
fn toggle_of_unknown_id_does_not_write() {
    let store = MemoryStore::new();
    let mut repo = loaded_repo(&store);
    repo.add_task("a", "2024-01-01").unwrap();
    let writes = store.write_count();

    assert_eq!(repo.toggle_status(-1).unwrap(), None);
    assert_eq!(store.write_count(), writes);
}

#[test]
fn delete_of_unknown_id_still_persists() {
    let store = MemoryStore::new();
    let mut repo = loaded_repo(&store);
    repo.add_task("keep", "2024-01-01").unwrap();
    let before = repo.tasks().to_vec();
    let writes = store.write_count();

    assert!(!repo.delete_task(-1).unwrap());
    assert_eq!(repo.tasks(), before.as_slice());
    assert_eq!(store.write_count(), writes + 1);
}

#[test]
fn delete_removes_the_task_from_storage() {
    let store = MemoryStore::new();
    let mut repo = loaded_repo(&store);
    let gone = repo.add_task("gone", "2024-01-01").unwrap().unwrap();
    repo.add_task("kept", "2024-01-01").unwrap();

    assert!(repo.delete_task(gone.id).unwrap());

    let reloaded = loaded_repo(&store);
    assert!(reloaded.get(gone.id).is_none());
    assert_eq!(reloaded.tasks().len(), 1);
}

#[test]
fn corrupt_collection_loads_as_empty() {
    let store = MemoryStore::new();
    store.set(KEY, "{not json").unwrap();

    let mut repo = TaskRepository::new(&store, StorageKeys::default());
    assert_eq!(repo.load_tasks(EMAIL).unwrap(), 0);
    assert_eq!(repo.owner(), Some(EMAIL));
}

#[test]
fn conflicting_status_flags_load_as_empty() {
    let store = MemoryStore::new();
    store
        .set(
            KEY,
            r#"[{"id":1,"text":"x","date":"2024-01-01","completed":true,"inProgress":true}]"#,
        )
        .unwrap();

    let repo = loaded_repo(&store);
    assert!(repo.tasks().is_empty());
}

#[test]
fn clear_keeps_storage_and_stops_writes() {
    let store = MemoryStore::new();
    let mut repo = loaded_repo(&store);
    repo.add_task("a", "2024-01-01").unwrap();
    let stored = store.get(KEY).unwrap();

    repo.clear();
    assert!(repo.tasks().is_empty());
    assert_eq!(repo.owner(), None);
    repo.save_tasks().unwrap();
    assert_eq!(store.get(KEY).unwrap(), stored);
}
