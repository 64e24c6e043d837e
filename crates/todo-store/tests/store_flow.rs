use pretty_assertions::assert_eq;
use todo_store::repository::TaskRepository;
use todo_store::{
    ActionOutcome, FilterMode, MemoryStorage, SlotStorage, StoreConfig, TaskAction, TaskRecord, TodoStore,
};

fn stored_records<S: SlotStorage>(store: &TodoStore<S>) -> Vec<TaskRecord> {
    TaskRepository::new("tasks").load(store.storage())
}

fn assert_mirrored<S: SlotStorage>(store: &TodoStore<S>) {
    assert_eq!(stored_records(store), store.list().snapshot());
}

#[test]
fn storage_mirrors_collection_after_every_action() {
    let mut store = TodoStore::open(MemoryStorage::new(), &StoreConfig::default());

    for text in ["Buy milk", "Walk dog", "File taxes", "Call mom"] {
        assert_eq!(store.dispatch(TaskAction::Add(text.to_string())), ActionOutcome::Saved);
        assert_mirrored(&store);
    }

    let ids: Vec<_> = store.list().iter().map(|task| task.id).collect();

    let script = vec![
        TaskAction::ToggleComplete(ids[1]),
        TaskAction::SetFilter(FilterMode::Active),
        TaskAction::Edit {
            id: ids[1],
            replacement: Some("Walk the dog".to_string()),
        },
        TaskAction::Edit {
            id: ids[0],
            replacement: None,
        },
        TaskAction::Delete(ids[2]),
        TaskAction::Add(String::new()),
        TaskAction::SetFilter(FilterMode::Completed),
        TaskAction::ToggleComplete(ids[3]),
        TaskAction::ToggleTheme,
        TaskAction::Delete(ids[0]),
    ];

    for action in script {
        let before = store.list().len();
        let outcome = store.dispatch(action);
        assert_mirrored(&store);
        if outcome != ActionOutcome::Saved {
            assert_eq!(store.list().len(), before);
        }
    }

    assert_eq!(
        store.list().snapshot(),
        vec![TaskRecord::new("Walk the dog", true), TaskRecord::new("Call mom", true)]
    );
}

#[test]
fn reload_reproduces_collection() {
    let mut store = TodoStore::open(MemoryStorage::new(), &StoreConfig::default());
    let first = store.add("one").unwrap();
    store.add("two").unwrap();
    store.add("three").unwrap();
    store.toggle_complete(first).unwrap();
    let before = store.list().snapshot();

    let reloaded = TodoStore::open(store.into_storage(), &StoreConfig::default());

    assert_eq!(reloaded.list().snapshot(), before);
    assert_eq!(reloaded.filter(), FilterMode::All);
}

#[test]
fn all_filter_restores_every_row() {
    let mut store = TodoStore::open(MemoryStorage::new(), &StoreConfig::default());
    let done = store.add("done").unwrap();
    store.add("open").unwrap();
    store.toggle_complete(done).unwrap();
    let stored = store.storage().slot("tasks").map(str::to_string);

    for mode in [FilterMode::Completed, FilterMode::Active] {
        store.set_filter(mode);
        assert_eq!(store.list().visible(mode).count(), 1);
        store.set_filter(FilterMode::All);
        assert!(store.list().iter().all(|task| store.is_visible(task)));
        store.set_filter(FilterMode::All);
        assert!(store.list().iter().all(|task| store.is_visible(task)));
    }

    assert_eq!(store.storage().slot("tasks").map(str::to_string), stored);
}

#[test]
fn whitespace_add_never_grows_collection() {
    let mut store = TodoStore::open(MemoryStorage::new(), &StoreConfig::default());
    store.add("seed").unwrap();

    for blank in ["", " ", "\t", "  \n  "] {
        let outcome = store.dispatch(TaskAction::Add(blank.to_string()));
        assert!(outcome.warning().is_some());
        assert_eq!(store.list().len(), 1);
    }
}

#[test]
fn invalid_json_renders_nothing() {
    let storage = MemoryStorage::new().with_slot("tasks", "[{\"text\": ");
    let store = TodoStore::open(storage, &StoreConfig::default());
    assert!(store.list().is_empty());
    assert_eq!(store.list().visible(FilterMode::All).count(), 0);
}
