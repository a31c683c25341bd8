//! End-to-end scenarios through the store.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use todoboard_runtime::StoreConfig;
use todoboard_testing::SequentialIdGenerator;
use todolists::{AppState, FilterValue, ListId, TodoEnvironment, TodoStore, actions, new_store};
use uuid::Uuid;

fn store() -> TodoStore {
    new_store(
        AppState::new(),
        TodoEnvironment::new(Arc::new(SequentialIdGenerator::starting_after(100))),
        StoreConfig::default(),
    )
}

#[test]
fn groceries_walkthrough() {
    let store = store();
    let list_ids = SequentialIdGenerator::new();

    let add_list = actions::add_list_with(&list_ids, "Groceries").unwrap();
    let l1 = ListId::from_uuid(Uuid::from_u128(1));
    assert_eq!(add_list.list_id(), l1);
    store.send(add_list).unwrap();

    let snapshot = store.snapshot();
    assert_eq!(snapshot.lists.len(), 1);
    assert_eq!(snapshot.lists[0].id, l1);
    assert_eq!(snapshot.lists[0].title, "Groceries");
    assert_eq!(snapshot.lists[0].filter, FilterValue::All);
    assert_eq!(snapshot.tasks_by_list.len(), 1);
    assert!(snapshot.tasks(l1).unwrap().is_empty());

    store.send(actions::add_task("Milk", l1).unwrap()).unwrap();
    let snapshot = store.snapshot();
    let tasks = snapshot.tasks(l1).unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Milk");
    assert!(!tasks[0].is_done);

    store.send(actions::remove_list(l1)).unwrap();
    let snapshot = store.snapshot();
    assert!(snapshot.lists.is_empty());
    assert!(snapshot.tasks_by_list.is_empty());
    assert_eq!(store.version(), 3);
}

#[test]
fn newest_task_first() {
    let store = store();
    let add_list = actions::add_list("Inbox").unwrap();
    let list_id = add_list.list_id();
    store.send(add_list).unwrap();

    store.send(actions::add_task("T1", list_id).unwrap()).unwrap();
    store.send(actions::add_task("T2", list_id).unwrap()).unwrap();

    let titles = store.state(|s| {
        s.tasks(list_id)
            .unwrap()
            .iter()
            .map(|t| t.title.clone())
            .collect::<Vec<_>>()
    });
    assert_eq!(titles, vec!["T2", "T1"]);
}

#[test]
fn remove_list_cascades_in_one_dispatch() {
    let store = store();
    let keep = actions::add_list("Keep").unwrap();
    let drop_me = actions::add_list("Drop").unwrap();
    let (keep_id, drop_id) = (keep.list_id(), drop_me.list_id());
    store.send(keep).unwrap();
    store.send(drop_me).unwrap();
    store.send(actions::add_task("a", drop_id).unwrap()).unwrap();
    store.send(actions::add_task("b", keep_id).unwrap()).unwrap();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _subscription = store.subscribe(move |snapshot: &Arc<AppState>| {
        sink.lock().unwrap().push(Arc::clone(snapshot));
    });

    store.send(actions::remove_list(drop_id)).unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let after = &seen[0];
    assert!(after.list(drop_id).is_none());
    assert!(after.tasks(drop_id).is_none());
    assert!(after.list(keep_id).is_some());
    assert_eq!(after.tasks(keep_id).unwrap().len(), 1);
    assert!(after.buckets_in_lockstep());
}

#[test]
fn one_action_one_identifier_for_both_slices() {
    let store = store();
    let action = actions::add_list("Shared").unwrap();
    let list_id = action.list_id();
    store.send(action).unwrap();

    let snapshot = store.snapshot();
    assert_eq!(snapshot.lists[0].id, list_id);
    assert!(snapshot.tasks_by_list.contains_key(&list_id));
}

#[test]
fn building_the_action_twice_desynchronises_ids() {
    // Calling the factory once per consumer yields two unrelated identifiers.
    let for_lists = actions::add_list("Groceries").unwrap();
    let for_tasks = actions::add_list("Groceries").unwrap();
    assert_ne!(for_lists.list_id(), for_tasks.list_id());

    let lists = todolists::ListsReducer::new();
    let tasks = todolists::TasksReducer::new();
    let env = TodoEnvironment::production();
    let mut state = AppState::new();
    todoboard_core::reducer::Reducer::reduce(&lists, &mut state.lists, for_lists, &env);
    todoboard_core::reducer::Reducer::reduce(&tasks, &mut state.tasks_by_list, for_tasks, &env);

    assert!(!state.buckets_in_lockstep());
}

#[test]
fn listeners_run_in_order_and_can_unsubscribe() {
    let store = store();
    let log = Arc::new(Mutex::new(Vec::new()));

    let first_log = Arc::clone(&log);
    let first = store.subscribe(move |_: &Arc<AppState>| first_log.lock().unwrap().push("first"));
    let second_log = Arc::clone(&log);
    let _second = store.subscribe(move |_: &Arc<AppState>| second_log.lock().unwrap().push("second"));

    store.send(actions::add_list("One").unwrap()).unwrap();
    first.unsubscribe();
    store.send(actions::add_list("Two").unwrap()).unwrap();

    assert_eq!(*log.lock().unwrap(), vec!["first", "second", "second"]);
}

#[test]
fn no_op_dispatch_can_skip_listeners() {
    let store = new_store(
        AppState::new(),
        TodoEnvironment::production(),
        StoreConfig::default().with_notify_unchanged(false),
    );
    let calls = Arc::new(Mutex::new(0_u32));
    let counter = Arc::clone(&calls);
    let _subscription = store.subscribe(move |_: &Arc<AppState>| *counter.lock().unwrap() += 1);

    store.send(actions::remove_list(ListId::new())).unwrap();
    assert_eq!(*calls.lock().unwrap(), 0);

    store.send(actions::add_list("Real").unwrap()).unwrap();
    assert_eq!(*calls.lock().unwrap(), 1);
}

#[test]
fn snapshots_are_immutable_history() {
    let store = store();
    let before = store.snapshot();
    store.send(actions::add_list("Later").unwrap()).unwrap();

    assert!(before.lists.is_empty());
    assert_eq!(store.snapshot().lists.len(), 1);

    let ids: HashSet<_> = store.snapshot().lists.iter().map(|l| l.id).collect();
    assert_eq!(ids.len(), 1);
}
