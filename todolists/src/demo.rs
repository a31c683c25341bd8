//! Demo seed data.

use crate::types::{AppState, ListId, Task, TaskId, TodoList};
use todoboard_core::environment::IdGenerator;

fn task(ids: &dyn IdGenerator, title: &str, is_done: bool) -> Task {
    Task {
        id: TaskId::from_uuid(ids.next_id()),
        title: title.to_string(),
        is_done,
    }
}

/// Two small lists with a few tasks each, identifiers drawn from `ids`
#[must_use]
pub fn demo_state(ids: &dyn IdGenerator) -> AppState {
    let learn = ListId::from_uuid(ids.next_id());
    let buy = ListId::from_uuid(ids.next_id());

    let mut state = AppState::new();
    state.lists = vec![
        TodoList::new(learn, "What to learn".to_string()),
        TodoList::new(buy, "What to buy".to_string()),
    ];
    state.tasks_by_list.insert(
        learn,
        vec![
            task(ids, "HTML&CSS", true),
            task(ids, "JS", true),
            task(ids, "ReactJS", false),
        ],
    );
    state.tasks_by_list.insert(
        buy,
        vec![task(ids, "Rest API", true), task(ids, "GraphQL", false)],
    );
    state
}
