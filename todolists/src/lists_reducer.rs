//! Reducer for the ordered list collection.

use crate::actions::TodoAction;
use crate::app::TodoEnvironment;
use crate::types::TodoList;
use todoboard_core::reducer::Reducer;

/// Reducer owning `AppState::lists`
///
/// Task actions are not its concern and leave the collection untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct ListsReducer;

impl ListsReducer {
    /// Creates a new `ListsReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for ListsReducer {
    type State = Vec<TodoList>;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(&self, lists: &mut Self::State, action: Self::Action, _env: &Self::Environment) {
        match action {
            TodoAction::RemoveList { list_id } => {
                lists.retain(|list| list.id != list_id);
            },

            TodoAction::AddList { title, list_id } => {
                // Re-dispatching the same AddList must not duplicate the list.
                if lists.iter().any(|list| list.id == list_id) {
                    tracing::debug!(%list_id, "List already exists, ignoring AddList");
                    return;
                }
                lists.push(TodoList::new(list_id, title));
            },

            TodoAction::ChangeListTitle { list_id, title } => {
                if let Some(list) = lists.iter_mut().find(|list| list.id == list_id) {
                    list.title = title;
                }
            },

            TodoAction::ChangeListFilter { list_id, filter } => {
                if let Some(list) = lists.iter_mut().find(|list| list.id == list_id) {
                    list.filter = filter;
                }
            },

            TodoAction::RemoveTask { .. }
            | TodoAction::AddTask { .. }
            | TodoAction::ChangeTaskStatus { .. }
            | TodoAction::ChangeTaskTitle { .. } => {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions;
    use crate::types::{FilterValue, ListId, TaskId};
    use std::sync::Arc;
    use todoboard_testing::{ReducerTest, SequentialIdGenerator};

    fn env() -> TodoEnvironment {
        TodoEnvironment::new(Arc::new(SequentialIdGenerator::new()))
    }

    fn two_lists() -> (Vec<TodoList>, ListId, ListId) {
        let first = ListId::new();
        let second = ListId::new();
        (
            vec![
                TodoList::new(first, "What to learn".to_string()),
                TodoList::new(second, "What to buy".to_string()),
            ],
            first,
            second,
        )
    }

    #[test]
    fn add_list_appends_with_default_filter() {
        let (lists, first, second) = two_lists();
        let action = TodoAction::AddList {
            title: "New".to_string(),
            list_id: ListId::new(),
        };
        let new_id = action.list_id();

        ReducerTest::new(ListsReducer::new())
            .with_env(env())
            .given_state(lists)
            .when_action(action)
            .then_state(move |lists| {
                let ids: Vec<_> = lists.iter().map(|l| l.id).collect();
                assert_eq!(ids, vec![first, second, new_id]);
                assert_eq!(lists[2].title, "New");
                assert_eq!(lists[2].filter, FilterValue::All);
            })
            .run();
    }

    #[test]
    fn add_list_twice_keeps_one() {
        let action = TodoAction::AddList {
            title: "Once".to_string(),
            list_id: ListId::new(),
        };

        ReducerTest::new(ListsReducer::new())
            .with_env(env())
            .given_state(Vec::new())
            .when_actions([action.clone(), action])
            .then_state(|lists| assert_eq!(lists.len(), 1))
            .run();
    }

    #[test]
    fn remove_list_drops_only_that_list() {
        let (lists, first, second) = two_lists();

        ReducerTest::new(ListsReducer::new())
            .with_env(env())
            .given_state(lists)
            .when_action(actions::remove_list(first))
            .then_state(move |lists| {
                assert_eq!(lists.len(), 1);
                assert_eq!(lists[0].id, second);
            })
            .run();
    }

    #[test]
    fn remove_unknown_list_is_noop() {
        let (lists, _, _) = two_lists();

        ReducerTest::new(ListsReducer::new())
            .with_env(env())
            .given_state(lists)
            .when_action(actions::remove_list(ListId::new()))
            .then_unchanged()
            .run();
    }

    #[test]
    fn change_title_touches_only_target() {
        let (lists, first, second) = two_lists();

        ReducerTest::new(ListsReducer::new())
            .with_env(env())
            .given_state(lists)
            .when_action(TodoAction::ChangeListTitle {
                list_id: second,
                title: "What to cook".to_string(),
            })
            .then_compare(move |before, after| {
                assert_eq!(after[1].title, "What to cook");
                assert_eq!(after[1].id, second);
                assert_eq!(before[0], after[0]);
                assert_eq!(after[0].id, first);
            })
            .run();
    }

    #[test]
    fn change_filter_touches_only_target() {
        let (lists, first, _) = two_lists();

        ReducerTest::new(ListsReducer::new())
            .with_env(env())
            .given_state(lists)
            .when_action(actions::change_list_filter(first, FilterValue::Completed))
            .then_state(|lists| {
                assert_eq!(lists[0].filter, FilterValue::Completed);
                assert_eq!(lists[1].filter, FilterValue::All);
            })
            .run();
    }

    #[test]
    fn updates_to_unknown_list_are_noops() {
        let (lists, _, _) = two_lists();
        let missing = ListId::new();

        ReducerTest::new(ListsReducer::new())
            .with_env(env())
            .given_state(lists)
            .when_action(actions::change_list_filter(missing, FilterValue::Active))
            .when_action(TodoAction::ChangeListTitle {
                list_id: missing,
                title: "Ghost".to_string(),
            })
            .then_unchanged()
            .run();
    }

    #[test]
    fn task_actions_are_ignored() {
        let (lists, first, _) = two_lists();

        ReducerTest::new(ListsReducer::new())
            .with_env(env())
            .given_state(lists)
            .when_action(TodoAction::AddTask {
                title: "Milk".to_string(),
                list_id: first,
            })
            .when_action(actions::remove_task(TaskId::new(), first))
            .then_unchanged()
            .run();
    }
}
