//! Root reducer, environment and store wiring.
//!
//! The root reducer fans every action out to both slice reducers. List
//! creation and removal therefore reach the task buckets in the same
//! dispatch, which keeps bucket keys and list identifiers in lockstep.

use crate::actions::TodoAction;
use crate::lists_reducer::ListsReducer;
use crate::tasks_reducer::TasksReducer;
use crate::types::{AppState, TaskBuckets, TodoList};
use std::sync::Arc;
use todoboard_core::composition::{CombinedReducer, combine_reducers, scope_reducer};
use todoboard_core::environment::{IdGenerator, UuidGenerator};
use todoboard_runtime::{Store, StoreConfig};

/// Environment dependencies for the to-do reducers
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Source of task identifiers
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }

    /// Environment backed by random UUIDs
    #[must_use]
    pub fn production() -> Self {
        Self::new(Arc::new(UuidGenerator))
    }
}

impl Default for TodoEnvironment {
    fn default() -> Self {
        Self::production()
    }
}

impl std::fmt::Debug for TodoEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoEnvironment").finish_non_exhaustive()
    }
}

/// The root reducer type
pub type TodoReducer = CombinedReducer<AppState, TodoAction, TodoEnvironment>;

/// The application store type
pub type TodoStore = Store<AppState, TodoAction, TodoEnvironment, TodoReducer>;

fn lists(state: &mut AppState) -> &mut Vec<TodoList> {
    &mut state.lists
}

fn tasks_by_list(state: &mut AppState) -> &mut TaskBuckets {
    &mut state.tasks_by_list
}

/// Build the root reducer: lists first, then task buckets
#[must_use]
pub fn root_reducer() -> TodoReducer {
    combine_reducers(vec![
        Box::new(scope_reducer(ListsReducer::new(), lists)),
        Box::new(scope_reducer(TasksReducer::new(), tasks_by_list)),
    ])
}

/// Create a store over `initial_state` with the root reducer
#[must_use]
pub fn new_store(initial_state: AppState, environment: TodoEnvironment, config: StoreConfig) -> TodoStore {
    tracing::debug!(
        lists = initial_state.lists.len(),
        tasks = initial_state.task_count(),
        "Creating todo store"
    );
    Store::with_config(initial_state, root_reducer(), environment, config)
}
