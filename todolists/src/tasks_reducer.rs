//! Reducer for the per-list task buckets.
//!
//! Besides task actions, this reducer also handles list creation and removal
//! so the bucket keys always match the list collection.

use crate::actions::{ActionKind, TodoAction};
use crate::app::TodoEnvironment;
use crate::types::{ListId, Task, TaskBuckets, TaskId};
use todoboard_core::reducer::Reducer;

/// Reducer owning `AppState::tasks_by_list`
///
/// A task action naming a list without a bucket is a no-op. It is logged at
/// warn level because it means the caller holds a stale list identifier.
#[derive(Clone, Copy, Debug, Default)]
pub struct TasksReducer;

impl TasksReducer {
    /// Creates a new `TasksReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn bucket_mut(buckets: &mut TaskBuckets, list_id: ListId, kind: ActionKind) -> Option<&mut Vec<Task>> {
        let bucket = buckets.get_mut(&list_id);
        if bucket.is_none() {
            tracing::warn!(%list_id, action = %kind, "Task action for unknown list ignored");
        }
        bucket
    }
}

impl Reducer for TasksReducer {
    type State = TaskBuckets;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(&self, buckets: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        let kind = action.kind();
        match action {
            TodoAction::RemoveTask { task_id, list_id } => {
                if let Some(tasks) = Self::bucket_mut(buckets, list_id, kind) {
                    tasks.retain(|task| task.id != task_id);
                }
            },

            TodoAction::AddTask { title, list_id } => {
                if let Some(tasks) = Self::bucket_mut(buckets, list_id, kind) {
                    let task = Task::new(TaskId::from_uuid(env.ids.next_id()), title);
                    tracing::trace!(%list_id, task_id = %task.id, "Task added");
                    tasks.insert(0, task);
                }
            },

            TodoAction::ChangeTaskStatus {
                task_id,
                list_id,
                is_done,
            } => {
                if let Some(task) = Self::bucket_mut(buckets, list_id, kind)
                    .and_then(|tasks| tasks.iter_mut().find(|task| task.id == task_id))
                {
                    task.is_done = is_done;
                }
            },

            TodoAction::ChangeTaskTitle {
                task_id,
                list_id,
                title,
            } => {
                if let Some(task) = Self::bucket_mut(buckets, list_id, kind)
                    .and_then(|tasks| tasks.iter_mut().find(|task| task.id == task_id))
                {
                    task.title = title;
                }
            },

            TodoAction::AddList { list_id, .. } => {
                buckets.entry(list_id).or_default();
                tracing::debug!(%list_id, "Task bucket created");
            },

            TodoAction::RemoveList { list_id } => {
                if let Some(removed) = buckets.remove(&list_id) {
                    tracing::debug!(%list_id, tasks = removed.len(), "Task bucket removed");
                }
            },

            TodoAction::ChangeListTitle { .. } | TodoAction::ChangeListFilter { .. } => {},
        }
    }
}
