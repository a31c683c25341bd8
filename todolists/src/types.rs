//! Domain types for the to-do lists.
//!
//! The state has two halves that must stay in lockstep: the ordered list
//! collection and the task buckets keyed by list identifier. Tasks reference
//! their list by identifier only; they are never nested inside a list.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Unique identifier for a list
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(Uuid);

impl ListId {
    /// Creates a new random `ListId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `ListId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ListId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a task
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new random `TaskId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `TaskId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which tasks a list displays
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterValue {
    /// Every task
    #[default]
    All,
    /// Tasks not yet done
    Active,
    /// Tasks marked done
    Completed,
}

impl FilterValue {
    /// Whether a task passes this filter
    #[must_use]
    pub const fn admits(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.is_done,
            Self::Completed => task.is_done,
        }
    }

    /// Lowercase name, as used in serialized state
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for FilterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single task
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    /// Title of the task
    pub title: String,
    /// Whether the task is done
    pub is_done: bool,
}

impl Task {
    /// Creates a new, not yet done task
    #[must_use]
    pub const fn new(id: TaskId, title: String) -> Self {
        Self {
            id,
            title,
            is_done: false,
        }
    }
}

/// A named list of tasks with its display filter
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    /// Unique identifier
    pub id: ListId,
    /// Title of the list
    pub title: String,
    /// Display filter
    pub filter: FilterValue,
}

impl TodoList {
    /// Creates a new list showing all tasks
    #[must_use]
    pub const fn new(id: ListId, title: String) -> Self {
        Self {
            id,
            title,
            filter: FilterValue::All,
        }
    }
}

/// Tasks per list, newest first
pub type TaskBuckets = HashMap<ListId, Vec<Task>>;

/// The whole application state
///
/// Every list identifier has exactly one bucket in `tasks_by_list` and every
/// bucket belongs to a list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Lists in creation order
    pub lists: Vec<TodoList>,
    /// Task buckets keyed by list
    pub tasks_by_list: TaskBuckets,
}

impl AppState {
    /// Creates a new empty state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a list by ID
    #[must_use]
    pub fn list(&self, id: ListId) -> Option<&TodoList> {
        self.lists.iter().find(|list| list.id == id)
    }

    /// Returns all tasks of a list, newest first
    #[must_use]
    pub fn tasks(&self, id: ListId) -> Option<&[Task]> {
        self.tasks_by_list.get(&id).map(Vec::as_slice)
    }

    /// Returns a task by list and task ID
    #[must_use]
    pub fn task(&self, list_id: ListId, task_id: TaskId) -> Option<&Task> {
        self.tasks(list_id)?.iter().find(|task| task.id == task_id)
    }

    /// Returns the tasks a list shows under its current filter
    ///
    /// Empty if the list does not exist.
    #[must_use]
    pub fn visible_tasks(&self, id: ListId) -> Vec<&Task> {
        let (Some(list), Some(tasks)) = (self.list(id), self.tasks(id)) else {
            return Vec::new();
        };
        tasks.iter().filter(|task| list.filter.admits(task)).collect()
    }

    /// Total number of tasks across all lists
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks_by_list.values().map(Vec::len).sum()
    }

    /// Whether list identifiers and bucket keys are exactly the same set
    #[must_use]
    pub fn buckets_in_lockstep(&self) -> bool {
        self.lists.len() == self.tasks_by_list.len()
            && self
                .lists
                .iter()
                .all(|list| self.tasks_by_list.contains_key(&list.id))
    }
}
