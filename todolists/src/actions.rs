//! Actions and the action factory.
//!
//! Every state change is described by a [`TodoAction`]. Build actions with the
//! constructor functions in this module: they normalise titles and, for
//! [`add_list`], generate the new list's identifier up front.
//!
//! # One creation event, one action
//!
//! [`add_list`] generates a fresh identifier on every call. Both the list
//! reducer and the task reducer must see the *same* identifier, so build the
//! action once and dispatch that single value:
//!
//! ```
//! use todolists::actions;
//!
//! # fn main() -> Result<(), todolists::ActionError> {
//! let first = actions::add_list("Groceries")?;
//! let second = actions::add_list("Groceries")?;
//!
//! // Same title, different identifiers: never rebuild an action per consumer.
//! assert_ne!(first.list_id(), second.list_id());
//! # Ok(())
//! # }
//! ```

use crate::types::{FilterValue, ListId, TaskId};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use todoboard_core::environment::{IdGenerator, UuidGenerator};

/// Errors produced by the action factory
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Titles must contain at least one non-whitespace character
    #[error("Title cannot be empty")]
    EmptyTitle,
}

/// All commands understood by the reducers
///
/// Serialized as a tagged record, e.g.
/// `{"type": "ADD_TASK", "payload": {"title": "Milk", "listId": "..."}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum TodoAction {
    // ========== Tasks ==========
    /// Remove a task from its list
    RemoveTask {
        /// Task to remove
        task_id: TaskId,
        /// Owning list
        list_id: ListId,
    },

    /// Add a task at the top of a list; the task ID is generated on reduce
    AddTask {
        /// Title of the new task
        title: String,
        /// Owning list
        list_id: ListId,
    },

    /// Mark a task done or not done
    ChangeTaskStatus {
        /// Task to update
        task_id: TaskId,
        /// Owning list
        list_id: ListId,
        /// New status
        is_done: bool,
    },

    /// Rename a task
    ChangeTaskTitle {
        /// Task to update
        task_id: TaskId,
        /// Owning list
        list_id: ListId,
        /// New title
        title: String,
    },

    // ========== Lists ==========
    /// Create a list (and its empty task bucket)
    AddList {
        /// Title of the new list
        title: String,
        /// Identifier generated when the action was built
        list_id: ListId,
    },

    /// Remove a list together with all of its tasks
    RemoveList {
        /// List to remove
        list_id: ListId,
    },

    /// Rename a list
    ChangeListTitle {
        /// List to update
        list_id: ListId,
        /// New title
        title: String,
    },

    /// Change which tasks a list displays
    ChangeListFilter {
        /// List to update
        list_id: ListId,
        /// New filter
        filter: FilterValue,
    },
}

/// Discriminator of a [`TodoAction`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// [`TodoAction::RemoveTask`]
    RemoveTask,
    /// [`TodoAction::AddTask`]
    AddTask,
    /// [`TodoAction::ChangeTaskStatus`]
    ChangeTaskStatus,
    /// [`TodoAction::ChangeTaskTitle`]
    ChangeTaskTitle,
    /// [`TodoAction::AddList`]
    AddList,
    /// [`TodoAction::RemoveList`]
    RemoveList,
    /// [`TodoAction::ChangeListTitle`]
    ChangeListTitle,
    /// [`TodoAction::ChangeListFilter`]
    ChangeListFilter,
}

impl ActionKind {
    /// Tag used in serialized actions and logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RemoveTask => "REMOVE_TASK",
            Self::AddTask => "ADD_TASK",
            Self::ChangeTaskStatus => "CHANGE_TASK_STATUS",
            Self::ChangeTaskTitle => "CHANGE_TASK_TITLE",
            Self::AddList => "ADD_LIST",
            Self::RemoveList => "REMOVE_LIST",
            Self::ChangeListTitle => "CHANGE_LIST_TITLE",
            Self::ChangeListFilter => "CHANGE_LIST_FILTER",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TodoAction {
    /// The action's discriminator
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Self::RemoveTask { .. } => ActionKind::RemoveTask,
            Self::AddTask { .. } => ActionKind::AddTask,
            Self::ChangeTaskStatus { .. } => ActionKind::ChangeTaskStatus,
            Self::ChangeTaskTitle { .. } => ActionKind::ChangeTaskTitle,
            Self::AddList { .. } => ActionKind::AddList,
            Self::RemoveList { .. } => ActionKind::RemoveList,
            Self::ChangeListTitle { .. } => ActionKind::ChangeListTitle,
            Self::ChangeListFilter { .. } => ActionKind::ChangeListFilter,
        }
    }

    /// The list this action targets
    #[must_use]
    pub const fn list_id(&self) -> ListId {
        match self {
            Self::RemoveTask { list_id, .. }
            | Self::AddTask { list_id, .. }
            | Self::ChangeTaskStatus { list_id, .. }
            | Self::ChangeTaskTitle { list_id, .. }
            | Self::AddList { list_id, .. }
            | Self::RemoveList { list_id }
            | Self::ChangeListTitle { list_id, .. }
            | Self::ChangeListFilter { list_id, .. } => *list_id,
        }
    }
}

fn normalize_title(title: impl Into<String>) -> Result<String, ActionError> {
    let title = title.into();
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ActionError::EmptyTitle);
    }
    if trimmed.len() == title.len() {
        Ok(title)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Build a [`TodoAction::RemoveTask`]
#[must_use]
pub const fn remove_task(task_id: TaskId, list_id: ListId) -> TodoAction {
    TodoAction::RemoveTask { task_id, list_id }
}

/// Build a [`TodoAction::AddTask`]
///
/// # Errors
///
/// Returns [`ActionError::EmptyTitle`] if the title is blank.
pub fn add_task(title: impl Into<String>, list_id: ListId) -> Result<TodoAction, ActionError> {
    Ok(TodoAction::AddTask {
        title: normalize_title(title)?,
        list_id,
    })
}

/// Build a [`TodoAction::ChangeTaskStatus`]
#[must_use]
pub const fn change_task_status(task_id: TaskId, list_id: ListId, is_done: bool) -> TodoAction {
    TodoAction::ChangeTaskStatus {
        task_id,
        list_id,
        is_done,
    }
}

/// Build a [`TodoAction::ChangeTaskTitle`]
///
/// # Errors
///
/// Returns [`ActionError::EmptyTitle`] if the title is blank.
pub fn change_task_title(
    task_id: TaskId,
    list_id: ListId,
    title: impl Into<String>,
) -> Result<TodoAction, ActionError> {
    Ok(TodoAction::ChangeTaskTitle {
        task_id,
        list_id,
        title: normalize_title(title)?,
    })
}

/// Build a [`TodoAction::AddList`] with a freshly generated random identifier
///
/// # Errors
///
/// Returns [`ActionError::EmptyTitle`] if the title is blank.
pub fn add_list(title: impl Into<String>) -> Result<TodoAction, ActionError> {
    add_list_with(&UuidGenerator, title)
}

/// Build a [`TodoAction::AddList`] whose identifier comes from `ids`
///
/// # Errors
///
/// Returns [`ActionError::EmptyTitle`] if the title is blank. No identifier
/// is consumed in that case.
pub fn add_list_with(
    ids: &dyn IdGenerator,
    title: impl Into<String>,
) -> Result<TodoAction, ActionError> {
    let title = normalize_title(title)?;
    Ok(TodoAction::AddList {
        title,
        list_id: ListId::from_uuid(ids.next_id()),
    })
}

/// Build a [`TodoAction::RemoveList`]
#[must_use]
pub const fn remove_list(list_id: ListId) -> TodoAction {
    TodoAction::RemoveList { list_id }
}

/// Build a [`TodoAction::ChangeListTitle`]
///
/// # Errors
///
/// Returns [`ActionError::EmptyTitle`] if the title is blank.
pub fn change_list_title(list_id: ListId, title: impl Into<String>) -> Result<TodoAction, ActionError> {
    Ok(TodoAction::ChangeListTitle {
        list_id,
        title: normalize_title(title)?,
    })
}

/// Build a [`TodoAction::ChangeListFilter`]
#[must_use]
pub const fn change_list_filter(list_id: ListId, filter: FilterValue) -> TodoAction {
    TodoAction::ChangeListFilter { list_id, filter }
}
