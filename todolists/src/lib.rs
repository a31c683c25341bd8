//! State container for a two-level to-do application.
//!
//! A set of *lists*, each holding an ordered set of *tasks*. All mutation
//! goes through two reducers combined into one root reducer:
//!
//! - [`ListsReducer`] owns the ordered list collection
//! - [`TasksReducer`] owns the task buckets keyed by list
//!
//! Every action reaches both reducers, so creating or removing a list
//! creates or removes its task bucket in the same dispatch.
//!
//! # Quick Start
//!
//! ```
//! use todolists::{AppState, TodoEnvironment, actions, new_store};
//! use todoboard_runtime::StoreConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = new_store(AppState::new(), TodoEnvironment::production(), StoreConfig::default());
//!
//! // Build the action once; its list ID is generated here.
//! let add_list = actions::add_list("Groceries")?;
//! let list_id = add_list.list_id();
//! store.send(add_list)?;
//!
//! store.send(actions::add_task("Milk", list_id)?)?;
//!
//! let snapshot = store.snapshot();
//! assert_eq!(snapshot.lists[0].title, "Groceries");
//! assert_eq!(snapshot.tasks(list_id).map(<[_]>::len), Some(1));
//!
//! store.send(actions::remove_list(list_id))?;
//! assert_eq!(*store.snapshot(), AppState::new());
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod app;
pub mod config;
pub mod demo;
pub mod lists_reducer;
pub mod tasks_reducer;
pub mod types;

// Re-export commonly used types
pub use actions::{ActionError, ActionKind, TodoAction};
pub use app::{TodoEnvironment, TodoReducer, TodoStore, new_store, root_reducer};
pub use config::{AppConfig, ConfigError};
pub use lists_reducer::ListsReducer;
pub use tasks_reducer::TasksReducer;
pub use types::{AppState, FilterValue, ListId, Task, TaskBuckets, TaskId, TodoList};
