//! # Todoboard Core
//!
//! Core traits and types for reducer-driven state containers.
//!
//! ## Core Concepts
//!
//! - **State**: Plain, cloneable domain data
//! - **Action**: An immutable command describing one requested state change
//! - **Reducer**: Pure function `(State, Action, Environment) → State`
//! - **Environment**: Injected dependencies (identifier generation)
//!
//! Reducers never touch shared state. The runtime hands every reducer a
//! private working copy and publishes the result as a new snapshot, so a
//! reducer written against `&mut State` is observably a pure function.
//!
//! ## Example
//!
//! ```
//! use todoboard_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//!     Decrement,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut CounterState, action: CounterAction, _env: &()) {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!             CounterAction::Decrement => state.count -= 1,
//!         }
//!     }
//! }
//!
//! let before = CounterState::default();
//! let after = CounterReducer.apply(&before, CounterAction::Increment, &());
//! assert_eq!(before.count, 0);
//! assert_eq!(after.count, 1);
//! ```

pub use uuid::Uuid;

/// Reducer composition utilities
pub mod composition;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → State`
///
/// They contain all business logic and are deterministic and testable.
/// Unrecognized actions must leave the state untouched.
pub mod reducer {
    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for ListsReducer {
    ///     type State = Vec<TodoList>;
    ///     type Action = TodoAction;
    ///     type Environment = TodoEnvironment;
    ///
    ///     fn reduce(&self, lists: &mut Vec<TodoList>, action: TodoAction, _env: &TodoEnvironment) {
    ///         match action {
    ///             TodoAction::RemoveList { list_id } => lists.retain(|l| l.id != list_id),
    ///             _ => {}
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes
        ///
        /// `state` is a working copy owned by the caller; nothing else can
        /// observe it until the caller publishes it.
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to the working copy
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment);

        /// Pure form of [`Reducer::reduce`]: returns the next state and
        /// leaves `state` untouched.
        #[must_use]
        fn apply(
            &self,
            state: &Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Self::State
        where
            Self::State: Clone,
        {
            let mut next = state.clone();
            self.reduce(&mut next, action, env);
            next
        }
    }

    /// A type-erased reducer, as accepted by
    /// [`combine_reducers`](crate::composition::combine_reducers).
    pub type BoxedReducer<S, A, E> =
        Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>;
}

/// Environment module - Dependency injection traits
///
/// All sources of non-determinism a reducer needs are abstracted behind
/// traits and injected via the Environment parameter, so tests can swap in
/// predictable implementations.
pub mod environment {
    use uuid::Uuid;

    /// `IdGenerator` trait - abstracts identifier generation for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use todoboard_core::environment::{IdGenerator, UuidGenerator};
    ///
    /// let ids = UuidGenerator;
    /// assert_ne!(ids.next_id(), ids.next_id());
    /// ```
    pub trait IdGenerator: Send + Sync {
        /// Produce a fresh, globally unique identifier
        fn next_id(&self) -> Uuid;
    }

    /// Production generator backed by random (v4) UUIDs
    #[derive(Debug, Clone, Copy, Default)]
    pub struct UuidGenerator;

    impl IdGenerator for UuidGenerator {
        fn next_id(&self) -> Uuid {
            Uuid::new_v4()
        }
    }
}
