//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers in various ways:
//! - **`combine_reducers`**: Fan one action out to several reducers over the same state
//! - **`scope_reducer`**: Focus a reducer on a single field of a larger state
//!
//! Together they express the usual "root reducer" shape: each slice of the
//! state gets its own small reducer, every action reaches every slice, and
//! cross-slice invariants hold because all slices see the same action.
//!
//! # Examples
//!
//! ```
//! use todoboard_core::composition::{combine_reducers, scope_reducer};
//! use todoboard_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct AppState {
//!     names: Vec<String>,
//!     total: usize,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum AppAction {
//!     Add(String),
//! }
//!
//! struct NamesReducer;
//! struct TotalReducer;
//!
//! impl Reducer for NamesReducer {
//!     type State = Vec<String>;
//!     type Action = AppAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, names: &mut Vec<String>, action: AppAction, _env: &()) {
//!         let AppAction::Add(name) = action;
//!         names.push(name);
//!     }
//! }
//!
//! impl Reducer for TotalReducer {
//!     type State = usize;
//!     type Action = AppAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, total: &mut usize, _action: AppAction, _env: &()) {
//!         *total += 1;
//!     }
//! }
//!
//! fn names(state: &mut AppState) -> &mut Vec<String> {
//!     &mut state.names
//! }
//!
//! fn total(state: &mut AppState) -> &mut usize {
//!     &mut state.total
//! }
//!
//! let root = combine_reducers(vec![
//!     Box::new(scope_reducer(NamesReducer, names)),
//!     Box::new(scope_reducer(TotalReducer, total)),
//! ]);
//!
//! let state = root.apply(&AppState::default(), AppAction::Add("Ada".into()), &());
//! assert_eq!(state.names, vec!["Ada".to_string()]);
//! assert_eq!(state.total, 1);
//! ```

use crate::reducer::{BoxedReducer, Reducer};
use std::marker::PhantomData;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer receives its own clone of the action, in registration order.
/// A reducer that does not recognise the action must leave the state alone,
/// so unrelated reducers compose without coordination.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The action type
/// - `E`: The environment type
#[must_use]
pub fn combine_reducers<S, A, E>(reducers: Vec<BoxedReducer<S, A, E>>) -> CombinedReducer<S, A, E>
where
    A: Clone,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E> {
    reducers: Vec<BoxedReducer<S, A, E>>,
}

impl<S, A, E> CombinedReducer<S, A, E> {
    /// Number of reducers the action fans out to
    #[must_use]
    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    /// Whether no reducers are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }
}

impl<S, A, E> std::fmt::Debug for CombinedReducer<S, A, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombinedReducer")
            .field("reducers", &self.reducers.len())
            .finish()
    }
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    A: Clone,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        for reducer in &self.reducers {
            reducer.reduce(state, action.clone(), env);
        }
    }
}

/// Scopes a reducer to operate on one field of a larger state.
///
/// `lens` projects the parent state onto the child state the reducer owns.
/// The reducer mutates that field in place and never sees its siblings.
///
/// # Type Parameters
///
/// - `S`: The parent state type
/// - `R`: The child reducer, whose `State` is the projected field
pub const fn scope_reducer<S, R>(
    reducer: R,
    lens: fn(&mut S) -> &mut R::State,
) -> ScopedReducer<S, R>
where
    R: Reducer,
{
    ScopedReducer {
        reducer,
        lens,
        _parent: PhantomData,
    }
}

/// A scoped reducer that operates on a subset of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, R>
where
    R: Reducer,
{
    reducer: R,
    lens: fn(&mut S) -> &mut R::State,
    _parent: PhantomData<fn(&mut S)>,
}

impl<S, R> Reducer for ScopedReducer<S, R>
where
    R: Reducer,
{
    type State = S;
    type Action = R::Action;
    type Environment = R::Environment;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        self.reducer.reduce((self.lens)(state), action, env);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct TestState {
        counter: i32,
        name: String,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Increment,
        Decrement,
        SetName(String),
    }

    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = i32;
        type Action = TestAction;
        type Environment = ();

        fn reduce(&self, counter: &mut i32, action: TestAction, _env: &()) {
            match action {
                TestAction::Increment => *counter += 1,
                TestAction::Decrement => *counter -= 1,
                TestAction::SetName(_) => {},
            }
        }
    }

    struct NameReducer;

    impl Reducer for NameReducer {
        type State = String;
        type Action = TestAction;
        type Environment = ();

        fn reduce(&self, name: &mut String, action: TestAction, _env: &()) {
            if let TestAction::SetName(new_name) = action {
                *name = new_name;
            }
        }
    }

    fn counter(state: &mut TestState) -> &mut i32 {
        &mut state.counter
    }

    fn name(state: &mut TestState) -> &mut String {
        &mut state.name
    }

    fn root() -> CombinedReducer<TestState, TestAction, ()> {
        combine_reducers(vec![
            Box::new(scope_reducer(CounterReducer, counter)),
            Box::new(scope_reducer(NameReducer, name)),
        ])
    }

    #[test]
    fn test_combine_reducers() {
        let combined = root();
        assert_eq!(combined.len(), 2);

        let mut state = TestState::default();

        combined.reduce(&mut state, TestAction::Increment, &());
        assert_eq!(state.counter, 1);

        combined.reduce(&mut state, TestAction::SetName("Alice".to_string()), &());
        assert_eq!(state.name, "Alice");

        combined.reduce(&mut state, TestAction::Decrement, &());
        assert_eq!(state.counter, 0);
        assert_eq!(state.name, "Alice");
    }

    #[test]
    fn test_scope_reducer_touches_only_its_field() {
        let scoped = scope_reducer(CounterReducer, counter);

        let mut state = TestState {
            counter: 5,
            name: "test".to_string(),
        };

        scoped.reduce(&mut state, TestAction::Increment, &());
        assert_eq!(state.counter, 6);
        assert_eq!(state.name, "test");
    }

    #[test]
    fn test_empty_combination_is_identity() {
        let combined: CombinedReducer<TestState, TestAction, ()> = combine_reducers(Vec::new());
        assert!(combined.is_empty());

        let state = TestState {
            counter: 3,
            name: "same".to_string(),
        };
        assert_eq!(combined.apply(&state, TestAction::Increment, &()), state);
    }

    fn action_strategy() -> impl Strategy<Value = TestAction> {
        prop_oneof![
            Just(TestAction::Increment),
            Just(TestAction::Decrement),
            "[a-z]{0,8}".prop_map(TestAction::SetName),
        ]
    }

    proptest! {
        #[test]
        fn combined_matches_each_slice_reduced_alone(actions in prop::collection::vec(action_strategy(), 0..32)) {
            let combined = root();
            let mut state = TestState::default();
            let mut expected_counter = 0;
            let mut expected_name = String::new();

            for action in actions {
                CounterReducer.reduce(&mut expected_counter, action.clone(), &());
                NameReducer.reduce(&mut expected_name, action.clone(), &());
                combined.reduce(&mut state, action, &());
            }

            prop_assert_eq!(state.counter, expected_counter);
            prop_assert_eq!(state.name, expected_name);
        }
    }
}
