//! # Todoboard Testing
//!
//! Testing utilities and helpers for reducer-driven state containers.
//!
//! This crate provides:
//! - Deterministic implementations of Environment traits
//! - A Given-When-Then harness for reducers
//! - Assertion helpers for state transitions
//!
//! ## Example
//!
//! ```ignore
//! use todoboard_testing::{ReducerTest, SequentialIdGenerator};
//!
//! ReducerTest::new(TasksReducer)
//!     .with_env(TodoEnvironment::new(Arc::new(SequentialIdGenerator::new())))
//!     .given_state(buckets)
//!     .when_action(actions::add_task("Milk", list_id)?)
//!     .then_state(|tasks| assert_eq!(tasks.len(), 1))
//!     .run();
//! ```

use todoboard_core::environment::IdGenerator;
use uuid::Uuid;


/// Mock implementations of Environment traits
pub mod mocks {
    use super::{IdGenerator, Uuid};
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Predictable identifier generator for deterministic tests
    ///
    /// Yields `00000000-0000-0000-0000-000000000001`, then `...0002`, and so on.
    ///
    /// # Example
    ///
    /// ```
    /// use todoboard_testing::mocks::SequentialIdGenerator;
    /// use todoboard_core::environment::IdGenerator;
    /// use uuid::Uuid;
    ///
    /// let ids = SequentialIdGenerator::new();
    /// assert_eq!(ids.next_id(), Uuid::from_u128(1));
    /// assert_eq!(ids.next_id(), Uuid::from_u128(2));
    /// ```
    #[derive(Debug, Default)]
    pub struct SequentialIdGenerator {
        issued: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a generator whose first identifier is `1`
        #[must_use]
        pub const fn new() -> Self {
            Self::starting_after(0)
        }

        /// Create a generator whose first identifier is `last + 1`
        ///
        /// Useful when two generators must not collide within one test.
        #[must_use]
        pub const fn starting_after(last: u64) -> Self {
            Self {
                issued: AtomicU64::new(last),
            }
        }

        /// Number of identifiers handed out so far (including the offset)
        #[must_use]
        pub fn issued(&self) -> u64 {
            self.issued.load(Ordering::SeqCst)
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> Uuid {
            let next = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
            Uuid::from_u128(u128::from(next))
        }
    }
}

// Re-export commonly used items
pub use mocks::SequentialIdGenerator;
pub use reducer_test::ReducerTest;
