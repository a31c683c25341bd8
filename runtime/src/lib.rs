//! # Todoboard Runtime
//!
//! Runtime implementation for reducer-driven state containers.
//!
//! This crate provides the Store: the single owner of the application state
//! and the only place where actions enter the system.
//!
//! ## Core Components
//!
//! - **Store**: Holds the current snapshot, runs the reducer, publishes results
//! - **Subscription**: Handle for a listener notified after every dispatch
//! - **Watch channel**: Async-friendly view of the latest snapshot
//!
//! ## Dispatch Model
//!
//! Dispatch is a plain, synchronous function call. The reducer runs against a
//! private copy of the current state; the result replaces the snapshot
//! wholesale. Readers hold `Arc<S>` snapshots and never observe a partially
//! applied action.
//!
//! Listeners receive snapshots in dispatch order, including when a listener
//! dispatches again or several threads send at once.
//!
//! ## Example
//!
//! ```ignore
//! use todoboard_runtime::Store;
//!
//! let store = Store::new(initial_state, root_reducer, environment);
//!
//! let _subscription = store.subscribe(|snapshot| render(snapshot));
//!
//! store.send(Action::DoSomething)?;
//!
//! let value = store.state(|s| s.some_field);
//! ```

use todoboard_core::reducer::Reducer;

/// Metric names and descriptions
pub mod metrics;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// A previous dispatch panicked while holding the dispatch lock
        ///
        /// The published snapshot is still the last good state, but the
        /// store refuses further actions: a panicking reducer is a bug the
        /// caller must see.
        #[error("Store is poisoned: a previous dispatch panicked")]
        Poisoned,
    }
}

pub use error::StoreError;
pub use store::{Store, Subscription};

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use todoboard_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_notify_unchanged(false);
/// assert!(!config.notify_unchanged);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Notify listeners even when a dispatch leaves the state unchanged
    ///
    /// When `false`, the new snapshot is compared with the previous one and
    /// listeners are skipped if they are equal.
    pub notify_unchanged: bool,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(notify_unchanged: bool) -> Self {
        Self { notify_unchanged }
    }

    /// Set whether listeners run for dispatches that change nothing
    #[must_use]
    pub const fn with_notify_unchanged(mut self, notify_unchanged: bool) -> Self {
        self.notify_unchanged = notify_unchanged;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            notify_unchanged: true,
        }
    }
}

/// Store module - The runtime for reducers
pub mod store {
    use super::{Reducer, StoreConfig, StoreError};
    use std::collections::VecDeque;
    use std::marker::PhantomData;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
    use std::time::Instant;
    use tokio::sync::watch;

    type Listener<S> = Arc<dyn Fn(&Arc<S>) + Send + Sync>;

    struct ListenerRegistry<S> {
        next_id: u64,
        listeners: Vec<(u64, Listener<S>)>,
    }

    impl<S> ListenerRegistry<S> {
        const fn new() -> Self {
            Self {
                next_id: 0,
                listeners: Vec::new(),
            }
        }
    }

    // The registry holds plain data with no cross-field invariants, so a
    // panic in another thread while it was locked leaves it usable.
    fn lock_registry<S>(registry: &Mutex<ListenerRegistry<S>>) -> MutexGuard<'_, ListenerRegistry<S>> {
        registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshots waiting to be delivered, in dispatch order
    ///
    /// At most one caller drains the queue at a time. Dispatches made while
    /// a drain is running (from a listener or another thread) are delivered
    /// by that drain once the current round of listeners has finished.
    struct Delivery<S> {
        draining: bool,
        pending: VecDeque<(u64, Arc<S>)>,
    }

    impl<S> Delivery<S> {
        const fn new() -> Self {
            Self {
                draining: false,
                pending: VecDeque::new(),
            }
        }
    }

    fn lock_delivery<S>(delivery: &Mutex<Delivery<S>>) -> MutexGuard<'_, Delivery<S>> {
        delivery.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // Hands the queue back if a listener panics mid-drain, so later
    // dispatches can pick up what is left.
    struct DrainGuard<'a, S> {
        delivery: &'a Mutex<Delivery<S>>,
        finished: bool,
    }

    impl<S> Drop for DrainGuard<'_, S> {
        fn drop(&mut self) {
            if !self.finished {
                lock_delivery(self.delivery).draining = false;
            }
        }
    }

    /// Handle for a registered listener
    ///
    /// Dropping the handle (or calling [`Subscription::unsubscribe`])
    /// unregisters the listener. Call [`Subscription::detach`] to keep the
    /// listener for the lifetime of the store.
    #[must_use = "dropping a Subscription unregisters its listener"]
    pub struct Subscription {
        unsubscribe: Option<Box<dyn FnOnce() + Send + Sync>>,
    }

    impl Subscription {
        /// Unregister the listener now
        pub fn unsubscribe(mut self) {
            if let Some(unsubscribe) = self.unsubscribe.take() {
                unsubscribe();
            }
        }

        /// Keep the listener registered until the store is dropped
        pub fn detach(mut self) {
            self.unsubscribe = None;
        }
    }

    impl Drop for Subscription {
        fn drop(&mut self) {
            if let Some(unsubscribe) = self.unsubscribe.take() {
                unsubscribe();
            }
        }
    }

    impl std::fmt::Debug for Subscription {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Subscription")
                .field("active", &self.unsubscribe.is_some())
                .finish()
        }
    }

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (published as immutable `Arc<S>` snapshots)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Listeners (notified after every dispatch)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        snapshot: watch::Sender<Arc<S>>,
        dispatch_lock: Mutex<()>,
        reducer: R,
        environment: E,
        config: StoreConfig,
        listeners: Arc<Mutex<ListenerRegistry<S>>>,
        delivery: Mutex<Delivery<S>>,
        version: AtomicU64,
        _action: PhantomData<fn(A)>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        S: Clone + PartialEq + Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`]: listeners run after every dispatch.
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        #[must_use]
        pub fn with_config(initial_state: S, reducer: R, environment: E, config: StoreConfig) -> Self {
            let (snapshot, _) = watch::channel(Arc::new(initial_state));

            Self {
                snapshot,
                dispatch_lock: Mutex::new(()),
                reducer,
                environment,
                config,
                listeners: Arc::new(Mutex::new(ListenerRegistry::new())),
                delivery: Mutex::new(Delivery::new()),
                version: AtomicU64::new(0),
                _action: PhantomData,
            }
        }

        /// Send an action to the store
        ///
        /// Runs the reducer against a copy of the current snapshot, replaces
        /// the snapshot with the result, then notifies listeners. Listeners
        /// run after the dispatch lock is released, so they may read the
        /// store or dispatch again.
        ///
        /// Every listener sees snapshots in dispatch order. A dispatch made
        /// while listeners are running is delivered once the current round
        /// has finished, by whichever call is already delivering; in that
        /// case `send` returns before its own snapshot reaches listeners.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::Poisoned`] if an earlier dispatch panicked.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub fn send(&self, action: A) -> Result<(), StoreError> {
            ::metrics::counter!(crate::metrics::COMMANDS_TOTAL).increment(1);

            {
                let _guard = self.dispatch_lock.lock().map_err(|_| {
                    tracing::error!("Rejected action: store is poisoned");
                    StoreError::Poisoned
                })?;

                let current = self.snapshot();

                let start = Instant::now();
                let next = Arc::new(self.reducer.apply(&current, action, &self.environment));
                ::metrics::histogram!(crate::metrics::REDUCER_DURATION)
                    .record(start.elapsed().as_secs_f64());

                let changed = *next != *current;
                self.snapshot.send_replace(Arc::clone(&next));
                let version = self.version.fetch_add(1, Ordering::AcqRel) + 1;
                tracing::debug!(version, changed, "Snapshot replaced");

                if !changed {
                    ::metrics::counter!(crate::metrics::COMMANDS_UNCHANGED).increment(1);
                }
                if changed || self.config.notify_unchanged {
                    // Queued under the dispatch lock so queue order is version order.
                    lock_delivery(&self.delivery).pending.push_back((version, next));
                } else {
                    tracing::trace!(version, "State unchanged, skipping listeners");
                }
            }

            self.drain();
            Ok(())
        }

        fn drain(&self) {
            {
                let mut delivery = lock_delivery(&self.delivery);
                if delivery.draining {
                    tracing::trace!(queued = delivery.pending.len(), "Delivery already in progress");
                    return;
                }
                delivery.draining = true;
            }

            let mut guard = DrainGuard {
                delivery: &self.delivery,
                finished: false,
            };

            loop {
                let next = {
                    let mut delivery = lock_delivery(&self.delivery);
                    let next = delivery.pending.pop_front();
                    if next.is_none() {
                        delivery.draining = false;
                        guard.finished = true;
                    }
                    next
                };

                match next {
                    Some((version, snapshot)) => self.notify(version, &snapshot),
                    None => break,
                }
            }
        }

        fn notify(&self, version: u64, snapshot: &Arc<S>) {
            let listeners: Vec<Listener<S>> = lock_registry(&self.listeners)
                .listeners
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect();

            tracing::trace!(version, "Notifying {} listeners", listeners.len());
            for listener in &listeners {
                listener(snapshot);
            }
            ::metrics::counter!(crate::metrics::LISTENERS_NOTIFIED).increment(listeners.len() as u64);
        }

        /// Register a listener invoked after every dispatch
        ///
        /// The listener receives the snapshot produced by that dispatch.
        /// Listeners run in registration order.
        pub fn subscribe<F>(&self, listener: F) -> Subscription
        where
            F: Fn(&Arc<S>) + Send + Sync + 'static,
        {
            let id = {
                let mut registry = lock_registry(&self.listeners);
                let id = registry.next_id;
                registry.next_id += 1;
                registry.listeners.push((id, Arc::new(listener)));
                id
            };
            tracing::debug!(listener_id = id, "Listener subscribed");

            let registry: Weak<Mutex<ListenerRegistry<S>>> = Arc::downgrade(&self.listeners);
            Subscription {
                unsubscribe: Some(Box::new(move || {
                    if let Some(registry) = registry.upgrade() {
                        lock_registry(&registry)
                            .listeners
                            .retain(|(listener_id, _)| *listener_id != id);
                        tracing::debug!(listener_id = id, "Listener unsubscribed");
                    }
                })),
            }
        }

        /// Number of currently registered listeners
        #[must_use]
        pub fn listener_count(&self) -> usize {
            lock_registry(&self.listeners).listeners.len()
        }

        /// The current immutable snapshot
        #[must_use]
        pub fn snapshot(&self) -> Arc<S> {
            self.snapshot.borrow().clone()
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let list_count = store.state(|s| s.lists.len());
        /// ```
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let snapshot = self.snapshot();
            f(&snapshot)
        }

        /// Observe snapshots from async code
        ///
        /// The receiver always holds the latest snapshot; intermediate
        /// snapshots may be skipped by slow observers.
        #[must_use]
        pub fn watch(&self) -> watch::Receiver<Arc<S>> {
            self.snapshot.subscribe()
        }

        /// Number of dispatches applied so far
        #[must_use]
        pub fn version(&self) -> u64 {
            self.version.load(Ordering::Acquire)
        }

        /// Pretty-printed dump of the current snapshot, for debugging
        #[must_use]
        pub fn debug_state(&self) -> String
        where
            S: std::fmt::Debug,
        {
            format!("{:#?}", self.snapshot())
        }
    }

    impl<S, A, E, R> std::fmt::Debug for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field("version", &self.version.load(Ordering::Acquire))
                .field("config", &self.config)
                .finish_non_exhaustive()
        }
    }
}
