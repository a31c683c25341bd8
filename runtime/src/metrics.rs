//! Metric names and descriptions emitted by the Store.
//!
//! The Store records through the `metrics` facade only. Nothing is exported
//! unless the host application installs a recorder; call
//! [`describe_store_metrics`] once after installing one so the metrics carry
//! units and help text.

use metrics::{Unit, describe_counter, describe_histogram};

/// Counter: actions dispatched through any Store
pub const COMMANDS_TOTAL: &str = "store.commands.total";

/// Counter: dispatches whose resulting state equalled the previous snapshot
pub const COMMANDS_UNCHANGED: &str = "store.commands.unchanged";

/// Histogram: time spent inside the reducer per dispatch
pub const REDUCER_DURATION: &str = "store.reducer.duration_seconds";

/// Counter: listener invocations after a dispatch
pub const LISTENERS_NOTIFIED: &str = "store.listeners.notified";

/// Register descriptions for every Store metric with the installed recorder.
pub fn describe_store_metrics() {
    describe_counter!(COMMANDS_TOTAL, Unit::Count, "Actions dispatched through the store");
    describe_counter!(
        COMMANDS_UNCHANGED,
        Unit::Count,
        "Dispatches that left the state equal to the previous snapshot"
    );
    describe_histogram!(
        REDUCER_DURATION,
        Unit::Seconds,
        "Time spent running the root reducer"
    );
    describe_counter!(
        LISTENERS_NOTIFIED,
        Unit::Count,
        "Listener callbacks invoked after dispatch"
    );
}
