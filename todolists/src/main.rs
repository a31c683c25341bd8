//! CLI demo for the to-do lists store.
//!
//! Walks through creating a list, adding and updating tasks, filtering and
//! finally removing the list, printing the snapshot after every dispatch.

use std::sync::Arc;
use todolists::demo::demo_state;
use todolists::{AppConfig, AppState, FilterValue, TodoEnvironment, actions, new_store};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn render(state: &AppState) {
    if state.lists.is_empty() {
        println!("  (no lists)");
    }
    for list in &state.lists {
        println!("  {} [{}]", list.title, list.filter);
        for task in state.visible_tasks(list.id) {
            let status = if task.is_done { "✓" } else { " " };
            println!("    [{status}] {}", task.title);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_filter))?)
        .with(tracing_subscriber::fmt::layer())
        .init();
    todoboard_runtime::metrics::describe_store_metrics();

    println!("=== Todo Lists Example ===\n");

    let env = TodoEnvironment::production();
    let initial = if config.seed_demo_data {
        demo_state(env.ids.as_ref())
    } else {
        AppState::new()
    };
    let store = new_store(initial, env, config.store);

    println!("Initial state:");
    render(&store.snapshot());

    let _subscription = store.subscribe(|snapshot: &Arc<AppState>| {
        render(snapshot);
    });

    println!("\n>>> Adding list 'Groceries'");
    let add_list = actions::add_list("Groceries")?;
    let groceries = add_list.list_id();
    store.send(add_list)?;

    println!("\n>>> Adding 'Milk'");
    store.send(actions::add_task("Milk", groceries)?)?;

    println!("\n>>> Adding 'Bread'");
    store.send(actions::add_task("Bread", groceries)?)?;

    let milk = store
        .state(|s| {
            s.tasks(groceries)
                .and_then(|tasks| tasks.iter().find(|t| t.title == "Milk"))
                .map(|t| t.id)
        })
        .ok_or("Milk should be in the Groceries list")?;

    println!("\n>>> Completing 'Milk'");
    store.send(actions::change_task_status(milk, groceries, true))?;

    println!("\n>>> Showing active tasks only");
    store.send(actions::change_list_filter(groceries, FilterValue::Active))?;

    println!("\n>>> Renaming list to 'Weekly shop'");
    store.send(actions::change_list_title(groceries, "Weekly shop")?)?;

    println!("\n>>> Removing the list");
    store.send(actions::remove_list(groceries))?;

    tracing::debug!(state = %store.debug_state(), "Final state");
    println!("\nDispatches applied: {}", store.version());
    println!("\n=== Demo Complete ===");
    Ok(())
}
