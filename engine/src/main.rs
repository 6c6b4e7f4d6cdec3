//! CLI demo for the todo state engine.
//!
//! Seeds the bulk collection, then walks through the insert/toggle/remove
//! operations the way a presentation layer would drive them.

use tasklist_core::environment::SystemClock;
use tasklist_engine::{BULK_SEED_COUNT, TodoAction, TodoEnvironment, TodoId, TodoReducer, TodoState};
use tasklist_runtime::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tasklist_engine=debug,tasklist_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Tasklist Engine ===\n");

    // Seed once, at construction. The seed never re-runs: it is a
    // constructor, not an action.
    let env = TodoEnvironment::new(SystemClock);
    let store = Store::new(
        TodoState::seeded(BULK_SEED_COUNT),
        TodoReducer::new(),
        env,
    );

    let (count, next_id) = store.state(|s| (s.count(), s.next_id())).await;
    println!("Seeded {count} todos, next id is {next_id}");

    // Insert
    println!("\n>>> Insert \"buy milk\"");
    store
        .send(TodoAction::Insert {
            text: "buy milk".to_string(),
        })
        .await?;
    let last = store
        .state(|s| s.todos.last().map(|t| (t.id, t.text.clone())))
        .await;
    if let Some((id, text)) = last {
        println!("Appended [{id}] {text}");
    }

    // Toggle
    println!("\n>>> Toggle todo 1");
    store.send(TodoAction::Toggle { id: TodoId::new(1) }).await?;
    let checked = store.state(TodoState::checked_count).await;
    println!("Checked todos: {checked}");

    // Remove
    println!("\n>>> Remove todo 2");
    store.send(TodoAction::Remove { id: TodoId::new(2) }).await?;
    let count = store.state(TodoState::count).await;
    println!("Remaining todos: {count}");

    // Show the head of the collection
    println!("\nFirst five todos:");
    let head = store
        .state(|s| {
            s.todos
                .iter()
                .take(5)
                .map(|t| (t.id, t.text.clone(), t.checked))
                .collect::<Vec<_>>()
        })
        .await;
    for (id, text, checked) in head {
        let status = if checked { "x" } else { " " };
        println!("  [{status}] {id}: {text}");
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
