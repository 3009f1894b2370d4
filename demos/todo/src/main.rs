//! CLI walkthrough of the todo list core.

use statekit_runtime::Store;
use todo::{TodoAction, TodoEnvironment, TodoId, TodoReducer, TodoState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_list(state: &TodoState) {
    if let Some(message) = state.empty_message() {
        println!("  {message}");
    }
    for todo in state.items() {
        let status = if todo.completed { "✓" } else { " " };
        println!("  [{}] #{} {}", status, todo.id, todo.text);
    }
    println!(
        "  Active: {} | Completed: {}",
        state.active_count(),
        state.completed_count()
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo=debug,statekit_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Todo List ===\n");

    let store = Store::new(TodoState::new(), TodoReducer::new(), TodoEnvironment);

    for text in ["Morning workout", "Team meeting", "   ", "Code review"] {
        store
            .send(TodoAction::Add {
                text: text.to_string(),
            })
            .await?;
    }
    println!("After adding:");
    store.state(print_list).await;

    store.send(TodoAction::Toggle { id: TodoId::new(1) }).await?;
    store.send(TodoAction::Toggle { id: TodoId::new(2) }).await?;
    println!("\nAfter completing two:");
    store.state(print_list).await;

    store.send(TodoAction::ClearCompleted).await?;
    println!("\nAfter clearing completed:");
    store.state(print_list).await;

    store.send(TodoAction::Remove { id: TodoId::new(3) }).await?;
    println!("\nAfter deleting the last one:");
    store.state(print_list).await;

    Ok(())
}
