//! Counter walkthrough binary

use counter::{CounterAction, CounterEnvironment, CounterReducer, CounterState};
use statekit_runtime::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "counter=debug,statekit_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Counter ===\n");

    let store = Store::new(CounterState::default(), CounterReducer::new(), CounterEnvironment);
    println!("{}", store.state(CounterState::display).await);

    let steps = [
        CounterAction::Increment,
        CounterAction::Increment,
        CounterAction::Increment,
        CounterAction::Decrement,
        CounterAction::SetInput("not a number".to_string()),
        CounterAction::ApplyInput,
        CounterAction::SetInput("100".to_string()),
        CounterAction::ApplyInput,
        CounterAction::Reset,
    ];

    for action in steps {
        println!("\n>>> {action:?}");
        store.send(action).await?;
        let (display, input) = store.state(|s| (s.display(), s.input.clone())).await;
        println!("{display} (input: {input:?})");
    }

    Ok(())
}
