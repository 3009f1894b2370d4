//! Disclosure panel walkthrough binary

use disclosure::{DisclosureAction, DisclosureEnvironment, DisclosureReducer, DisclosureState};
use statekit_runtime::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const BODY: &str = "Panels start closed unless opened by default.";

fn print_panel(state: &DisclosureState) {
    println!("{}", state.header());
    if state.open {
        println!("    {BODY}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "disclosure=debug,statekit_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = Store::new(
        DisclosureState::closed("How does it work?"),
        DisclosureReducer::new(),
        DisclosureEnvironment,
    );

    store.state(print_panel).await;
    for _ in 0..2 {
        store.send(DisclosureAction::Toggle).await?;
        store.state(print_panel).await;
    }

    Ok(())
}
