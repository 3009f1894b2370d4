//! CLI walkthrough of the user list core.

use statekit_core::environment::SystemClock;
use statekit_runtime::Store;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user_list::{
    JsonFileSource, UserListAction, UserListEnvironment, UserListReducer, UserListState,
    LIST_HEADING, LOADING_MESSAGE,
};

fn print_list(state: &UserListState) {
    match state {
        UserListState::Loading => println!("{LOADING_MESSAGE}"),
        UserListState::Failed { .. } => {
            if let Some(banner) = state.error_banner() {
                println!("{banner}");
            }
        },
        UserListState::Loaded { users, .. } => {
            println!("{LIST_HEADING}");
            for user in users {
                println!("  {}", user.row());
            }
        },
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_list=debug,statekit_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path = std::env::args_os().nth(1).map_or_else(
        || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/users.json"),
        PathBuf::from,
    );

    let env = UserListEnvironment::new(
        Arc::new(JsonFileSource::new(path)),
        Arc::new(SystemClock),
    );
    let store = Store::new(UserListState::default(), UserListReducer::new(), env);

    let mut handle = store.send(UserListAction::Load).await?;
    store.state(print_list).await;

    handle.wait().await;
    store.state(print_list).await;

    Ok(())
}
