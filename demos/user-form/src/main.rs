//! CLI walkthrough of the registration form core.

use statekit_core::environment::SystemClock;
use statekit_runtime::Store;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user_form::{FormField, UserFormAction, UserFormEnvironment, UserFormReducer, UserFormState};

fn print_form(state: &UserFormState) {
    for field in FormField::ALL {
        let value = state.data.get(field);
        match state.error(field) {
            Some(message) => println!("  {field:<16} {value:?}  <- {message}"),
            None => println!("  {field:<16} {value:?}"),
        }
    }
    println!("  [{}]", state.submit_label());
    if let Some(banner) = state.success_message() {
        println!("  {banner}");
    }
}

async fn fill(
    store: &Store<UserFormState, UserFormAction, UserFormEnvironment, UserFormReducer>,
    values: [(FormField, &str); 5],
) -> anyhow::Result<()> {
    for (field, value) in values {
        store
            .send(UserFormAction::UpdateField {
                field,
                value: value.to_string(),
            })
            .await?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_form=debug,statekit_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== User Registration ===\n");

    let env = UserFormEnvironment::new(Arc::new(SystemClock));
    let store = Store::new(UserFormState::new(), UserFormReducer::new(), env);

    fill(
        &store,
        [
            (FormField::Username, "jo"),
            (FormField::Email, "jo@example"),
            (FormField::Age, "17"),
            (FormField::Password, "short"),
            (FormField::ConfirmPassword, "shorter"),
        ],
    )
    .await?;
    store.send(UserFormAction::Submit).await?;
    println!("Invalid submission:");
    store.state(print_form).await;

    fill(
        &store,
        [
            (FormField::Username, "john_doe"),
            (FormField::Email, "john@example.com"),
            (FormField::Age, "25"),
            (FormField::Password, "password123"),
            (FormField::ConfirmPassword, "password123"),
        ],
    )
    .await?;
    let mut handle = store.send(UserFormAction::Submit).await?;
    println!("\nWhile submitting:");
    store.state(print_form).await;

    handle.wait().await;
    println!("\nAfter submission:");
    store.state(print_form).await;

    store.shutdown_default().await?;
    Ok(())
}
