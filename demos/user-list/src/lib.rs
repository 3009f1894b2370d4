//! User list state core.
//!
//! Shows a loading indicator, then either the fetched users or an error.
//! The data source is injected through the environment so tests can swap
//! the JSON file for an in-memory fake.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use statekit_core::environment::SystemClock;
//! use statekit_runtime::Store;
//! use user_list::{
//!     JsonFileSource, UserListAction, UserListEnvironment, UserListReducer, UserListState,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let env = UserListEnvironment::new(
//!     Arc::new(JsonFileSource::new("data/users.json")),
//!     Arc::new(SystemClock),
//! );
//! let store = Store::new(UserListState::default(), UserListReducer::new(), env);
//!
//! store.send(UserListAction::Load).await?.wait().await;
//! let count = store.state(|s| s.users().len()).await;
//! println!("{count} users");
//! # Ok(())
//! # }
//! ```

pub mod reducer;
pub mod source;
pub mod types;

// Re-export commonly used types
pub use reducer::{UserListEnvironment, UserListReducer};
pub use source::{FetchError, JsonFileSource, UserSource};
pub use types::{User, UserListAction, UserListState, LIST_HEADING, LOADING_MESSAGE};
