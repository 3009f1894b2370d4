//! Todo list state core.
//!
//! An ordered todo collection driven by four actions:
//!
//! - `Add`: append trimmed text (blank input is ignored)
//! - `Toggle`: flip one item's completion flag
//! - `Remove`: delete one item
//! - `ClearCompleted`: delete every completed item
//!
//! Active and completed counts are derived on demand, never stored.
//!
//! # Quick Start
//!
//! ```no_run
//! use statekit_runtime::Store;
//! use todo::{TodoAction, TodoEnvironment, TodoReducer, TodoState};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Store::new(TodoState::new(), TodoReducer::new(), TodoEnvironment);
//!
//! store.send(TodoAction::Add { text: "Buy milk".to_string() }).await?;
//!
//! let active = store.state(TodoState::active_count).await;
//! println!("Active: {active}");
//! # Ok(())
//! # }
//! ```

pub mod reducer;
pub mod types;

// Re-export commonly used types
pub use reducer::{TodoEnvironment, TodoReducer};
pub use types::{TodoAction, TodoId, TodoItem, TodoState, EMPTY_MESSAGE};
