//! Registration form state core.
//!
//! Five text inputs, per-field validation, and a simulated submission with
//! a fixed latency. The reducer handles four actions:
//!
//! - `UpdateField`: store a new value and clear that field's error
//! - `Submit`: validate; on success start a submission and schedule its completion
//! - `SubmitCompleted`: finish the pending submission and clear the form
//! - `Reset`: clear values, errors, and status
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use statekit_core::environment::SystemClock;
//! use statekit_runtime::Store;
//! use user_form::{FormField, UserFormAction, UserFormEnvironment, UserFormReducer, UserFormState};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let env = UserFormEnvironment::new(Arc::new(SystemClock));
//! let store = Store::new(UserFormState::new(), UserFormReducer::new(), env);
//!
//! store
//!     .send(UserFormAction::UpdateField {
//!         field: FormField::Username,
//!         value: "jo".to_string(),
//!     })
//!     .await?;
//! store.send(UserFormAction::Submit).await?.wait().await;
//!
//! let error = store.state(|s| s.error(FormField::Username).map(str::to_string)).await;
//! println!("{error:?}");
//! # Ok(())
//! # }
//! ```

pub mod reducer;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use reducer::{UserFormAction, UserFormEnvironment, UserFormReducer, DEFAULT_SUBMIT_LATENCY};
pub use types::{
    FormData, FormErrors, FormField, ParseFieldError, SubmissionStatus, SubmitRejected,
    UserFormState, SUCCESS_MESSAGE,
};
