//! Reducer logic for the registration form.
//!
//! Edits and resets are synchronous. A valid submit enters `Submitting` and
//! schedules a delayed `SubmitCompleted`, which stands in for the network
//! round trip. While that delay is pending further submits are ignored.

use crate::types::{FormField, SubmitRejected, UserFormState};
use serde::{Deserialize, Serialize};
use statekit_core::{
    delay, effect::Effect, environment::Clock, reducer::Reducer, smallvec, SmallVec,
};
use std::sync::Arc;
use std::time::Duration;

/// Simulated latency of a registration request
pub const DEFAULT_SUBMIT_LATENCY: Duration = Duration::from_millis(1000);

/// Environment dependencies for the form reducer
#[derive(Clone)]
pub struct UserFormEnvironment {
    /// Clock for stamping successful submissions
    pub clock: Arc<dyn Clock>,
    /// How long a submission stays pending
    pub submit_latency: Duration,
}

impl UserFormEnvironment {
    /// Environment with the default one second latency
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            submit_latency: DEFAULT_SUBMIT_LATENCY,
        }
    }

    /// Override the simulated latency
    #[must_use]
    pub const fn with_submit_latency(mut self, latency: Duration) -> Self {
        self.submit_latency = latency;
        self
    }
}

impl std::fmt::Debug for UserFormEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserFormEnvironment")
            .field("submit_latency", &self.submit_latency)
            .finish_non_exhaustive()
    }
}

/// Actions for the registration form
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserFormAction {
    /// An input changed
    UpdateField {
        /// Which input
        field: FormField,
        /// Its new raw value
        value: String,
    },

    /// The user pressed submit
    Submit,

    /// The simulated request finished
    SubmitCompleted {
        /// Ticket handed out when the submission started
        ticket: u64,
    },

    /// The user pressed reset
    Reset,
}

/// Reducer for the registration form
#[derive(Clone, Copy, Debug, Default)]
pub struct UserFormReducer;

impl UserFormReducer {
    /// Creates a new `UserFormReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for UserFormReducer {
    type State = UserFormState;
    type Action = UserFormAction;
    type Environment = UserFormEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            UserFormAction::UpdateField { field, value } => {
                state.update_field(field, value);
                SmallVec::new()
            },

            UserFormAction::Submit => match state.begin_submit() {
                Ok(ticket) => {
                    tracing::debug!(
                        ticket,
                        latency_ms = env.submit_latency.as_millis(),
                        "submission started"
                    );
                    smallvec![delay! {
                        duration: env.submit_latency,
                        action: UserFormAction::SubmitCompleted { ticket }
                    }]
                },
                Err(SubmitRejected::Invalid(errors)) => {
                    tracing::debug!(
                        invalid_fields = errors.len(),
                        "submission rejected by validation"
                    );
                    SmallVec::new()
                },
                Err(SubmitRejected::AlreadySubmitting) => {
                    tracing::debug!("submit ignored while a submission is pending");
                    SmallVec::new()
                },
            },

            UserFormAction::SubmitCompleted { ticket } => {
                if state.complete_submit(ticket, env.clock.now()) {
                    tracing::debug!(ticket, "submission completed");
                } else {
                    tracing::debug!(ticket, "stale submission completion ignored");
                }
                SmallVec::new()
            },

            UserFormAction::Reset => {
                state.reset();
                SmallVec::new()
            },
        }
    }
}
