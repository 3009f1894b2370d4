//! Reducer logic for the todo list.
//!
//! Every action is a synchronous edit of the ordered collection. Blank text
//! and unknown ids are silent no-ops, never errors.

use crate::types::{TodoAction, TodoState};
use statekit_core::{effect::Effect, reducer::Reducer, SmallVec};

/// Environment dependencies for the todo reducer
///
/// The todo list needs none; ids come from the state itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoEnvironment;

/// Reducer for the todo list
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::Add { text } => match state.add(&text) {
                Some(id) => tracing::debug!(%id, "todo added"),
                None => tracing::debug!("ignored blank todo"),
            },
            TodoAction::Toggle { id } => {
                if !state.toggle(id) {
                    tracing::debug!(%id, "toggle for unknown todo ignored");
                }
            },
            TodoAction::Remove { id } => {
                if state.remove(id).is_none() {
                    tracing::debug!(%id, "remove for unknown todo ignored");
                }
            },
            TodoAction::ClearCompleted => {
                let removed = state.clear_completed();
                tracing::debug!(removed, "cleared completed todos");
            },
        }

        SmallVec::new()
    }
}
