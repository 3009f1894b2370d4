//! Reducer logic for the user list.

use crate::source::UserSource;
use crate::types::{UserListAction, UserListState};
use statekit_core::{
    async_effect, effect::Effect, environment::Clock, reducer::Reducer, smallvec, SmallVec,
};
use std::sync::Arc;

/// Environment dependencies for the user list
#[derive(Clone)]
pub struct UserListEnvironment {
    /// Where users are fetched from
    pub source: Arc<dyn UserSource>,
    /// Stamps successful loads
    pub clock: Arc<dyn Clock>,
}

impl UserListEnvironment {
    /// Environment over the given source and clock
    #[must_use]
    pub fn new(source: Arc<dyn UserSource>, clock: Arc<dyn Clock>) -> Self {
        Self { source, clock }
    }
}

impl std::fmt::Debug for UserListEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserListEnvironment").finish_non_exhaustive()
    }
}

/// Reducer for the user list
///
/// `Load` enters `Loading` and fetches through the environment's source;
/// the fetch result comes back as `Loaded` or `LoadFailed`. A result always
/// replaces whatever the list showed before.
#[derive(Clone, Copy, Debug, Default)]
pub struct UserListReducer;

impl UserListReducer {
    /// Creates a new `UserListReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for UserListReducer {
    type State = UserListState;
    type Action = UserListAction;
    type Environment = UserListEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            UserListAction::Load => {
                *state = UserListState::Loading;
                let source = Arc::clone(&env.source);
                smallvec![async_effect! {
                    match source.fetch_users().await {
                        Ok(users) => Some(UserListAction::Loaded { users }),
                        Err(error) => Some(UserListAction::LoadFailed {
                            message: error.to_string(),
                        }),
                    }
                }]
            },

            UserListAction::Loaded { users } => {
                tracing::debug!(count = users.len(), "users loaded");
                *state = UserListState::Loaded {
                    users,
                    loaded_at: env.clock.now(),
                };
                SmallVec::new()
            },

            UserListAction::LoadFailed { message } => {
                tracing::warn!(%message, "user fetch failed");
                *state = UserListState::Failed { message };
                SmallVec::new()
            },
        }
    }
}
