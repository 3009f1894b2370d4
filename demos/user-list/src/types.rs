//! Domain types for the user list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Text shown while the list is loading
pub const LOADING_MESSAGE: &str = "Loading...";

/// Heading shown above a loaded list
pub const LIST_HEADING: &str = "Users";

/// One entry of the list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique id, used as the row key
    pub id: u64,
    /// Display name
    pub name: String,
    /// Contact address
    pub email: String,
}

impl User {
    /// Row text: name, then email
    #[must_use]
    pub fn row(&self) -> String {
        format!("{} - {}", self.name, self.email)
    }
}

/// What the list is showing
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UserListState {
    /// A fetch is in flight (initial state)
    #[default]
    Loading,

    /// The last fetch failed
    Failed {
        /// Human-readable reason
        message: String,
    },

    /// The last fetch succeeded
    Loaded {
        /// Users in display order
        users: Vec<User>,
        /// When the fetch finished
        loaded_at: DateTime<Utc>,
    },
}

impl UserListState {
    /// Whether a fetch is in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded users; empty unless the list is `Loaded`
    #[must_use]
    pub fn users(&self) -> &[User] {
        match self {
            Self::Loaded { users, .. } => users,
            Self::Loading | Self::Failed { .. } => &[],
        }
    }

    /// Error banner text, when the last fetch failed
    #[must_use]
    pub fn error_banner(&self) -> Option<String> {
        match self {
            Self::Failed { message } => Some(format!("Error: {message}")),
            Self::Loading | Self::Loaded { .. } => None,
        }
    }
}

/// Actions for the user list
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserListAction {
    /// Start (or restart) a fetch
    Load,

    /// The fetch returned users
    Loaded {
        /// Fetched users
        users: Vec<User>,
    },

    /// The fetch failed
    LoadFailed {
        /// Reason for the failure
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> User {
        User {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn starts_loading() {
        let state = UserListState::default();
        assert!(state.is_loading());
        assert!(state.users().is_empty());
        assert_eq!(state.error_banner(), None);
    }

    #[test]
    fn failed_shows_banner() {
        let state = UserListState::Failed {
            message: "Network error".to_string(),
        };
        assert_eq!(state.error_banner().as_deref(), Some("Error: Network error"));
        assert!(state.users().is_empty());
    }

    #[test]
    fn user_row_and_json_shape() {
        assert_eq!(ada().row(), "Ada - ada@example.com");

        let parsed: Result<User, _> =
            serde_json::from_str(r#"{"id":1,"name":"Ada","email":"ada@example.com"}"#);
        assert_eq!(parsed.ok(), Some(ada()));
    }
}
