//! Collapsible panel with a clickable header.
//!
//! The header shows a title and an arrow; the body is visible only while
//! the panel is open.

use statekit_core::{effect::Effect, reducer::Reducer, SmallVec};

/// Arrow shown while the panel is open
pub const OPEN_ICON: &str = "▼";

/// Arrow shown while the panel is closed
pub const CLOSED_ICON: &str = "▶";

/// Disclosure panel state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisclosureState {
    /// Header text
    pub title: String,
    /// Whether the body is shown
    pub open: bool,
}

impl DisclosureState {
    /// Panel with the given title, open or closed initially
    #[must_use]
    pub fn new(title: impl Into<String>, default_open: bool) -> Self {
        Self {
            title: title.into(),
            open: default_open,
        }
    }

    /// Closed panel with the given title
    #[must_use]
    pub fn closed(title: impl Into<String>) -> Self {
        Self::new(title, false)
    }

    /// Arrow for the current state
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        if self.open {
            OPEN_ICON
        } else {
            CLOSED_ICON
        }
    }

    /// Header line: arrow followed by the title
    #[must_use]
    pub fn header(&self) -> String {
        format!("{} {}", self.icon(), self.title)
    }
}

/// Disclosure actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclosureAction {
    /// Header clicked
    Toggle,
}

/// Disclosure environment (no dependencies)
#[derive(Debug, Clone, Copy, Default)]
pub struct DisclosureEnvironment;

/// Disclosure reducer
#[derive(Debug, Clone, Copy, Default)]
pub struct DisclosureReducer;

impl DisclosureReducer {
    /// Create a new disclosure reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for DisclosureReducer {
    type State = DisclosureState;
    type Action = DisclosureAction;
    type Environment = DisclosureEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _environment: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            DisclosureAction::Toggle => {
                state.open = !state.open;
                tracing::debug!(title = %state.title, open = state.open, "panel toggled");
            },
        }

        SmallVec::new()
    }
}
