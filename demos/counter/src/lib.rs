//! # Counter
//!
//! A counter with increment, decrement, and reset buttons plus a text input
//! that sets the count directly.
//!
//! The counter is a pure state machine: every action is handled
//! synchronously and no effects are produced.
//!
//! ## Example
//!
//! ```no_run
//! use counter::{CounterAction, CounterEnvironment, CounterReducer, CounterState};
//! use statekit_runtime::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Store::new(CounterState::default(), CounterReducer::new(), CounterEnvironment);
//!
//! store.send(CounterAction::Increment).await?;
//! store.send(CounterAction::SetInput("42".to_string())).await?;
//! store.send(CounterAction::ApplyInput).await?;
//! assert_eq!(store.state(|s| s.count).await, 42);
//! # Ok(())
//! # }
//! ```

use statekit_core::{effect::Effect, reducer::Reducer, SmallVec};

/// Counter state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterState {
    /// Current count value
    pub count: i64,
    /// Raw contents of the set-value input
    pub input: String,
}

impl CounterState {
    /// Text shown above the buttons
    #[must_use]
    pub fn display(&self) -> String {
        format!("Count: {}", self.count)
    }

    /// Try to replace the count with the number typed into the input
    ///
    /// Accepts the same prefixes a lenient integer parse does: leading
    /// whitespace, an optional sign, then digits; anything after the digits
    /// is ignored. On success the input is cleared. Returns `false` and
    /// changes nothing when no number can be read.
    pub fn apply_input(&mut self) -> bool {
        match leading_int(&self.input) {
            Some(value) => {
                self.count = value;
                self.input.clear();
                true
            },
            None => false,
        }
    }
}

/// Longest `[+-]?[0-9]+` prefix after leading whitespace, as an `i64`
///
/// A prefix outside the `i64` range is `None`: the count cannot hold it, so
/// the input is left for the user to fix. The form's age parser saturates
/// instead, because any oversized age fails its range check anyway.
fn leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    trimmed[..sign_len + digits_len].parse().ok()
}

/// Counter actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterAction {
    /// Increment the counter by 1
    Increment,
    /// Decrement the counter by 1
    Decrement,
    /// Reset the counter to 0
    Reset,
    /// The set-value input changed
    SetInput(String),
    /// The user pressed "Set"
    ApplyInput,
}

/// Counter environment
///
/// The counter has no dependencies.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterEnvironment;

/// Counter reducer
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterReducer;

impl CounterReducer {
    /// Create a new counter reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;
    type Environment = CounterEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _environment: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CounterAction::Increment => {
                state.count = state.count.saturating_add(1);
            },
            CounterAction::Decrement => {
                state.count = state.count.saturating_sub(1);
            },
            CounterAction::Reset => {
                state.count = 0;
            },
            CounterAction::SetInput(text) => {
                state.input = text;
            },
            CounterAction::ApplyInput => {
                if !state.apply_input() {
                    tracing::debug!(input = %state.input, "input is not a number, count unchanged");
                }
            },
        }

        SmallVec::new()
    }
}
