//! Reducer strategy and the default toggle reducer.

use crate::error::{Result, UnsupportedActionError};

use super::state::{Action, ToggleState};

/// Transition logic for a toggle.
///
/// The engine treats implementations opaquely: it only relies on `Toggle`
/// and `Reset` being handled.
pub trait Reducer: Send + Sync {
    fn reduce(&self, state: &ToggleState, action: &Action) -> Result<ToggleState>;
}

impl<F> Reducer for F
where
    F: Fn(&ToggleState, &Action) -> Result<ToggleState> + Send + Sync,
{
    fn reduce(&self, state: &ToggleState, action: &Action) -> Result<ToggleState> {
        self(state, action)
    }
}

/// The default reducer.
///
/// - `Toggle` flips `on`.
/// - `Reset` returns the action's initial state, ignoring the current one.
/// - Anything else fails with [`UnsupportedActionError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ToggleReducer;

impl Reducer for ToggleReducer {
    fn reduce(&self, state: &ToggleState, action: &Action) -> Result<ToggleState> {
        match action {
            Action::Toggle => Ok(ToggleState { on: !state.on }),
            Action::Reset { initial_state } => Ok(*initial_state),
            other => Err(UnsupportedActionError::new(other.kind()).into()),
        }
    }
}
