//! Action Reducer
//!
//! The reducer is the only place toggle state transitions are defined. It is
//! a pure function from `(state, action)` to the next state and knows nothing
//! about controlled or uncontrolled mode; that decision belongs to the
//! engine.
//!
//! # Pluggable Reducers
//!
//! Consumers may swap in their own transition logic by implementing
//! [`Reducer`] (or passing a closure). A replacement must still handle
//! [`Action::Toggle`] and [`Action::Reset`]; it can also give meaning to
//! [`Action::Custom`] actions, which the default [`ToggleReducer`] rejects.

mod state;
mod reducer;

pub use state::{Action, ToggleState};
pub use reducer::{Reducer, ToggleReducer};
