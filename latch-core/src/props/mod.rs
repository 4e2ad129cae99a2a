//! Prop Getters
//!
//! A prop getter hands a render collaborator everything it needs to wire up
//! an interactive element: attributes (such as the pressed state) and event
//! handlers (such as `activate`). Callers pass their own [`PropSet`] of
//! overrides, and the getter merges the two with [`compose`].
//!
//! # Merge Rules
//!
//! For each key:
//!
//! | owned       | override          | result                               |
//! |-------------|-------------------|--------------------------------------|
//! | handler `g` | handler `f`       | handler calling `f` then `g`         |
//! | handler `g` | absent / `null`   | `g`                                  |
//! | handler `g` | attribute `v`     | `v`                                  |
//! | attribute   | anything          | the override                         |
//! | absent      | anything          | the override                         |
//! | anything    | absent            | the owned value                      |
//!
//! Handlers accumulate: composing an already composed handler extends its
//! chain, so layering owned props, library defaults and caller overrides
//! fires every handler, outermost caller first.

mod prop_set;
mod compose;

pub use prop_set::{Handler, PropSet, PropValue};
pub use compose::{call_all, compose};

/// Key carrying the boolean pressed/on state.
pub const PRESSED_STATE: &str = "pressed-state";

/// Key carrying the handler a render collaborator calls on user interaction.
pub const ACTIVATE: &str = "activate";
