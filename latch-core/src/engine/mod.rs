//! Toggle Engine
//!
//! The engine owns one toggle instance. It decides, for every action,
//! whether to change its own state, tell its owner, or both.
//!
//! # Modes
//!
//! - **Uncontrolled**: no `on` value is configured. The engine's internal
//!   store is the source of truth and every action updates it.
//! - **Controlled**: the owner supplies `on`. The internal store is never
//!   written; actions only produce an `on_change` notification carrying the
//!   state the reducer suggests, and the owner decides whether to feed it
//!   back through [`Toggle::set_controlled`] or [`Toggle::evaluate`].
//!
//! The mode is recomputed on every evaluation, but the mode seen at
//! construction is remembered for the life of the instance. The engine
//! never migrates state between modes; a change is only reported.
//!
//! # Advisories
//!
//! Suspicious configurations are reported through an [`AdvisorySink`]
//! (by default, `tracing` warnings). They never fail an operation.
//! Each check runs like a host effect keyed on the inputs it reads, so it
//! reports when those inputs change into a bad combination, not on every
//! evaluation.

mod advisory;
mod config;
mod toggle;

pub use advisory::{Advisory, AdvisorySink, RecordingSink, TracingSink};
pub use config::{ChangeHandler, Mode, ToggleConfig, ToggleOptions};
pub use toggle::{Toggle, WeakToggle};
