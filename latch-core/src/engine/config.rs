//! Toggle configuration.
//!
//! A [`ToggleConfig`] is what an owner passes on every evaluation. The
//! plain-data part can also be read from JSON through [`ToggleOptions`].

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::Result;
use crate::reducer::{Action, Reducer, ToggleReducer, ToggleState};

use super::advisory::{AdvisorySink, TracingSink};

/// Change notification callback: `(suggested next state, action)`.
pub type ChangeHandler = Arc<dyn Fn(&ToggleState, &Action) + Send + Sync>;

/// Who holds the authoritative `on` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Controlled,
    Uncontrolled,
}

impl Mode {
    /// Controlled iff an `on` value is present.
    pub fn of(on: Option<bool>) -> Self {
        match on {
            Some(_) => Mode::Controlled,
            None => Mode::Uncontrolled,
        }
    }
}

/// Options for a toggle instance.
///
/// # Example
///
/// ```rust
/// use latch_core::engine::{Mode, ToggleConfig};
///
/// let config = ToggleConfig::new()
///     .on(true)
///     .on_change(|state, action| println!("{} -> {:?}", action.kind(), state));
///
/// assert_eq!(config.mode(), Mode::Controlled);
/// ```
#[derive(Clone)]
pub struct ToggleConfig {
    pub(crate) initial_on: bool,
    pub(crate) reducer: Arc<dyn Reducer>,
    pub(crate) on_change: Option<ChangeHandler>,
    pub(crate) on: Option<bool>,
    pub(crate) read_only: bool,
    pub(crate) advisory_sink: Arc<dyn AdvisorySink>,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            initial_on: false,
            reducer: Arc::new(ToggleReducer),
            on_change: None,
            on: None,
            read_only: false,
            advisory_sink: Arc::new(TracingSink),
        }
    }
}

impl ToggleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from plain options, keeping the defaults for
    /// everything options cannot express.
    pub fn from_options(options: ToggleOptions) -> Self {
        Self::new()
            .initial_on(options.initial_on)
            .controlled(options.on)
            .read_only(options.read_only)
    }

    /// Seed for the internal store. Only read when an instance is created.
    pub fn initial_on(mut self, initial_on: bool) -> Self {
        self.initial_on = initial_on;
        self
    }

    /// Supply the controlled value.
    pub fn on(self, on: bool) -> Self {
        self.controlled(Some(on))
    }

    /// Supply or clear the controlled value.
    pub fn controlled(mut self, on: Option<bool>) -> Self {
        self.on = on;
        self
    }

    pub fn reducer<R>(mut self, reducer: R) -> Self
    where
        R: Reducer + 'static,
    {
        self.reducer = Arc::new(reducer);
        self
    }

    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(&ToggleState, &Action) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(on_change));
        self
    }

    /// Mark a controlled toggle as intentionally read-only.
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn advisory_sink<S>(mut self, sink: S) -> Self
    where
        S: AdvisorySink + 'static,
    {
        self.advisory_sink = Arc::new(sink);
        self
    }

    pub fn mode(&self) -> Mode {
        Mode::of(self.on)
    }

    pub fn controlled_on(&self) -> Option<bool> {
        self.on
    }

    pub fn has_on_change(&self) -> bool {
        self.on_change.is_some()
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }
}

impl fmt::Debug for ToggleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleConfig")
            .field("initial_on", &self.initial_on)
            .field("on", &self.on)
            .field("has_on_change", &self.has_on_change())
            .field("read_only", &self.read_only)
            .finish_non_exhaustive()
    }
}

/// The serializable subset of [`ToggleConfig`].
///
/// Field names follow the host's camelCase props; every field is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToggleOptions {
    pub initial_on: bool,
    pub on: Option<bool>,
    pub read_only: bool,
}

impl ToggleOptions {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
