//! Toggle Implementation
//!
//! # Dispatch
//!
//! Every action (toggle, reset or custom) goes through the same two steps:
//!
//! 1. If uncontrolled, reduce the internal state and store the result.
//!    Subscribers to the store are notified here.
//!
//! 2. If an `on_change` handler is configured, reduce the *effective* value
//!    (the controlled value, or the internal one as it was before step 1)
//!    and pass the result to `on_change` together with the action.
//!
//! The steps are independent. A controlled toggle with no `on_change` does
//! nothing observable at all.
//!
//! # Re-entrancy
//!
//! No lock is held while the reducer, `on_change`, a prop handler or a store
//! subscriber runs. An owner may call back into the same toggle from any of
//! them, for example to feed the suggested state back in as the new
//! controlled value.
//!
//! A callback stored in the toggle's own configuration must capture a
//! [`WeakToggle`] (from [`Toggle::downgrade`]), not a `Toggle`; a strong
//! handle there keeps the instance alive forever.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use serde_json::Value;

use crate::error::Result;
use crate::props::{compose, Handler, PropSet, ACTIVATE, PRESSED_STATE};
use crate::reactive::{Effect, Signal, SubscriberId};
use crate::reducer::{Action, ToggleState};

use super::advisory::Advisory;
use super::config::{Mode, ToggleConfig};

static TOGGLE_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

fn next_toggle_id() -> u64 {
    TOGGLE_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Dependencies of the read-only check: `(controlled, has_on_change, read_only)`.
type ReadOnlyDeps = (bool, bool, bool);

struct Inner {
    id: u64,

    /// Internal state. Authoritative only while uncontrolled.
    store: Signal<ToggleState>,

    /// State captured at creation; the payload of every reset.
    initial_state: ToggleState,

    /// Mode observed at creation.
    initial_mode: Mode,

    /// Configuration from the most recent evaluation.
    config: RwLock<ToggleConfig>,

    read_only_check: Effect<ReadOnlyDeps, Option<Advisory>>,

    mode_check: Effect<Mode, Option<Advisory>>,
}

/// A toggle instance.
///
/// Clones are handles to the same instance. The instance is freed when the
/// last `Toggle` handle is dropped.
///
/// # Example
///
/// ```rust
/// use latch_core::engine::{Toggle, ToggleConfig};
///
/// let toggle = Toggle::new(ToggleConfig::new());
/// assert!(!toggle.current_on());
///
/// toggle.toggle().unwrap();
/// assert!(toggle.current_on());
///
/// toggle.reset().unwrap();
/// assert!(!toggle.current_on());
/// ```
#[derive(Clone)]
pub struct Toggle {
    inner: Arc<Inner>,
}

/// A non-owning handle to a [`Toggle`].
///
/// # Example
///
/// ```rust
/// use latch_core::engine::{Toggle, ToggleConfig};
///
/// let toggle = Toggle::new(ToggleConfig::new().on(false));
/// let handle = toggle.downgrade();
/// toggle.evaluate(ToggleConfig::new().on(false).on_change(move |state, _| {
///     if let Some(toggle) = handle.upgrade() {
///         toggle.set_controlled(Some(state.on));
///     }
/// }));
///
/// toggle.toggle().unwrap();
/// assert!(toggle.current_on());
/// ```
#[derive(Clone)]
pub struct WeakToggle {
    inner: Weak<Inner>,
}

impl WeakToggle {
    /// The toggle, if any strong handle is still alive.
    pub fn upgrade(&self) -> Option<Toggle> {
        self.inner.upgrade().map(|inner| Toggle { inner })
    }
}

impl fmt::Debug for WeakToggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakToggle")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}

impl Toggle {
    /// Create an instance and run its first evaluation.
    pub fn new(config: ToggleConfig) -> Self {
        let initial_state = ToggleState::new(config.initial_on);
        let initial_mode = config.mode();

        let read_only_check = Effect::new(|&(controlled, has_on_change, read_only): &ReadOnlyDeps| {
            (controlled && !has_on_change && !read_only)
                .then_some(Advisory::ControlledWithoutChangeHandler)
        });

        let mode_check = Effect::new(move |mode: &Mode| match (initial_mode, *mode) {
            (Mode::Uncontrolled, Mode::Controlled) => {
                Some(Advisory::UncontrolledToControlledTransition)
            }
            (Mode::Controlled, Mode::Uncontrolled) => {
                Some(Advisory::ControlledToUncontrolledTransition)
            }
            _ => None,
        });

        let toggle = Self {
            inner: Arc::new(Inner {
                id: next_toggle_id(),
                store: Signal::new(initial_state),
                initial_state,
                initial_mode,
                config: RwLock::new(config),
                read_only_check,
                mode_check,
            }),
        };

        tracing::trace!(
            toggle = toggle.inner.id,
            mode = ?initial_mode,
            initial_on = initial_state.on,
            "toggle created"
        );
        toggle.run_checks();
        toggle
    }

    pub fn id(&self) -> u64 {
        self.inner.id
    }

    /// A handle that does not keep the instance alive.
    pub fn downgrade(&self) -> WeakToggle {
        WeakToggle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Re-evaluate with a new configuration, as an owner does on each render.
    ///
    /// `initial_on` in the new configuration is ignored; the initial state
    /// is fixed at creation.
    pub fn evaluate(&self, config: ToggleConfig) {
        *self.inner.config.write() = config;
        self.run_checks();
    }

    /// Re-evaluate with only the controlled value changed.
    pub fn set_controlled(&self, on: Option<bool>) {
        self.inner.config.write().on = on;
        self.run_checks();
    }

    /// The effective value: the controlled one if present, else internal.
    pub fn current_on(&self) -> bool {
        let controlled = self.inner.config.read().on;
        controlled.unwrap_or_else(|| self.inner.store.get().on)
    }

    /// Mode at the most recent evaluation.
    pub fn mode(&self) -> Mode {
        self.inner.config.read().mode()
    }

    pub fn initial_mode(&self) -> Mode {
        self.inner.initial_mode
    }

    pub fn initial_state(&self) -> ToggleState {
        self.inner.initial_state
    }

    /// The internal store, whether or not it is currently authoritative.
    pub fn internal_state(&self) -> ToggleState {
        self.inner.store.get()
    }

    /// Flip the toggle.
    pub fn toggle(&self) -> Result<()> {
        self.dispatch(Action::Toggle)
    }

    /// Return to the initial state.
    pub fn reset(&self) -> Result<()> {
        self.dispatch(Action::Reset {
            initial_state: self.inner.initial_state,
        })
    }

    /// Route `action` through the configured reducer and `on_change`.
    pub fn dispatch(&self, action: Action) -> Result<()> {
        let (mode, effective, reducer, on_change) = {
            let config = self.inner.config.read();
            let effective = config.on.unwrap_or_else(|| self.inner.store.get().on);
            (
                config.mode(),
                effective,
                Arc::clone(&config.reducer),
                config.on_change.clone(),
            )
        };

        if mode == Mode::Uncontrolled {
            let current = self.inner.store.get();
            let next = reducer.reduce(&current, &action).map_err(|err| {
                tracing::error!(toggle = self.inner.id, action = action.kind(), %err, "reducer failed");
                err
            })?;
            tracing::debug!(toggle = self.inner.id, action = action.kind(), on = next.on, "state updated");
            self.inner.store.set(next);
        }

        if let Some(on_change) = on_change {
            let suggested = reducer
                .reduce(&ToggleState::new(effective), &action)
                .map_err(|err| {
                    tracing::error!(toggle = self.inner.id, action = action.kind(), %err, "reducer failed");
                    err
                })?;
            tracing::debug!(
                toggle = self.inner.id,
                action = action.kind(),
                mode = ?mode,
                on = suggested.on,
                "notifying owner"
            );
            on_change(&suggested, &action);
        }

        Ok(())
    }

    /// Props for the element that flips the toggle.
    ///
    /// Owned props are the pressed state and an `activate` handler that runs
    /// after any `activate` handler in `overrides`.
    pub fn toggler_props(&self, overrides: PropSet) -> PropSet {
        let toggle = self.clone();
        let owned = PropSet::new()
            .with_attr(PRESSED_STATE, self.current_on())
            .with_handler(ACTIVATE, Handler::fallible(move |_: &[Value]| toggle.toggle()));

        compose(owned, overrides)
    }

    /// Props for the element that resets the toggle.
    pub fn resetter_props(&self, overrides: PropSet) -> PropSet {
        let toggle = self.clone();
        let owned = PropSet::new()
            .with_handler(ACTIVATE, Handler::fallible(move |_: &[Value]| toggle.reset()));

        compose(owned, overrides)
    }

    /// Be notified whenever the internal store changes.
    pub fn subscribe<F>(&self, notify: F) -> SubscriberId
    where
        F: Fn(&ToggleState) + Send + Sync + 'static,
    {
        self.inner.store.subscribe(notify)
    }

    pub fn unsubscribe(&self, subscriber_id: SubscriberId) -> bool {
        self.inner.store.unsubscribe(subscriber_id)
    }

    fn run_checks(&self) {
        let (read_only_deps, mode, sink) = {
            let config = self.inner.config.read();
            (
                (config.on.is_some(), config.has_on_change(), config.read_only),
                config.mode(),
                Arc::clone(&config.advisory_sink),
            )
        };

        let advisories = [
            self.inner.read_only_check.evaluate(read_only_deps).flatten(),
            self.inner.mode_check.evaluate(mode).flatten(),
        ];

        for advisory in advisories.into_iter().flatten() {
            sink.report(self.inner.id, advisory);
        }
    }
}

impl fmt::Debug for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toggle")
            .field("id", &self.inner.id)
            .field("on", &self.current_on())
            .field("mode", &self.mode())
            .field("initial_mode", &self.inner.initial_mode)
            .finish()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
