//! Advisory events.
//!
//! Advisories describe an instance that works but is probably being driven
//! wrong. They are observability-only.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

/// A non-fatal condition detected while evaluating a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Advisory {
    /// Controlled with no `on_change` and not marked read-only. The toggle
    /// will silently ignore every toggle/reset request.
    ControlledWithoutChangeHandler,

    /// Created uncontrolled, now evaluated with an `on` value.
    UncontrolledToControlledTransition,

    /// Created controlled, now evaluated without an `on` value.
    ControlledToUncontrolledTransition,
}

impl Advisory {
    pub fn message(&self) -> &'static str {
        match self {
            Advisory::ControlledWithoutChangeHandler => {
                "Passed on without an onChange function, set readOnly to avoid this warning"
            }
            Advisory::UncontrolledToControlledTransition => "Going from Uncontrolled to Controlled",
            Advisory::ControlledToUncontrolledTransition => "Going from Controlled to Uncontrolled",
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Receives advisories from toggle instances.
pub trait AdvisorySink: Send + Sync {
    fn report(&self, toggle_id: u64, advisory: Advisory);
}

/// Logs advisories as `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AdvisorySink for TracingSink {
    fn report(&self, toggle_id: u64, advisory: Advisory) {
        tracing::warn!(toggle = toggle_id, advisory = ?advisory, "{}", advisory.message());
    }
}

/// Keeps every advisory it receives, in order, and also logs it.
///
/// Clones share the same record, so a test can keep one clone and hand
/// another to a [`ToggleConfig`](super::ToggleConfig).
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    records: Arc<Mutex<Vec<Advisory>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advisories(&self) -> Vec<Advisory> {
        self.records.lock().clone()
    }

    /// How many times `advisory` has been reported.
    pub fn count(&self, advisory: Advisory) -> usize {
        self.records.lock().iter().filter(|a| **a == advisory).count()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl AdvisorySink for RecordingSink {
    fn report(&self, toggle_id: u64, advisory: Advisory) {
        TracingSink.report(toggle_id, advisory);
        self.records.lock().push(advisory);
    }
}
