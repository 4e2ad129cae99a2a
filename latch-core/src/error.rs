//! Error Types
//!
//! Only one class of failure is fatal in Latch: a reducer asked to handle an
//! action it does not recognize. Everything else the engine notices (mode
//! switches, a controlled toggle without a change handler) is an advisory
//! and goes through [`crate::engine::AdvisorySink`] instead.

use thiserror::Error;

/// A reducer received an action whose type it does not handle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported type: {kind}")]
pub struct UnsupportedActionError {
    /// The unrecognized action type tag.
    pub kind: String,
}

impl UnsupportedActionError {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

/// Errors returned by Latch operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LatchError {
    /// The configured reducer rejected an action.
    #[error(transparent)]
    UnsupportedAction(#[from] UnsupportedActionError),

    /// Options could not be parsed from JSON.
    #[error("invalid toggle options: {0}")]
    InvalidOptions(String),
}

impl From<serde_json::Error> for LatchError {
    fn from(err: serde_json::Error) -> Self {
        LatchError::InvalidOptions(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LatchError>;
