//! Toggle state and the actions that drive it.

use serde::{Deserialize, Serialize};

/// The state a reducer operates on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToggleState {
    pub on: bool,
}

impl ToggleState {
    pub fn new(on: bool) -> Self {
        Self { on }
    }
}

impl From<bool> for ToggleState {
    fn from(on: bool) -> Self {
        Self { on }
    }
}

/// An action dispatched by the engine.
///
/// Serialized with an internal `type` tag, e.g. `{"type":"toggle"}` or
/// `{"type":"reset","initialState":{"on":false}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Action {
    /// Flip the current value.
    Toggle,

    /// Return to the state the instance was created with.
    Reset {
        #[serde(rename = "initialState")]
        initial_state: ToggleState,
    },

    /// An action only a custom reducer understands.
    Custom {
        kind: String,
        #[serde(default)]
        payload: serde_json::Value,
    },
}

impl Action {
    /// Build a custom action with no payload.
    pub fn custom(kind: impl Into<String>) -> Self {
        Action::Custom {
            kind: kind.into(),
            payload: serde_json::Value::Null,
        }
    }

    /// The action's type tag.
    pub fn kind(&self) -> &str {
        match self {
            Action::Toggle => "toggle",
            Action::Reset { .. } => "reset",
            Action::Custom { kind, .. } => kind,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
