//! Reactive Primitives
//!
//! The small reactive layer the toggle engine is built on.
//!
//! # Concepts
//!
//! ## Signals
//!
//! A Signal is a container for mutable state. Subscribers registered on a
//! signal are notified after every write. The engine keeps its internal
//! (uncontrolled) store in a signal so a render collaborator can re-render
//! whenever the store changes.
//!
//! ## Effects
//!
//! An Effect is a side-effecting computation keyed on a dependency value.
//! It runs on the first evaluation and then again only when the dependency
//! value differs from the one it last ran with. The engine's advisory checks
//! are effects keyed on the configuration inputs they read.

mod signal;
mod effect;

pub use signal::{Signal, SubscriberId};
pub use effect::Effect;
