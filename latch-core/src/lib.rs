//! Latch Core
//!
//! A toggle that can be driven by its own state (uncontrolled) or by an
//! owner (controlled) behind one interface. It provides:
//!
//! - A pluggable action reducer (`reducer`)
//! - The toggle engine: mode detection, dispatch-with-notify, advisories (`engine`)
//! - Prop getters that merge caller handlers and attributes with the
//!   toggle's own (`props`)
//! - The small signal/effect layer the engine is built on (`reactive`)
//!
//! The crate can be used as a native Rust library and, with the `python`
//! feature, as a Python extension module via PyO3.
//!
//! # Example
//!
//! ```rust
//! use latch_core::engine::{Toggle, ToggleConfig};
//! use latch_core::props::{Handler, PropSet, ACTIVATE, PRESSED_STATE};
//!
//! let toggle = Toggle::new(ToggleConfig::new());
//!
//! let props = toggle.toggler_props(
//!     PropSet::new()
//!         .with_attr("label", "custom-button")
//!         .with_handler(ACTIVATE, Handler::new(|_| println!("clicked"))),
//! );
//! assert_eq!(props.attr(PRESSED_STATE), Some(&serde_json::Value::Bool(false)));
//!
//! // Prints "clicked", then flips the toggle.
//! props.call(ACTIVATE, &[]).unwrap();
//! assert!(toggle.current_on());
//! ```

pub mod engine;
pub mod error;
pub mod props;
pub mod reactive;
pub mod reducer;

#[cfg(feature = "python")]
mod python;

pub use engine::{Advisory, Mode, Toggle, ToggleConfig, WeakToggle};
pub use error::{LatchError, Result, UnsupportedActionError};
pub use reducer::{Action, Reducer, ToggleReducer, ToggleState};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module definition.
///
/// This function is called by Python when importing the module.
#[cfg(feature = "python")]
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyToggle>()?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
