//! Python Bindings
//!
//! Exposes [`Toggle`] to Python as `latch._core.Toggle`. Built only with the
//! `python` feature.

use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;

use crate::engine::{Toggle, ToggleConfig};
use crate::error::LatchError;

fn to_py_err(err: LatchError) -> PyErr {
    PyRuntimeError::new_err(err.to_string())
}

/// Python-exposed toggle.
///
/// `on_change`, if given, is called as `on_change(on, action_type)` with the
/// suggested next value.
#[pyclass(name = "Toggle")]
pub struct PyToggle {
    toggle: Toggle,
}

#[pymethods]
impl PyToggle {
    #[new]
    #[pyo3(signature = (initial_on=false, on=None, on_change=None, read_only=false))]
    fn new(initial_on: bool, on: Option<bool>, on_change: Option<PyObject>, read_only: bool) -> Self {
        let mut config = ToggleConfig::new()
            .initial_on(initial_on)
            .controlled(on)
            .read_only(read_only);

        if let Some(callback) = on_change {
            config = config.on_change(move |state, action| {
                Python::with_gil(|py| {
                    if let Err(err) = callback.call1(py, (state.on, action.kind())) {
                        err.print(py);
                    }
                });
            });
        }

        Self {
            toggle: Toggle::new(config),
        }
    }

    #[getter]
    fn on(&self) -> bool {
        self.toggle.current_on()
    }

    fn toggle(&self) -> PyResult<()> {
        self.toggle.toggle().map_err(to_py_err)
    }

    fn reset(&self) -> PyResult<()> {
        self.toggle.reset().map_err(to_py_err)
    }

    /// Feed a new controlled value, or `None` to release control.
    #[pyo3(signature = (on=None))]
    fn set_controlled(&self, on: Option<bool>) {
        self.toggle.set_controlled(on);
    }

    #[getter]
    fn id(&self) -> u64 {
        self.toggle.id()
    }

    fn __repr__(&self) -> String {
        format!(
            "Toggle(id={}, on={}, mode={:?})",
            self.toggle.id(),
            self.toggle.current_on(),
            self.toggle.mode()
        )
    }
}
