//! Effect Implementation
//!
//! An Effect is a computation that re-runs only when its dependencies change.
//!
//! # How Effects Work
//!
//! 1. An effect is created with a function of its dependency value. It does
//!    not run until the first call to [`Effect::evaluate`].
//!
//! 2. Each `evaluate` compares the supplied dependencies with the ones the
//!    effect last ran with. On the first evaluation, or when they differ,
//!    the function runs and its result is returned.
//!
//! 3. When the dependencies are unchanged, `evaluate` returns `None` without
//!    running anything.
//!
//! This mirrors how UI hosts run effects once per render in which a listed
//! dependency changed, rather than on every render.

use std::sync::Arc;

use parking_lot::Mutex;

/// A computation keyed on a dependency value of type `D`, producing `R`.
///
/// # Example
///
/// ```rust
/// use latch_core::reactive::Effect;
///
/// let effect = Effect::new(|count: &i32| count * 2);
///
/// assert_eq!(effect.evaluate(1), Some(2));
/// assert_eq!(effect.evaluate(1), None); // unchanged, skipped
/// assert_eq!(effect.evaluate(3), Some(6));
/// ```
pub struct Effect<D, R = ()>
where
    D: Clone + PartialEq + Send + Sync + 'static,
{
    run: Arc<dyn Fn(&D) -> R + Send + Sync>,

    /// Dependencies the effect last ran with; `None` before the first run.
    last_deps: Mutex<Option<D>>,
}

impl<D, R> Effect<D, R>
where
    D: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(&D) -> R + Send + Sync + 'static,
    {
        Self {
            run: Arc::new(run),
            last_deps: Mutex::new(None),
        }
    }

    /// Run the effect if `deps` differ from the previous run.
    ///
    /// Returns the function's result when it ran, `None` when it was skipped.
    pub fn evaluate(&self, deps: D) -> Option<R> {
        {
            let mut last = self.last_deps.lock();
            if last.as_ref() == Some(&deps) {
                return None;
            }
            *last = Some(deps.clone());
        }

        Some((self.run)(&deps))
    }
}

impl<D, R> std::fmt::Debug for Effect<D, R>
where
    D: Clone + PartialEq + Send + Sync + std::fmt::Debug + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Effect")
            .field("last_deps", &*self.last_deps.lock())
            .finish()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
