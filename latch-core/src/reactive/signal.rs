//! Signal Implementation
//!
//! A Signal holds a value and a list of callbacks to run after each write.
//!
//! # How Signals Work
//!
//! 1. `get` returns a clone of the current value.
//!
//! 2. `set` replaces the value, then notifies subscribers.
//!
//! 3. Subscribers are invoked in registration order, with no lock held, so a
//!    subscriber may read the signal or even subscribe/unsubscribe.
//!
//! # Thread Safety
//!
//! The value and the subscriber list are each protected by a
//! `parking_lot::RwLock`.

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

/// Identifies a callback registered with [`Signal::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

impl SubscriberId {
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for SubscriberId {
    fn default() -> Self {
        Self::new()
    }
}

type Notifier<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A reactive cell holding a value of type T.
///
/// # Example
///
/// ```rust
/// use latch_core::reactive::Signal;
///
/// let count = Signal::new(0);
/// count.set(5);
/// assert_eq!(count.get(), 5);
/// ```
pub struct Signal<T>
where
    T: Clone + Send + Sync + 'static,
{
    value: RwLock<T>,
    notifiers: RwLock<Vec<(SubscriberId, Notifier<T>)>>,
}

impl<T> Signal<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a new signal with the given initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
            notifiers: RwLock::new(Vec::new()),
        }
    }

    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Set a new value and notify subscribers.
    pub fn set(&self, value: T) {
        *self.value.write() = value.clone();
        self.notify_subscribers(&value);
    }

    /// Register a callback invoked with the new value after every write.
    pub fn subscribe<F>(&self, notify: F) -> SubscriberId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = SubscriberId::new();
        let notify: Notifier<T> = Arc::new(notify);
        self.notifiers.write().push((id, notify));
        id
    }

    /// Remove a subscriber. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, subscriber_id: SubscriberId) -> bool {
        let mut notifiers = self.notifiers.write();
        let before = notifiers.len();
        notifiers.retain(|(id, _)| *id != subscriber_id);
        notifiers.len() != before
    }

    fn notify_subscribers(&self, value: &T) {
        // Snapshot so callbacks run without the lock.
        let notifiers: Vec<Notifier<T>> = self
            .notifiers
            .read()
            .iter()
            .map(|(_, notify)| Arc::clone(notify))
            .collect();

        for notify in notifiers {
            notify(value);
        }
    }
}

impl<T> Debug for Signal<T>
where
    T: Clone + Send + Sync + Debug + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("value", &self.get())
            .field("subscriber_count", &self.notifiers.read().len())
            .finish()
    }
}
