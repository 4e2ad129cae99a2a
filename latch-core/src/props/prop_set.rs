//! Prop sets and handlers.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;
use smallvec::SmallVec;

use crate::error::Result;

type HandlerFn = dyn Fn(&[Value]) -> Result<()> + Send + Sync;

/// An event handler stored in a [`PropSet`].
///
/// A handler is a chain of one or more callbacks. Calling it forwards the
/// same arguments to each callback in order and stops at the first error.
#[derive(Clone)]
pub struct Handler {
    chain: SmallVec<[Arc<HandlerFn>; 2]>,
}

impl Handler {
    /// Wrap an infallible callback.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) + Send + Sync + 'static,
    {
        Self::fallible(move |args| {
            f(args);
            Ok(())
        })
    }

    /// Wrap a callback that can fail, such as one that dispatches an action.
    pub fn fallible<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Result<()> + Send + Sync + 'static,
    {
        let mut chain = SmallVec::new();
        chain.push(Arc::new(f) as Arc<HandlerFn>);
        Self { chain }
    }

    /// Call every callback in the chain with `args`.
    pub fn call(&self, args: &[Value]) -> Result<()> {
        for callback in &self.chain {
            callback(args)?;
        }
        Ok(())
    }

    /// A handler that runs `self`'s chain, then `next`'s.
    pub fn then(&self, next: &Handler) -> Handler {
        let mut chain = self.chain.clone();
        chain.extend(next.chain.iter().cloned());
        Handler { chain }
    }

    /// Number of callbacks in the chain.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("callbacks", &self.chain.len())
            .finish()
    }
}

/// A value in a [`PropSet`].
#[derive(Debug, Clone)]
pub enum PropValue {
    Attr(Value),
    Handler(Handler),
}

impl PropValue {
    pub fn as_attr(&self) -> Option<&Value> {
        match self {
            PropValue::Attr(value) => Some(value),
            PropValue::Handler(_) => None,
        }
    }

    pub fn as_handler(&self) -> Option<&Handler> {
        match self {
            PropValue::Handler(handler) => Some(handler),
            PropValue::Attr(_) => None,
        }
    }

    /// `true` for an explicit `null` attribute, which the composer treats
    /// like a missing key when it would otherwise replace a handler.
    pub fn is_absent(&self) -> bool {
        matches!(self, PropValue::Attr(Value::Null))
    }
}

impl From<Handler> for PropValue {
    fn from(handler: Handler) -> Self {
        PropValue::Handler(handler)
    }
}

impl From<Value> for PropValue {
    fn from(value: Value) -> Self {
        PropValue::Attr(value)
    }
}

/// An insertion-ordered mapping from attribute name to attribute or handler.
///
/// # Example
///
/// ```rust
/// use latch_core::props::{Handler, PropSet};
///
/// let props = PropSet::new()
///     .with_attr("label", "custom-button")
///     .with_handler("activate", Handler::new(|_| println!("clicked")));
///
/// assert_eq!(props.attr("label"), Some(&serde_json::json!("custom-button")));
/// props.call("activate", &[]).unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropSet {
    entries: IndexMap<String, PropValue>,
}

impl PropSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, PropValue::Attr(value.into()));
        self
    }

    pub fn with_handler(mut self, key: impl Into<String>, handler: Handler) -> Self {
        self.insert(key, PropValue::Handler(handler));
        self
    }

    /// Insert a value, replacing any previous value but keeping its position.
    pub fn insert(&mut self, key: impl Into<String>, value: PropValue) -> Option<PropValue> {
        self.entries.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        self.entries.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.get(key).and_then(PropValue::as_attr)
    }

    pub fn handler(&self, key: &str) -> Option<&Handler> {
        self.get(key).and_then(PropValue::as_handler)
    }

    /// Invoke the handler stored under `key`. A missing handler is a no-op.
    pub fn call(&self, key: &str, args: &[Value]) -> Result<()> {
        match self.handler(key) {
            Some(handler) => handler.call(args),
            None => Ok(()),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, PropValue)> for PropSet {
    fn from_iter<I: IntoIterator<Item = (K, PropValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(key, value)| (key.into(), value)).collect(),
        }
    }
}

impl IntoIterator for PropSet {
    type Item = (String, PropValue);
    type IntoIter = indexmap::map::IntoIter<String, PropValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
