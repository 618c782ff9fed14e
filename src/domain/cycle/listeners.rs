//! Ordered listener registry owned by a cycle.

use std::fmt;
use std::rc::Rc;

use crate::ports::{same_listener, Listener};

/// Ordered list of listeners.
///
/// Features:
/// - Insertion order is notification order
/// - The same listener may be registered more than once
/// - Removal is by identity and drops every matching entry
pub struct ListenerRegistry<V> {
    listeners: Vec<Listener<V>>,
}

impl<V> ListenerRegistry<V> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Appends a listener.
    pub fn add(&mut self, listener: Listener<V>) {
        self.listeners.push(listener);
    }

    /// Removes every entry that is the same listener. Absent listeners are ignored.
    pub fn remove(&mut self, listener: &Listener<V>) {
        self.listeners.retain(|l| !same_listener(l, listener));
    }

    /// Number of registered entries, duplicates included.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Invokes every listener with `value`.
    ///
    /// Iterates a snapshot taken before the first call, so registrations
    /// changed during dispatch only affect later notifications.
    pub fn notify(&self, value: &V) {
        let snapshot: Vec<Listener<V>> = self.listeners.iter().map(Rc::clone).collect();
        for listener in snapshot {
            tracing::trace!(listener = listener.name(), "notifying listener");
            listener.on_change(value);
        }
    }
}

impl<V> Default for ListenerRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for ListenerRegistry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("len", &self.listeners.len())
            .finish()
    }
}
