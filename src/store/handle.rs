use crate::registry::Entries;
use std::fmt;
use std::sync::Arc;

/// An accessor bound to one named store in a registry.
///
/// Handles never own state. Every [`get_state`](StoreHandle::get_state) call
/// re-reads the registry's current entry, so a handle that outlives its store
/// reads `None` rather than a stale value.
pub struct StoreHandle<T> {
    name: String,
    entries: Entries<T>,
}

impl<T> StoreHandle<T> {
    pub(crate) fn new(name: String, entries: Entries<T>) -> Self {
        Self { name, entries }
    }

    /// The name this handle is bound to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register interest in state changes.
    ///
    /// Placeholder: currently does nothing. A future revision will keep an
    /// observer list and invoke callbacks when the bound store's state
    /// changes.
    pub fn subscribe<F>(&self, _callback: F)
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
    }

    /// Dispatch an action against the bound store.
    ///
    /// Placeholder: currently does nothing. A future revision will route
    /// actions through a reducer to produce the next state.
    pub fn dispatch<A>(&self, _action: A) {}
}

impl<T: Clone> StoreHandle<T> {
    /// Current state of the bound store, or `None` once it has been
    /// destroyed.
    pub fn get_state(&self) -> Option<T> {
        self.entries.read().unwrap().get(&self.name).cloned()
    }
}

impl<T> fmt::Debug for StoreHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreHandle")
            .field("name", &self.name)
            .finish()
    }
}

impl<T> Clone for StoreHandle<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            entries: Arc::clone(&self.entries),
        }
    }
}
