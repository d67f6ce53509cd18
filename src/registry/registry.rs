use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::error::StoreError;
use crate::store::StoreHandle;

/// Shared entry map. Handles hold a second reference so they always read the
/// registry's current value at call time.
pub(crate) type Entries<T> = Arc<RwLock<HashMap<String, T>>>;

/// A registry of named state stores.
///
/// Each entry binds a unique name to a state value of type `T`. The registry
/// exposes four operations: [`create_store`](StoreRegistry::create_store),
/// [`destroy_store`](StoreRegistry::destroy_store),
/// [`get_store`](StoreRegistry::get_store) and
/// [`store_exists`](StoreRegistry::store_exists). Creation and lookup return
/// a [`StoreHandle`] bound to the entry's name rather than a copy of the
/// state.
///
/// Registries are explicitly constructed and cheap to clone; clones share the
/// same entries. Construct independent registries when isolation is wanted
/// (e.g. one per test).
///
/// # Example
///
/// ```
/// use canister::StoreRegistry;
///
/// let registry = StoreRegistry::new();
/// registry.create_store("counters", vec![0u32, 1, 2]).unwrap();
///
/// let store = registry.get_store("counters").unwrap();
/// assert_eq!(store.get_state(), Some(vec![0, 1, 2]));
///
/// let last = registry.destroy_store("counters").unwrap();
/// assert_eq!(last, vec![0, 1, 2]);
/// assert!(!registry.store_exists("counters"));
/// ```
pub struct StoreRegistry<T> {
    entries: Entries<T>,
}

impl<T> StoreRegistry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a store named `name` holding `initial`.
    ///
    /// Fails with [`StoreError::InvalidArgument`] when `name` is empty and
    /// with [`StoreError::NameConflict`] when the name is already taken; a
    /// conflicting create leaves the existing entry untouched.
    pub fn create_store(
        &self,
        name: impl Into<String>,
        initial: T,
    ) -> Result<StoreHandle<T>, StoreError> {
        let name = name.into();
        if name.is_empty() {
            debug!("name is missing, store will not be created");
            return Err(StoreError::InvalidArgument(
                "Name is required to create a store",
            ));
        }

        let mut entries = self.entries.write().unwrap();
        if entries.contains_key(&name) {
            debug!(store = %name, "name already in use, aborting store creation");
            return Err(StoreError::NameConflict);
        }

        entries.insert(name.clone(), initial);
        drop(entries);
        debug!(store = %name, "created new store");

        Ok(StoreHandle::new(name, Arc::clone(&self.entries)))
    }

    /// Destroy the store named `name`, returning its final state.
    ///
    /// Handles bound to the name remain valid but read `None` afterwards.
    pub fn destroy_store(&self, name: &str) -> Result<T, StoreError> {
        if name.is_empty() {
            debug!("name is missing, store will not be destroyed");
            return Err(StoreError::InvalidArgument(
                "Name is required for destroying a store",
            ));
        }

        let mut entries = self.entries.write().unwrap();
        let Some(state) = entries.remove(name) else {
            debug!(store = %name, "store does not exist, nothing to destroy");
            return Err(StoreError::NotFound(
                "Store does not exist. Please try again with a correct name for destroying the store.",
            ));
        };
        drop(entries);
        debug!(store = %name, "destroyed store");

        Ok(state)
    }

    /// Get a fresh handle to the store named `name`.
    ///
    /// Handles are not identity-stable: every call returns a new one,
    /// equivalent in behavior to the handle returned by
    /// [`create_store`](StoreRegistry::create_store).
    pub fn get_store(&self, name: &str) -> Result<StoreHandle<T>, StoreError> {
        debug!(store = %name, "retrieving store");
        if name.is_empty() {
            debug!("name is missing, store will not be retrieved");
            return Err(StoreError::InvalidArgument(
                "Name is required for retrieving a store",
            ));
        }

        if !self.entries.read().unwrap().contains_key(name) {
            debug!(store = %name, "store does not exist, nothing to retrieve");
            return Err(StoreError::NotFound(
                "Store does not exist. Please try again with a correct name.",
            ));
        }

        Ok(StoreHandle::new(
            name.to_string(),
            Arc::clone(&self.entries),
        ))
    }

    /// Whether a store named `name` exists. Never fails; the empty name
    /// reports `false`.
    pub fn store_exists(&self, name: &str) -> bool {
        self.entries.read().unwrap().contains_key(name)
    }
}

impl<T: Default> StoreRegistry<T> {
    /// Create a store named `name` with `T`'s default state.
    ///
    /// For sequence-shaped states (`Vec<_>`) this is the empty sequence.
    pub fn create_store_default(
        &self,
        name: impl Into<String>,
    ) -> Result<StoreHandle<T>, StoreError> {
        self.create_store(name, T::default())
    }
}

impl<T> Default for StoreRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for StoreRegistry<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_then_read_back() {
        let registry = StoreRegistry::new();
        let store = registry.create_store("numbers", vec![1, 2, 3]).unwrap();
        assert_eq!(store.get_state(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn create_with_default_state() {
        let registry: StoreRegistry<Vec<i32>> = StoreRegistry::new();
        let store = registry.create_store_default("numbers").unwrap();
        assert_eq!(store.get_state(), Some(vec![]));
    }

    #[test]
    fn create_rejects_empty_name() {
        let registry = StoreRegistry::new();
        let err = registry.create_store("", vec![1]).unwrap_err();
        assert_eq!(
            err,
            StoreError::InvalidArgument("Name is required to create a store")
        );
        assert!(!registry.store_exists(""));
    }

    #[test]
    fn create_rejects_duplicate_name_without_clobbering() {
        let registry = StoreRegistry::new();
        registry.create_store("numbers", vec![1]).unwrap();

        let err = registry.create_store("numbers", vec![2]).unwrap_err();
        assert_eq!(err, StoreError::NameConflict);

        // First entry survives the rejected create.
        let store = registry.get_store("numbers").unwrap();
        assert_eq!(store.get_state(), Some(vec![1]));
    }

    #[test]
    fn destroy_returns_final_state() {
        let registry = StoreRegistry::new();
        registry.create_store("numbers", vec![7]).unwrap();

        assert_eq!(registry.destroy_store("numbers").unwrap(), vec![7]);
        assert!(!registry.store_exists("numbers"));
    }

    #[test]
    fn destroy_rejects_empty_name() {
        let registry: StoreRegistry<Vec<i32>> = StoreRegistry::new();
        let err = registry.destroy_store("").unwrap_err();
        assert_eq!(
            err,
            StoreError::InvalidArgument("Name is required for destroying a store")
        );
    }

    #[test]
    fn destroy_unknown_name_is_not_found() {
        let registry: StoreRegistry<Vec<i32>> = StoreRegistry::new();
        let err = registry.destroy_store("missing").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert!(err.to_string().starts_with("Store does not exist"));
    }

    #[test]
    fn get_rejects_empty_name() {
        let registry: StoreRegistry<Vec<i32>> = StoreRegistry::new();
        let err = registry.get_store("").unwrap_err();
        assert_eq!(
            err,
            StoreError::InvalidArgument("Name is required for retrieving a store")
        );
    }

    #[test]
    fn get_unknown_name_is_not_found() {
        let registry: StoreRegistry<Vec<i32>> = StoreRegistry::new();
        let err = registry.get_store("missing").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Store does not exist. Please try again with a correct name."
        );
    }

    #[test]
    fn exists_tracks_lifecycle() {
        let registry = StoreRegistry::new();
        assert!(!registry.store_exists("numbers"));
        assert!(!registry.store_exists(""));

        registry.create_store("numbers", vec![0]).unwrap();
        assert!(registry.store_exists("numbers"));

        registry.destroy_store("numbers").unwrap();
        assert!(!registry.store_exists("numbers"));
    }

    #[test]
    fn independent_registries_do_not_share_entries() {
        let a = StoreRegistry::new();
        let b: StoreRegistry<Vec<i32>> = StoreRegistry::new();

        a.create_store("numbers", vec![1]).unwrap();
        assert!(!b.store_exists("numbers"));
        assert!(b.get_store("numbers").is_err());
    }

    #[test]
    fn cloned_registries_share_entries() {
        let a = StoreRegistry::new();
        let b = a.clone();

        a.create_store("numbers", vec![1]).unwrap();
        assert!(b.store_exists("numbers"));
        assert_eq!(b.destroy_store("numbers").unwrap(), vec![1]);
        assert!(!a.store_exists("numbers"));
    }
}
