//! # Canister
//!
//! A minimal named-store registry for Rust programs.
//!
//! Canister is a lightweight alternative to a full state-management library:
//! independent parts of a program register and retrieve named pieces of
//! shared state through a [`StoreRegistry`], without importing a single
//! global store.
//!
//! ## Registry
//!
//! A [`StoreRegistry<T>`] maps unique string names to state values:
//! - `create_store` / `create_store_default` - bind a name to a value
//! - `get_store` - retrieve a handle to an existing store
//! - `destroy_store` - remove a store and recover its final state
//! - `store_exists` - infallible existence check
//!
//! ## Handles
//!
//! [`StoreHandle<T>`] is the accessor returned by create/get. It re-reads
//! the registry at call time via `get_state`, and carries `subscribe` and
//! `dispatch` as documented no-op placeholders for future change
//! notification and reducer dispatch.
//!
//! Diagnostic traces are emitted through [`tracing`] at debug level; they
//! are observability only and never part of the functional contract.
//!
//! ```
//! use canister::StoreRegistry;
//!
//! let registry = StoreRegistry::new();
//! let todos = registry.create_store("todos", vec!["buy milk"]).unwrap();
//! assert_eq!(todos.get_state(), Some(vec!["buy milk"]));
//!
//! assert_eq!(registry.destroy_store("todos").unwrap(), vec!["buy milk"]);
//! assert!(!registry.store_exists("todos"));
//! ```

pub mod error;
pub mod registry;
pub mod store;

// Re-export main types for convenience
pub use error::StoreError;
pub use registry::StoreRegistry;
pub use store::StoreHandle;
