//! Handles bound to individual named stores.
//!
//! A handle is a thin accessor over one registry entry; it re-reads the
//! registry at every call rather than caching state.

mod handle;

pub use handle::StoreHandle;
