//! The named-store registry.
//!
//! A registry owns a mapping from store names to state values and hands out
//! lightweight handles bound to individual entries.

mod registry;

pub use registry::StoreRegistry;

pub(crate) use registry::Entries;
