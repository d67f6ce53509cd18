//! Error taxonomy for registry operations.

use thiserror::Error;

/// Errors returned by [`StoreRegistry`](crate::StoreRegistry) operations.
///
/// Every failure is reported at the call site; a failed operation never
/// mutates the registry. The `Display` messages are stable, and callers that
/// surface them to users can rely on the "Store does not exist" prefix of
/// the `NotFound` variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A required store name was missing (empty).
    #[error("{0}")]
    InvalidArgument(&'static str),

    /// A store with the requested name already exists.
    #[error("Name already in use. Aborting store creation")]
    NameConflict,

    /// No store with the requested name exists.
    #[error("{0}")]
    NotFound(&'static str),
}
