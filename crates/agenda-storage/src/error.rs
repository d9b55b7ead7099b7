// Error type for store operations
//
// The store never produces validation or business errors itself; it reports
// a generic not-found condition which the service alone reclassifies.

use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors that can occur inside an event store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested identifier is not in the live set
    #[error("event not found")]
    NotFound,

    /// Backend failure (unused by the in-memory store, kept so the
    /// contract tolerates failing implementations)
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
