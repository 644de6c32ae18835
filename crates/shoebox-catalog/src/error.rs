use shoebox_store::StoreError;
use thiserror::Error;

/// Errors from catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The storage port or record store failed.
    #[error(transparent)]
    Storage(#[from] StoreError),

    /// The catalog could not be serialized for persistence.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Adding a batch would push the catalog past its configured capacity.
    /// Nothing was added.
    #[error("catalog capacity {capacity} exceeded: {stored} stored + {pending} pending")]
    CapacityExceeded {
        capacity: usize,
        stored: usize,
        pending: usize,
    },
}

/// Result alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
