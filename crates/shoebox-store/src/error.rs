use thiserror::Error;

/// Errors from storage port and record store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend rejected a write (e.g. quota exceeded). Nothing was
    /// stored for the key.
    #[error("write rejected for {key}: {reason}")]
    WriteRejected { key: String, reason: String },

    /// The backend failed to read a key.
    #[error("read failed for {key}: {reason}")]
    ReadFailed { key: String, reason: String },

    /// A stored value could not be serialized or parsed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
