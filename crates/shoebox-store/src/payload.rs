use serde::{Deserialize, Serialize};
use shoebox_types::StoragePath;

use crate::error::{StoreError, StoreResult};

/// Key prefix for stored payload values.
pub const PAYLOAD_KEY_PREFIX: &str = "shoebox/payload/";

/// Derive the storage key for a payload from its logical path.
///
/// Deterministic: the same path always maps to the same key. Only the final
/// path segment is used — the `/uploads/` prefix is shared by every path and
/// carries no information.
pub fn payload_key(path: &StoragePath) -> String {
    format!("{PAYLOAD_KEY_PREFIX}{}", path.file_name())
}

/// The durable encoded form of one image file.
///
/// One payload is stored as a single JSON value under [`payload_key`]. The
/// encoded data is text-safe (base64), so the whole struct embeds cleanly in
/// the string-valued key-value space.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPayload {
    /// Base64-encoded file content.
    pub encoded_data: String,
    /// MIME type of the original file.
    pub mime_type: String,
    /// Filename the uploader supplied.
    pub original_name: String,
    /// Byte length of the original (decoded) content.
    pub size: u64,
}

impl StoredPayload {
    pub fn new(
        encoded_data: String,
        mime_type: impl Into<String>,
        original_name: impl Into<String>,
        size: u64,
    ) -> Self {
        Self {
            encoded_data,
            mime_type: mime_type.into(),
            original_name: original_name.into(),
            size,
        }
    }

    /// Serialize to the stored JSON form.
    pub fn to_json(&self) -> StoreResult<String> {
        serde_json::to_string(self).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// Parse from the stored JSON form.
    pub fn from_json(value: &str) -> StoreResult<Self> {
        serde_json::from_str(value).map_err(|e| StoreError::Serialization(e.to_string()))
    }
}
