use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::ImageId;
use crate::path::StoragePath;
use crate::url::DisplayUrl;

/// Catalog metadata for one uploaded image.
///
/// Records are immutable after creation — they are only ever removed, never
/// mutated, with one exception: `display_url` is derived state that is
/// refreshed after a process restart (display handles do not survive one).
///
/// Serialized with RFC 3339 timestamps via chrono's serde support, so a
/// persisted catalog round-trips `upload_date` exactly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Unique identifier, assigned at creation.
    pub id: ImageId,
    /// Original filename as supplied by the uploader.
    pub name: String,
    /// Logical path of the encoded payload, if one was stored.
    pub storage_path: Option<StoragePath>,
    /// Currently live display reference, if any. Not meaningful across
    /// restarts; re-established when the catalog is rehydrated.
    pub display_url: Option<DisplayUrl>,
    /// Byte length of the original file.
    pub size: u64,
    /// When the image was added.
    pub upload_date: DateTime<Utc>,
}

impl ImageRecord {
    /// Create a record for a freshly stored image, assigning a new id and
    /// the current upload timestamp.
    pub fn new(
        name: impl Into<String>,
        storage_path: StoragePath,
        display_url: DisplayUrl,
        size: u64,
    ) -> Self {
        Self {
            id: ImageId::generate(),
            name: name.into(),
            storage_path: Some(storage_path),
            display_url: Some(display_url),
            size,
            upload_date: Utc::now(),
        }
    }
}
