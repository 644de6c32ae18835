use serde::{Deserialize, Serialize};

/// An incoming file handed to the engine: name, MIME type, and raw bytes.
///
/// This is the boundary type between the (out-of-scope) upload UI and the
/// persistence engine. The engine never re-reads the underlying file after
/// construction, so a stale OS handle cannot fail mid-store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSource {
    /// Original filename (e.g. `"holiday.png"`).
    pub name: String,
    /// MIME type as reported by the uploader (e.g. `"image/png"`).
    pub mime_type: String,
    /// Raw file content.
    pub bytes: Vec<u8>,
}

impl ImageSource {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Byte length of the file content.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Returns `true` for `image/*` MIME types.
///
/// The upload UI filters dropped files the same way; the engine applies the
/// filter again so programmatic callers get the same behavior.
pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
}
