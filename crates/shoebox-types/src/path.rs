use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::id::random_suffix;

/// Prefix under which all payloads are logically addressed.
const UPLOADS_PREFIX: &str = "/uploads/";

/// Extension used when the original filename carries none.
const DEFAULT_EXTENSION: &str = "jpg";

/// Logical path under which one image's encoded payload is stored.
///
/// Paths look like `"/uploads/1724961600000-k3x9q2mfa.png"`: a generated
/// timestamp + random stem with the extension taken from the original
/// filename. The timestamp + random composition makes collisions between
/// sequentially generated paths negligible. A path is immutable once
/// assigned to a record.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoragePath(String);

impl StoragePath {
    /// Generate a fresh path for a file with the given original name.
    ///
    /// The extension is taken from the last `.`-separated segment of
    /// `original_name`, falling back to `jpg` when there is none.
    pub fn generate(original_name: &str) -> Self {
        let extension = extension_of(original_name);
        let timestamp_ms = Utc::now().timestamp_millis();
        let suffix = random_suffix();
        Self(format!("{UPLOADS_PREFIX}{timestamp_ms}-{suffix}.{extension}"))
    }

    /// The path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The final path segment (filename with extension).
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

/// Extract the extension from a filename, defaulting to `jpg`.
fn extension_of(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext,
        _ => DEFAULT_EXTENSION,
    }
}

impl fmt::Debug for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StoragePath({})", self.0)
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for StoragePath {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for StoragePath {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
