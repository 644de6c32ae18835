use std::fmt;

use serde::{Deserialize, Serialize};

/// A process-local, revocable reference to an image's decoded bytes.
///
/// Display URLs are minted by the handle registry and are only meaningful to
/// the process that created them — they never survive a restart. A record
/// whose `display_url` is absent (or stale after a reload) must be
/// re-registered before it can be rendered.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayUrl(String);

impl DisplayUrl {
    /// Wrap an already-minted URL string.
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for DisplayUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DisplayUrl({})", self.0)
    }
}

impl fmt::Display for DisplayUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
