//! The [`HandleRegistry`] trait defining the display-handle interface.

use shoebox_types::{DisplayUrl, StoragePath};

use crate::handle::DisplayHandle;

/// Registry of live display handles, keyed by storage path.
///
/// Implementations must be thread-safe (`Send + Sync`). All operations are
/// infallible by contract: handles are process-local memory, so there is no
/// I/O to fail. The registry owns handle creation and revocation exclusively.
pub trait HandleRegistry: Send + Sync {
    /// Create a live handle for `path` over the given decoded bytes and
    /// return its URL.
    ///
    /// Registering a path that already has a handle revokes the old handle
    /// first — the previous URL stops resolving and a new one is minted, so
    /// re-registration never leaks.
    fn register(&self, path: &StoragePath, bytes: Vec<u8>, mime_type: &str) -> DisplayUrl;

    /// The currently live URL for `path`, if one exists.
    fn resolve(&self, path: &StoragePath) -> Option<DisplayUrl>;

    /// The full live handle for `path` (URL, MIME type, and bytes), if one
    /// exists. Used for rendering and download without re-decoding the
    /// stored payload.
    fn read(&self, path: &StoragePath) -> Option<DisplayHandle>;

    /// Release the handle for `path`. Returns `true` if one was live.
    ///
    /// Revoking an already-revoked or never-registered path is a no-op, not
    /// an error.
    fn revoke(&self, path: &StoragePath) -> bool;

    /// Release every live handle.
    fn revoke_all(&self);
}
