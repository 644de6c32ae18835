use std::collections::HashMap;
use std::sync::RwLock;

use shoebox_types::{DisplayUrl, StoragePath};
use tracing::debug;

use crate::handle::DisplayHandle;
use crate::traits::HandleRegistry;

/// In-memory, HashMap-based handle registry.
///
/// The only backend a handle registry can meaningfully have: handles are
/// process-local by contract. Held behind a `RwLock` so the registry can be
/// shared across threads in an embedding host.
pub struct InMemoryHandleRegistry {
    handles: RwLock<HashMap<StoragePath, DisplayHandle>>,
}

impl InMemoryHandleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            handles: RwLock::new(HashMap::new()),
        }
    }

    /// Number of live handles.
    pub fn len(&self) -> usize {
        self.handles.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no handles are live.
    pub fn is_empty(&self) -> bool {
        self.handles.read().expect("lock poisoned").is_empty()
    }
}

impl Default for InMemoryHandleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl HandleRegistry for InMemoryHandleRegistry {
    fn register(&self, path: &StoragePath, bytes: Vec<u8>, mime_type: &str) -> DisplayUrl {
        let handle = DisplayHandle::new(bytes, mime_type);
        let url = handle.url.clone();
        let mut map = self.handles.write().expect("lock poisoned");
        if let Some(old) = map.insert(path.clone(), handle) {
            debug!(path = %path, old_url = %old.url, "replaced live handle");
        }
        url
    }

    fn resolve(&self, path: &StoragePath) -> Option<DisplayUrl> {
        let map = self.handles.read().expect("lock poisoned");
        map.get(path).map(|h| h.url.clone())
    }

    fn read(&self, path: &StoragePath) -> Option<DisplayHandle> {
        let map = self.handles.read().expect("lock poisoned");
        map.get(path).cloned()
    }

    fn revoke(&self, path: &StoragePath) -> bool {
        let mut map = self.handles.write().expect("lock poisoned");
        map.remove(path).is_some()
    }

    fn revoke_all(&self) {
        self.handles.write().expect("lock poisoned").clear();
    }
}

impl std::fmt::Debug for InMemoryHandleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryHandleRegistry")
            .field("live_handles", &self.len())
            .finish()
    }
}
