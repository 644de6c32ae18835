use std::sync::Arc;

use shoebox_codec::ImageCodec;
use shoebox_handles::HandleRegistry;
use shoebox_types::{DisplayUrl, StoragePath};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::kv::KeyValueStore;
use crate::payload::{payload_key, StoredPayload};

/// Coordinates durable payloads with live display handles.
///
/// The record store is the sole writer of payload keys and the only caller of
/// the handle registry's register/revoke operations on behalf of stored
/// images. Its job is to keep the two in step:
///
/// - `put` stores the payload, then (re)registers a display handle for it.
/// - `delete` removes the payload, then revokes the handle.
///
/// There is no real transaction across the two steps. The chosen ordering
/// means a crash between them can only leave a live handle without a payload
/// (handles die with the process anyway), never a durable payload whose
/// handle was silently dropped.
pub struct RecordStore {
    kv: Arc<dyn KeyValueStore>,
    registry: Arc<dyn HandleRegistry>,
}

impl RecordStore {
    pub fn new(kv: Arc<dyn KeyValueStore>, registry: Arc<dyn HandleRegistry>) -> Self {
        Self { kv, registry }
    }

    /// Store a payload under `path`, overwriting any prior value, and
    /// (re)register a display handle for it. Returns the handle's URL.
    ///
    /// If the payload cannot be decoded or the backend rejects the write,
    /// nothing is stored and no handle is registered. Decoding happens
    /// before the write so an undecodable payload is never durably stored.
    pub fn put(&self, path: &StoragePath, payload: &StoredPayload) -> StoreResult<DisplayUrl> {
        let bytes = ImageCodec::decode(&payload.encoded_data)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        let value = payload.to_json()?;
        self.kv.put(&payload_key(path), &value)?;

        let url = self.registry.register(path, bytes, &payload.mime_type);
        debug!(path = %path, url = %url, "stored payload");
        Ok(url)
    }

    /// Read the payload stored under `path`, if any.
    pub fn get(&self, path: &StoragePath) -> StoreResult<Option<StoredPayload>> {
        match self.kv.get(&payload_key(path))? {
            Some(value) => Ok(Some(StoredPayload::from_json(&value)?)),
            None => Ok(None),
        }
    }

    /// Remove the payload under `path` and revoke its display handle.
    ///
    /// Payload first, handle second (see the type-level note on ordering).
    /// Returns `true` if a payload existed. Deleting a missing path still
    /// revokes any stray handle and is a no-op otherwise.
    pub fn delete(&self, path: &StoragePath) -> StoreResult<bool> {
        let existed = self.kv.delete(&payload_key(path))?;
        self.registry.revoke(path);
        if existed {
            debug!(path = %path, "deleted payload");
        }
        Ok(existed)
    }

    /// Re-register the display handle for an already-stored payload.
    ///
    /// Used after a restart, when payloads survived but handles did not.
    /// Returns `Ok(None)` when no payload exists at `path`.
    pub fn refresh_handle(&self, path: &StoragePath) -> StoreResult<Option<DisplayUrl>> {
        let Some(payload) = self.get(path)? else {
            return Ok(None);
        };
        let bytes = ImageCodec::decode(&payload.encoded_data)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(Some(
            self.registry.register(path, bytes, &payload.mime_type),
        ))
    }

    /// The currently live display URL for `path`, if any.
    pub fn resolve(&self, path: &StoragePath) -> Option<DisplayUrl> {
        self.registry.resolve(path)
    }
}

impl std::fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryKeyValueStore;
    use shoebox_handles::InMemoryHandleRegistry;

    fn record_store() -> (Arc<InMemoryKeyValueStore>, Arc<InMemoryHandleRegistry>, RecordStore) {
        let kv = Arc::new(InMemoryKeyValueStore::new());
        let registry = Arc::new(InMemoryHandleRegistry::new());
        let store = RecordStore::new(kv.clone(), registry.clone());
        (kv, registry, store)
    }

    fn payload_for(bytes: &[u8], name: &str, mime: &str) -> StoredPayload {
        StoredPayload::new(ImageCodec::encode(bytes), mime, name, bytes.len() as u64)
    }

    // -----------------------------------------------------------------------
    // Put / get
    // -----------------------------------------------------------------------

    #[test]
    fn put_stores_payload_and_registers_handle() {
        let (_kv, registry, store) = record_store();
        let path = StoragePath::from("/uploads/1-aaaaaaaaa.png");
        let payload = payload_for(b"pixels", "a.png", "image/png");

        let url = store.put(&path, &payload).unwrap();
        assert_eq!(store.get(&path).unwrap(), Some(payload));
        assert_eq!(registry.resolve(&path), Some(url));
    }

    #[test]
    fn get_missing_path_is_none() {
        let (_kv, _registry, store) = record_store();
        let path = StoragePath::from("/uploads/none.png");
        assert!(store.get(&path).unwrap().is_none());
    }

    #[test]
    fn put_overwrites_and_replaces_handle() {
        let (_kv, registry, store) = record_store();
        let path = StoragePath::from("/uploads/2-bbbbbbbbb.png");
        let first = store
            .put(&path, &payload_for(b"v1", "a.png", "image/png"))
            .unwrap();
        let second = store
            .put(&path, &payload_for(b"v2", "a.png", "image/png"))
            .unwrap();
        assert_ne!(first, second);
        assert_eq!(registry.resolve(&path), Some(second));
        let stored = store.get(&path).unwrap().unwrap();
        assert_eq!(ImageCodec::decode(&stored.encoded_data).unwrap(), b"v2");
    }

    #[test]
    fn undecodable_payload_stores_nothing() {
        let (kv, registry, store) = record_store();
        let path = StoragePath::from("/uploads/7-ggggggggg.png");
        let corrupt = StoredPayload::new("%%not base64%%".into(), "image/png", "a.png", 3);

        let err = store.put(&path, &corrupt).unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
        assert!(kv.is_empty());
        assert!(registry.resolve(&path).is_none());
    }

    #[test]
    fn rejected_write_registers_no_handle() {
        let kv = Arc::new(InMemoryKeyValueStore::with_quota(4));
        let registry = Arc::new(InMemoryHandleRegistry::new());
        let store = RecordStore::new(kv.clone(), registry.clone());
        let path = StoragePath::from("/uploads/3-ccccccccc.png");

        let err = store
            .put(&path, &payload_for(b"way too much data", "a.png", "image/png"))
            .unwrap_err();
        assert!(matches!(err, StoreError::WriteRejected { .. }));
        assert!(kv.is_empty());
        assert!(registry.resolve(&path).is_none());
    }

    // -----------------------------------------------------------------------
    // Delete
    // -----------------------------------------------------------------------

    #[test]
    fn delete_removes_payload_and_revokes_handle() {
        let (_kv, registry, store) = record_store();
        let path = StoragePath::from("/uploads/4-ddddddddd.png");
        store
            .put(&path, &payload_for(b"bytes", "a.png", "image/png"))
            .unwrap();

        assert!(store.delete(&path).unwrap());
        assert!(store.get(&path).unwrap().is_none());
        assert!(registry.resolve(&path).is_none());
    }

    #[test]
    fn delete_missing_path_is_noop() {
        let (_kv, _registry, store) = record_store();
        let path = StoragePath::from("/uploads/never.png");
        assert!(!store.delete(&path).unwrap());
        assert!(!store.delete(&path).unwrap());
    }

    // -----------------------------------------------------------------------
    // Rehydration
    // -----------------------------------------------------------------------

    #[test]
    fn refresh_handle_after_registry_loss() {
        let kv = Arc::new(InMemoryKeyValueStore::new());
        let registry = Arc::new(InMemoryHandleRegistry::new());
        let store = RecordStore::new(kv.clone(), registry.clone());
        let path = StoragePath::from("/uploads/5-eeeeeeeee.png");
        store
            .put(&path, &payload_for(b"survives", "a.png", "image/png"))
            .unwrap();

        // Simulate a restart: payloads survive, handles do not.
        let fresh_registry = Arc::new(InMemoryHandleRegistry::new());
        let fresh = RecordStore::new(kv, fresh_registry.clone());
        assert!(fresh.resolve(&path).is_none());

        let url = fresh.refresh_handle(&path).unwrap().unwrap();
        assert_eq!(fresh_registry.resolve(&path), Some(url));
        let handle = fresh_registry.read(&path).unwrap();
        assert_eq!(*handle.bytes, b"survives".to_vec());
    }

    #[test]
    fn refresh_handle_missing_payload_is_none() {
        let (_kv, _registry, store) = record_store();
        let path = StoragePath::from("/uploads/absent.png");
        assert!(store.refresh_handle(&path).unwrap().is_none());
    }

    #[test]
    fn refresh_handle_corrupt_payload_errors() {
        let (kv, _registry, store) = record_store();
        let path = StoragePath::from("/uploads/6-fffffffff.png");
        let corrupt = StoredPayload::new("%%not base64%%".into(), "image/png", "a.png", 3);
        kv.put(&payload_key(&path), &corrupt.to_json().unwrap())
            .unwrap();

        let err = store.refresh_handle(&path).unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
