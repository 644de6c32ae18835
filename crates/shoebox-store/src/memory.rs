use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::kv::KeyValueStore;

/// In-memory, HashMap-based key-value store.
///
/// The bundled backend for tests and embedding. Values are held behind a
/// `RwLock` for safe shared access. An optional byte quota (counting keys and
/// values) lets tests exercise the write-rejection path the way a real
/// storage backend would reject on quota exhaustion.
pub struct InMemoryKeyValueStore {
    values: RwLock<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl InMemoryKeyValueStore {
    /// Create a new empty store with no quota.
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
            quota_bytes: None,
        }
    }

    /// Create a store that rejects writes once keys + values would exceed
    /// `quota_bytes` in total.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.values.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.values.read().expect("lock poisoned").is_empty()
    }

    /// Total bytes across all keys and values.
    pub fn total_bytes(&self) -> usize {
        self.values
            .read()
            .expect("lock poisoned")
            .iter()
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }

    /// Remove every key.
    pub fn clear(&self) {
        self.values.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let map = self.values.read().expect("lock poisoned");
        Ok(map.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut map = self.values.write().expect("lock poisoned");
        if let Some(quota) = self.quota_bytes {
            let current: usize = map
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if current + key.len() + value.len() > quota {
                return Err(StoreError::WriteRejected {
                    key: key.to_string(),
                    reason: format!("quota of {quota} bytes exceeded"),
                });
            }
        }
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> StoreResult<bool> {
        let mut map = self.values.write().expect("lock poisoned");
        Ok(map.remove(key).is_some())
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        let map = self.values.read().expect("lock poisoned");
        let mut keys: Vec<String> = map.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

impl std::fmt::Debug for InMemoryKeyValueStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryKeyValueStore")
            .field("key_count", &self.len())
            .field("quota_bytes", &self.quota_bytes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Core CRUD
    // -----------------------------------------------------------------------

    #[test]
    fn put_then_get() {
        let kv = InMemoryKeyValueStore::new();
        kv.put("k", "v").unwrap();
        assert_eq!(kv.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn get_missing_is_none() {
        let kv = InMemoryKeyValueStore::new();
        assert!(kv.get("absent").unwrap().is_none());
    }

    #[test]
    fn put_overwrites() {
        let kv = InMemoryKeyValueStore::new();
        kv.put("k", "old").unwrap();
        kv.put("k", "new").unwrap();
        assert_eq!(kv.get("k").unwrap(), Some("new".to_string()));
        assert_eq!(kv.len(), 1);
    }

    #[test]
    fn delete_present_and_missing() {
        let kv = InMemoryKeyValueStore::new();
        kv.put("k", "v").unwrap();
        assert!(kv.delete("k").unwrap());
        assert!(!kv.delete("k").unwrap()); // second delete: no-op
        assert!(kv.get("k").unwrap().is_none());
    }

    #[test]
    fn keys_are_sorted() {
        let kv = InMemoryKeyValueStore::new();
        kv.put("b", "2").unwrap();
        kv.put("a", "1").unwrap();
        kv.put("c", "3").unwrap();
        assert_eq!(kv.keys().unwrap(), vec!["a", "b", "c"]);
    }

    // -----------------------------------------------------------------------
    // Quota
    // -----------------------------------------------------------------------

    #[test]
    fn quota_rejects_oversized_write() {
        let kv = InMemoryKeyValueStore::with_quota(10);
        let err = kv.put("key", "a value that is too long").unwrap_err();
        assert!(matches!(err, StoreError::WriteRejected { .. }));
        assert!(kv.is_empty());
    }

    #[test]
    fn quota_rejection_keeps_prior_value() {
        let kv = InMemoryKeyValueStore::with_quota(8);
        kv.put("k", "short").unwrap();
        let err = kv.put("k", "far too long for quota").unwrap_err();
        assert!(matches!(err, StoreError::WriteRejected { .. }));
        assert_eq!(kv.get("k").unwrap(), Some("short".to_string()));
    }

    #[test]
    fn quota_counts_replacement_not_double() {
        let kv = InMemoryKeyValueStore::with_quota(10);
        kv.put("k", "12345678").unwrap(); // 1 + 8 = 9 bytes
        // Replacing the value frees the old 8 bytes first.
        kv.put("k", "87654321").unwrap();
        assert_eq!(kv.get("k").unwrap(), Some("87654321".to_string()));
    }

    // -----------------------------------------------------------------------
    // Utility
    // -----------------------------------------------------------------------

    #[test]
    fn total_bytes_counts_keys_and_values() {
        let kv = InMemoryKeyValueStore::new();
        kv.put("ab", "cde").unwrap();
        assert_eq!(kv.total_bytes(), 5);
    }

    #[test]
    fn clear_removes_all() {
        let kv = InMemoryKeyValueStore::new();
        kv.put("a", "1").unwrap();
        kv.put("b", "2").unwrap();
        kv.clear();
        assert!(kv.is_empty());
    }
}
