//! The [`KeyValueStore`] trait: the injected storage port.

use crate::error::StoreResult;

/// Flat string key-value storage port.
///
/// This is the seam between the engine and whatever durable storage the host
/// actually has (browser local storage in the original setting, an in-memory
/// map in tests). All implementations must satisfy:
///
/// - `put` overwrites any prior value at the key.
/// - A rejected `put` (quota, backend failure) leaves the prior value
///   untouched.
/// - `get` returns `Ok(None)` for a missing key; `Err` only on backend
///   failure.
/// - `delete` of a missing key returns `Ok(false)`, never an error.
pub trait KeyValueStore: Send + Sync {
    /// Read the value at `key`. Returns `Ok(None)` if the key is absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write `value` at `key`, overwriting any prior value.
    fn put(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove the value at `key`. Returns `true` if one existed.
    fn delete(&self, key: &str) -> StoreResult<bool>;

    /// All keys currently present, sorted. Intended for diagnostics and
    /// tests, not hot paths.
    fn keys(&self) -> StoreResult<Vec<String>>;
}
