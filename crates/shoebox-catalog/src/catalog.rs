use std::sync::Arc;

use shoebox_store::{KeyValueStore, RecordStore};
use shoebox_types::{DisplayUrl, ImageId, ImageRecord};
use tracing::{debug, warn};

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};

/// Well-known key the serialized catalog lives under.
pub const CATALOG_KEY: &str = "shoebox/catalog";

/// The ordered image catalog: in-memory sequence + persisted mirror.
///
/// Holds records newest-batch-first. Every mutation synchronously
/// re-persists the whole sequence under [`CATALOG_KEY`]; each mutation runs
/// to completion under `&mut self`, so no stale read can interleave between
/// computing the next sequence and publishing it.
///
/// The catalog also coordinates record lifecycle: removing a record deletes
/// its payload (and thereby its display handle) through the record store.
pub struct Catalog {
    records: Vec<ImageRecord>,
    kv: Arc<dyn KeyValueStore>,
    store: RecordStore,
    config: CatalogConfig,
}

impl Catalog {
    /// Create an empty catalog over the given storage port and record store.
    /// Call [`load`](Self::load) to pick up previously persisted records.
    pub fn new(kv: Arc<dyn KeyValueStore>, store: RecordStore) -> Self {
        Self::with_config(kv, store, CatalogConfig::default())
    }

    pub fn with_config(
        kv: Arc<dyn KeyValueStore>,
        store: RecordStore,
        config: CatalogConfig,
    ) -> Self {
        Self {
            records: Vec::new(),
            kv,
            store,
            config,
        }
    }

    /// Read the persisted catalog into memory and return it.
    ///
    /// An absent value yields an empty catalog. A read or parse failure is
    /// logged and also yields an empty catalog — startup must not crash on a
    /// corrupt value.
    pub fn load(&mut self) -> &[ImageRecord] {
        self.records = match self.kv.get(CATALOG_KEY) {
            Ok(Some(value)) => match serde_json::from_str::<Vec<ImageRecord>>(&value) {
                Ok(records) => records,
                Err(e) => {
                    warn!(error = %e, "failed to parse persisted catalog, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "failed to read persisted catalog, starting empty");
                Vec::new()
            }
        };
        debug!(records = self.records.len(), "catalog loaded");
        &self.records
    }

    /// Prepend a batch of records (in the order supplied) and persist.
    ///
    /// If the catalog has a capacity and the batch would exceed it, the whole
    /// batch is rejected before any mutation. If persistence fails, the
    /// in-memory sequence keeps the change and the error is surfaced — a
    /// documented inconsistency the caller may retry.
    pub fn add_many(&mut self, records: Vec<ImageRecord>) -> CatalogResult<&[ImageRecord]> {
        if records.is_empty() {
            return Ok(&self.records);
        }
        if let Some(capacity) = self.config.capacity {
            if self.records.len() + records.len() > capacity {
                return Err(CatalogError::CapacityExceeded {
                    capacity,
                    stored: self.records.len(),
                    pending: records.len(),
                });
            }
        }

        let mut updated = records;
        let added = updated.len();
        updated.append(&mut self.records);
        self.records = updated;
        self.persist()?;
        debug!(added, total = self.records.len(), "records added to catalog");
        Ok(&self.records)
    }

    /// Remove the record with the given id, deleting its payload and
    /// revoking its display handle, then persist. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &ImageId) -> CatalogResult<()> {
        let Some(index) = self.records.iter().position(|r| &r.id == id) else {
            return Ok(());
        };
        if let Some(path) = self.records[index].storage_path.clone() {
            self.store.delete(&path)?;
        }
        self.records.remove(index);
        self.persist()?;
        debug!(id = %id, "record removed from catalog");
        Ok(())
    }

    /// Delete every payload and handle, empty the sequence, and remove the
    /// persisted catalog value entirely.
    ///
    /// Per-record payload deletion failures are logged and skipped so one
    /// bad record cannot strand the rest.
    pub fn clear(&mut self) -> CatalogResult<()> {
        for record in &self.records {
            if let Some(path) = &record.storage_path {
                if let Err(e) = self.store.delete(path) {
                    warn!(path = %path, error = %e, "failed to delete payload during clear");
                }
            }
        }
        self.records.clear();
        self.kv.delete(CATALOG_KEY)?;
        debug!("catalog cleared");
        Ok(())
    }

    /// Snapshot of the current sequence, for rendering.
    pub fn list(&self) -> Vec<ImageRecord> {
        self.records.clone()
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record with the given id, if present.
    pub fn get(&self, id: &ImageId) -> Option<&ImageRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    /// Replace a record's display URL in memory (rehydration after restart).
    /// Does not re-persist: the stored form treats `display_url` as derived.
    pub fn set_display_url(&mut self, id: &ImageId, display_url: Option<DisplayUrl>) {
        if let Some(record) = self.records.iter_mut().find(|r| &r.id == id) {
            record.display_url = display_url;
        }
    }

    /// Mutable access to the coordinating record store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    fn persist(&self) -> CatalogResult<()> {
        let value = serde_json::to_string(&self.records)
            .map_err(|e| CatalogError::Serialization(e.to_string()))?;
        self.kv.put(CATALOG_KEY, &value)?;
        Ok(())
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("records", &self.records.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
