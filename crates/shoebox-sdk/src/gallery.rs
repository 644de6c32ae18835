use std::io::Read;
use std::sync::Arc;

use shoebox_catalog::{Catalog, CatalogError};
use shoebox_codec::{CodecError, ImageCodec};
use shoebox_handles::{HandleRegistry, InMemoryHandleRegistry};
use shoebox_store::{KeyValueStore, RecordStore, StoredPayload};
use shoebox_types::{is_image_mime, ImageId, ImageRecord, ImageSource, StoragePath};
use tracing::{debug, warn};

use crate::config::GalleryConfig;
use crate::error::{GalleryError, GalleryResult};

/// The gallery facade: everything the presentation layer needs.
///
/// Owns the catalog (and through it the record store) plus the handle
/// registry. Opening a gallery loads the persisted catalog and rehydrates
/// display handles — handles never survive a restart, so each stored payload
/// is decoded and re-registered, and records whose payload is missing or
/// unreadable keep `display_url = None` (their metadata still lists).
pub struct Gallery {
    registry: Arc<dyn HandleRegistry>,
    catalog: Catalog,
}

impl Gallery {
    /// Open a gallery over the given storage port with default settings.
    pub fn open(kv: Arc<dyn KeyValueStore>) -> Self {
        Self::open_with_config(kv, GalleryConfig::default())
    }

    pub fn open_with_config(kv: Arc<dyn KeyValueStore>, config: GalleryConfig) -> Self {
        let registry: Arc<dyn HandleRegistry> = Arc::new(InMemoryHandleRegistry::new());
        let store = RecordStore::new(kv.clone(), registry.clone());
        let mut catalog = Catalog::with_config(kv, store, config.catalog);
        catalog.load();

        let mut gallery = Self { registry, catalog };
        gallery.rehydrate();
        gallery
    }

    /// Re-register display handles for every loaded record.
    fn rehydrate(&mut self) {
        let records = self.catalog.list();
        for record in records {
            let Some(path) = record.storage_path else {
                continue;
            };
            let url = match self.catalog.store().refresh_handle(&path) {
                Ok(Some(url)) => Some(url),
                Ok(None) => {
                    warn!(id = %record.id, path = %path, "payload missing, display handle not restored");
                    None
                }
                Err(e) => {
                    warn!(id = %record.id, path = %path, error = %e, "payload unreadable, display handle not restored");
                    None
                }
            };
            self.catalog.set_display_url(&record.id, url);
        }
        debug!(records = self.catalog.len(), "gallery opened");
    }

    /// Add a batch of files.
    ///
    /// Files are processed sequentially; one that cannot be stored (wrong
    /// MIME type, storage rejection) is skipped with a warning and its
    /// siblings continue — partial success is the normal outcome of a
    /// multi-file upload. Returns the records that were added, newest batch
    /// first in the catalog.
    pub fn add_images(&mut self, sources: Vec<ImageSource>) -> GalleryResult<Vec<ImageRecord>> {
        let mut batch = Vec::new();
        for source in sources {
            let name = source.name.clone();
            match self.store_one(source) {
                Ok(record) => batch.push(record),
                Err(e) => warn!(file = %name, error = %e, "skipping file in upload batch"),
            }
        }
        if batch.is_empty() {
            return Ok(Vec::new());
        }

        let added = batch.clone();
        match self.catalog.add_many(batch) {
            Ok(_) => Ok(added),
            Err(e @ CatalogError::CapacityExceeded { .. }) => {
                // The catalog rejected the batch before mutating, so the
                // payloads stored above would be orphans. Remove them.
                for record in &added {
                    if let Some(path) = &record.storage_path {
                        if let Err(cleanup) = self.catalog.store().delete(path) {
                            warn!(path = %path, error = %cleanup, "failed to clean up rejected payload");
                        }
                    }
                }
                Err(e.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Add one file from a reader (e.g. an open OS file handle).
    ///
    /// The reader is drained fully before anything is stored, so a read
    /// failure partway — a stale handle, a short read — produces a
    /// [`CodecError::Encode`] and stores nothing.
    pub fn add_image_from_reader<R: Read>(
        &mut self,
        name: &str,
        mime_type: &str,
        mut reader: R,
    ) -> GalleryResult<Vec<ImageRecord>> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(CodecError::from)?;
        self.add_images(vec![ImageSource::new(name, mime_type, bytes)])
    }

    /// Encode, store, and register one file; build its record.
    fn store_one(&self, source: ImageSource) -> GalleryResult<ImageRecord> {
        if !is_image_mime(&source.mime_type) {
            return Err(GalleryError::UnsupportedType {
                mime_type: source.mime_type,
            });
        }

        let path = StoragePath::generate(&source.name);
        let size = source.size();
        let payload = StoredPayload::new(
            ImageCodec::encode(&source.bytes),
            source.mime_type,
            source.name.clone(),
            size,
        );
        let url = self.catalog.store().put(&path, &payload)?;
        Ok(ImageRecord::new(source.name, path, url, size))
    }

    /// Delete one image: payload, display handle, and catalog entry.
    /// Unknown ids are a no-op.
    pub fn delete_image(&mut self, id: &ImageId) -> GalleryResult<()> {
        self.catalog.remove(id)?;
        Ok(())
    }

    /// Read-only snapshot of the catalog for rendering, newest batch first.
    pub fn list_images(&self) -> Vec<ImageRecord> {
        self.catalog.list()
    }

    /// Delete every image and the persisted catalog value itself.
    pub fn clear_all_images(&mut self) -> GalleryResult<()> {
        self.catalog.clear()?;
        Ok(())
    }

    /// The decoded bytes and MIME type of one image, for preview or
    /// download.
    ///
    /// Serves from the live display handle when one exists. When the handle
    /// was lost, the stored payload is decoded and its handle re-registered
    /// before serving, so the next access hits the live handle again.
    pub fn image_bytes(&self, id: &ImageId) -> GalleryResult<(Vec<u8>, String)> {
        let record = self
            .catalog
            .get(id)
            .ok_or_else(|| GalleryError::ImageNotFound(id.clone()))?;
        let path = record
            .storage_path
            .clone()
            .ok_or_else(|| GalleryError::ImageNotFound(id.clone()))?;

        if let Some(handle) = self.registry.read(&path) {
            return Ok((handle.bytes.as_ref().clone(), handle.mime_type));
        }

        // Handle lost: restore it lazily from the stored payload.
        if self.catalog.store().refresh_handle(&path)?.is_none() {
            return Err(GalleryError::ImageNotFound(id.clone()));
        }
        let handle = self
            .registry
            .read(&path)
            .ok_or_else(|| GalleryError::ImageNotFound(id.clone()))?;
        Ok((handle.bytes.as_ref().clone(), handle.mime_type))
    }

    /// The handle registry backing this gallery.
    pub fn registry(&self) -> &Arc<dyn HandleRegistry> {
        &self.registry
    }

    /// Number of images in the gallery.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Returns `true` if the gallery holds no images.
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Total original (decoded) bytes across all images.
    pub fn total_bytes(&self) -> u64 {
        self.catalog.list().iter().map(|r| r.size).sum()
    }
}

impl std::fmt::Debug for Gallery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gallery")
            .field("images", &self.catalog.len())
            .finish_non_exhaustive()
    }
}
