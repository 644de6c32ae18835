use shoebox_catalog::CatalogError;
use shoebox_codec::CodecError;
use shoebox_store::StoreError;
use shoebox_types::ImageId;
use thiserror::Error;

/// Errors surfaced by the gallery facade.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Storage(#[from] StoreError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The file is not an image. Only `image/*` MIME types are accepted.
    #[error("unsupported file type: {mime_type}")]
    UnsupportedType { mime_type: String },

    /// No image with this id exists (or its payload is gone).
    ///
    /// Only raised by lookups; deleting an unknown id is a no-op.
    #[error("image not found: {0}")]
    ImageNotFound(ImageId),
}

/// Result alias for gallery operations.
pub type GalleryResult<T> = Result<T, GalleryError>;
