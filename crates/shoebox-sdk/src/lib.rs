//! High-level gallery API for the Shoebox image library.
//!
//! [`Gallery`] is the facade the presentation layer talks to: add files,
//! delete by id, list for rendering, clear everything. It wires together the
//! codec, the record store, the handle registry, and the catalog, and applies
//! the batch-upload failure policy (a file that cannot be stored is skipped
//! with a warning; its siblings continue).
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use shoebox_sdk::Gallery;
//! use shoebox_store::InMemoryKeyValueStore;
//! use shoebox_types::ImageSource;
//!
//! let kv = Arc::new(InMemoryKeyValueStore::new());
//! let mut gallery = Gallery::open(kv);
//! let added = gallery
//!     .add_images(vec![ImageSource::new("cat.png", "image/png", vec![1, 2, 3])])
//!     .unwrap();
//! assert_eq!(added.len(), 1);
//! assert_eq!(gallery.list_images().len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod gallery;

pub use config::GalleryConfig;
pub use error::{GalleryError, GalleryResult};
pub use gallery::Gallery;
