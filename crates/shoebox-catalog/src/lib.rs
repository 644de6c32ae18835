//! The ordered, persisted image catalog.
//!
//! The catalog is the list the gallery view renders from: every
//! [`ImageRecord`], newest batch first, persisted as one JSON array under a
//! single well-known key. It is the sole writer of that key.
//!
//! Every mutation re-persists the full catalog synchronously, so the
//! in-memory sequence and the stored value only diverge when the backend
//! rejects a write — in which case the in-memory change is kept and the
//! error surfaced, never silently hidden.
//!
//! [`ImageRecord`]: shoebox_types::ImageRecord

pub mod catalog;
pub mod config;
pub mod error;

pub use catalog::{Catalog, CATALOG_KEY};
pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
