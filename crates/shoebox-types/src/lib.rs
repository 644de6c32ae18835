//! Foundation types for the Shoebox image library.
//!
//! This crate provides the identifier, path, and record types used throughout
//! the Shoebox engine. Every other Shoebox crate depends on `shoebox-types`.
//!
//! # Key Types
//!
//! - [`ImageId`] — Unique image identifier (timestamp + random suffix)
//! - [`StoragePath`] — Logical path under which an encoded payload is stored
//! - [`ImageRecord`] — One image's catalog metadata
//! - [`ImageSource`] — An incoming file (name, MIME type, bytes)
//! - [`DisplayUrl`] — Process-local, revocable display reference

pub mod format;
pub mod id;
pub mod path;
pub mod record;
pub mod source;
pub mod url;

pub use format::format_file_size;
pub use id::ImageId;
pub use path::StoragePath;
pub use record::ImageRecord;
pub use source::{is_image_mime, ImageSource};
pub use url::DisplayUrl;
