//! Lossless text-safe encoding of image bytes.
//!
//! Stored payloads live inside JSON values in a flat key-value space, so the
//! binary content of each image must be turned into a form that is safe to
//! embed in a text value. This crate provides that conversion (standard
//! base64) and guarantees a byte-identical round-trip:
//! `decode(encode(bytes)) == bytes` for all inputs.
//!
//! Encoding from an in-memory slice cannot fail. Encoding from a reader can
//! fail partway (a stale handle, a short read); in that case nothing is
//! returned, so nothing is ever partially stored.

pub mod codec;
pub mod error;

pub use codec::ImageCodec;
pub use error::{CodecError, CodecResult};
