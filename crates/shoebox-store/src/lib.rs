//! Durable payload storage for the Shoebox image library.
//!
//! This crate has two layers:
//!
//! - The **storage port**: the [`KeyValueStore`] trait, a flat string
//!   key-value space standing in for whatever durable storage the host
//!   provides. [`InMemoryKeyValueStore`] is the bundled backend, with an
//!   optional byte quota for exercising write rejection.
//! - The **record store**: [`RecordStore`] maps a [`StoragePath`] to a
//!   [`StoredPayload`] (the encoded image plus provenance metadata) and keeps
//!   the display-handle registry in step with it — a stored payload always
//!   gets a live handle, and deleting a payload revokes its handle in the
//!   same operation.
//!
//! # Design Rules
//!
//! 1. The record store is the sole writer of payload keys.
//! 2. Payload keys derive deterministically from the storage path.
//! 3. A write that is rejected stores nothing and registers nothing.
//! 4. Deleting a missing path is a no-op, not an error.
//!
//! [`StoragePath`]: shoebox_types::StoragePath

pub mod error;
pub mod kv;
pub mod memory;
pub mod payload;
pub mod records;

pub use error::{StoreError, StoreResult};
pub use kv::KeyValueStore;
pub use memory::InMemoryKeyValueStore;
pub use payload::{payload_key, StoredPayload, PAYLOAD_KEY_PREFIX};
pub use records::RecordStore;
