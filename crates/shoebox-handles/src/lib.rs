//! Process-local display handles for the Shoebox image library.
//!
//! A display handle is a revocable in-memory reference to one image's decoded
//! bytes, addressed by a [`DisplayUrl`]. The presentation layer renders from
//! the handle instead of re-reading and re-decoding the stored payload on
//! every draw.
//!
//! # Liveness contract
//!
//! Handles are memory-resident only and never survive a process restart. On
//! restart the registry starts empty; callers must re-register a path before
//! its first use, or accept that `resolve` returns `None` until they do.
//!
//! The registry is the *sole owner* of live handles: no other component may
//! mint or revoke them.
//!
//! [`DisplayUrl`]: shoebox_types::DisplayUrl

pub mod handle;
pub mod memory;
pub mod traits;

pub use handle::DisplayHandle;
pub use memory::InMemoryHandleRegistry;
pub use traits::HandleRegistry;
