//! # Source Module
//!
//! The image source boundary: anything that can resolve to the raw bytes
//! of an image. Fetching is entirely outside the hashing core; the
//! pipeline only ever sees the resulting byte buffer.
//!
//! Shipped sources:
//! - [`FileSource`] - reads a file from the local filesystem
//! - [`Base64Source`] - decodes a base64 payload carried over some
//!   transport
//!
//! Network-backed sources deliberately do not ship; the trait is
//! object-safe so host applications can provide their own.

mod base64;
mod file;

pub use base64::{file_to_base64, Base64Source};
pub use file::FileSource;

use crate::error::SourceError;

/// Trait for byte-source collaborators
pub trait ImageSource: Send + Sync {
    /// Resolve the source to raw image bytes
    fn fetch(&self) -> Result<Vec<u8>, SourceError>;

    /// Human-readable description of where the bytes come from
    fn describe(&self) -> String;
}
