//! # Error Module
//!
//! Error types for the fingerprint pipeline and hash comparison.
//!
//! ## Design Principles
//! - **No sentinel values** - a failure is an error variant, never a magic
//!   number sharing the return channel with real scores
//! - **Distinct failure domains** - source, decode, stored-blob and
//!   comparison failures are separate types and never collapse into one
//!   another
//! - **Include context** - paths, discriminator codes, observed lengths

use std::path::PathBuf;
use thiserror::Error;

/// Top-level library error
#[derive(Error, Debug)]
pub enum FingerprintError {
    #[error("Image source error: {0}")]
    Source(#[from] SourceError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Hash format error: {0}")]
    Hash(#[from] HashError),

    #[error("Comparison error: {0}")]
    Compare(#[from] CompareError),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors resolving an image source to raw bytes
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("File not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid base64 payload: {reason}")]
    InvalidBase64 { reason: String },
}

/// Errors turning raw bytes into a pixel grid
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Input contains no intensity data")]
    Empty,

    #[error("Grid edge {edge} is below the minimum of 4")]
    EdgeTooSmall { edge: usize },

    #[error("Expected {expected} bytes of intensity data, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("A {edge}x{edge} grid needs {expected} samples, got {actual}")]
    SampleCountMismatch {
        edge: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Sample has {actual} channels but the color mode requires {expected}")]
    ChannelMismatch { expected: usize, actual: usize },
}

/// Errors re-admitting a stored hash blob
#[derive(Error, Debug)]
pub enum HashError {
    #[error("Hash blob is {len} bytes, too short to carry the 2-byte mode header")]
    TooShort { len: usize },

    #[error("Unknown color mode discriminator: {code}")]
    UnknownMode { code: u16 },
}

/// Errors comparing two hashes
///
/// Neither condition is recoverable by substituting a default score; a
/// mismatched pair has no meaningful similarity.
#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Hashes use different color modes (discriminator {left} vs {right})")]
    FormatMismatch { left: u16, right: u16 },

    #[error("Hashes have mismatched lengths ({left} vs {right} bytes)")]
    LengthMismatch { left: usize, right: usize },
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, FingerprintError>;
