//! # Pixel Fingerprint
//!
//! Compact perceptual fingerprints (average hash) for raster images, with
//! a stable binary wire format and explainable similarity scores.
//!
//! ## Core Philosophy
//! - **Stable wire format** - a 2-byte color mode discriminator followed
//!   by packed threshold bits; stored hashes stay comparable forever
//! - **No sentinel scores** - incomparable hash pairs are explicit errors,
//!   never magic numbers mixed in with real scores
//! - **Decoding stays outside** - the crate hashes decoded intensities;
//!   image format decoding and fetching are pluggable collaborators
//!
//! ## Architecture
//! The library is split into the pure engine and its boundaries:
//! - `core` - Sampling, averaging, bit packing, distance metrics
//! - `error` - One error type per failure domain
//! - `cli` - Command-line interface (in the `pixfp` binary)

pub mod core;
pub mod error;

// Re-export commonly used types at the crate root
pub use error::{FingerprintError, Result};

/// Initialize tracing for the library
///
/// This should be called by the application entry point (CLI or host).
pub fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default tracing subscriber");
}
