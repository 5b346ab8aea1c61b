//! # Pipeline Module
//!
//! Orchestrates source -> decode -> encode for one image.
//!
//! Every source kind runs through the same pipeline; only the byte-fetch
//! step differs, and that lives behind the [`ImageSource`] trait. The
//! pipeline itself is pure apart from what its collaborators do, so many
//! pipelines can run in parallel across independent images with no
//! coordination.

use crate::core::decoder::{ImageDecoder, RawIntensityDecoder};
use crate::core::hash::ImageHash;
use crate::core::hasher::encode_hash;
use crate::core::mode::ColorMode;
use crate::core::source::ImageSource;
use crate::error::Result;
use tracing::debug;

/// Default grid edge length when the builder is not told otherwise
pub const DEFAULT_EDGE: usize = 8;

/// Builder for [`HashPipeline`]
pub struct HashPipelineBuilder {
    edge: usize,
    mode: ColorMode,
    decoder: Option<Box<dyn ImageDecoder>>,
}

impl HashPipelineBuilder {
    /// Create a new pipeline builder with defaults
    pub fn new() -> Self {
        Self {
            edge: DEFAULT_EDGE,
            mode: ColorMode::default(),
            decoder: None,
        }
    }

    /// Set the grid edge length images are resized to
    pub fn edge(mut self, edge: usize) -> Self {
        self.edge = edge;
        self
    }

    /// Set the color mode images are converted to
    pub fn mode(mut self, mode: ColorMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the decode collaborator
    pub fn decoder(mut self, decoder: Box<dyn ImageDecoder>) -> Self {
        self.decoder = Some(decoder);
        self
    }

    /// Build the pipeline
    pub fn build(self) -> HashPipeline {
        HashPipeline {
            edge: self.edge,
            mode: self.mode,
            decoder: self
                .decoder
                .unwrap_or_else(|| Box::new(RawIntensityDecoder::new())),
        }
    }
}

impl Default for HashPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The hashing pipeline: one fetch, one decode, one encode
pub struct HashPipeline {
    edge: usize,
    mode: ColorMode,
    decoder: Box<dyn ImageDecoder>,
}

impl HashPipeline {
    /// Create a new pipeline builder
    pub fn builder() -> HashPipelineBuilder {
        HashPipelineBuilder::new()
    }

    /// Grid edge length this pipeline hashes at
    pub fn edge(&self) -> usize {
        self.edge
    }

    /// Color mode this pipeline hashes in
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Fetch bytes from a source, then decode and encode them
    pub fn hash_source(&self, source: &dyn ImageSource) -> Result<ImageHash> {
        debug!(source = %source.describe(), "fetching image bytes");
        let bytes = source.fetch()?;
        self.hash_bytes(&bytes)
    }

    /// Decode already-fetched bytes and encode the hash
    pub fn hash_bytes(&self, bytes: &[u8]) -> Result<ImageHash> {
        let grid = self.decoder.decode(bytes, self.edge, self.mode)?;
        debug!(
            edge = grid.edge(),
            mode = %grid.mode(),
            "encoding fingerprint"
        );
        Ok(encode_hash(&grid))
    }
}
