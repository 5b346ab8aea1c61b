//! # Core Module
//!
//! The fingerprint engine and its collaborator boundaries.
//!
//! ## Modules
//! - `mode` - Color modes and their wire discriminators
//! - `grid` - Decoded pixel samples and the square intensity grid
//! - `hasher` - Averages intensities and packs threshold bits
//! - `hash` - The encoded wire artifact
//! - `distance` - Coarse and detailed similarity metrics
//! - `comparator` - Finds matching pairs among stored hashes
//! - `source` - Byte-source collaborators (file, base64)
//! - `decoder` - The decode collaborator boundary
//! - `pipeline` - Orchestrates source -> decode -> encode

pub mod comparator;
pub mod decoder;
pub mod distance;
pub mod grid;
pub mod hash;
pub mod hasher;
pub mod mode;
pub mod pipeline;
pub mod source;

// Re-export commonly used types
pub use comparator::{find_matching_pairs, MatchResult, MatchStrategy, MatchType, ScoreThreshold};
pub use decoder::{ImageDecoder, RawIntensityDecoder};
pub use distance::{coarse_distance, detailed_distance, DistanceMetric, SimilarityScore};
pub use grid::{PixelGrid, PixelSample};
pub use hash::ImageHash;
pub use hasher::encode_hash;
pub use mode::ColorMode;
pub use pipeline::HashPipeline;
pub use source::{file_to_base64, Base64Source, FileSource, ImageSource};
