//! # Hasher Module
//!
//! Encodes a decoded pixel grid into an average-hash fingerprint.
//!
//! ## How It Works
//! 1. Average each intensity channel over every pixel in the grid
//! 2. For each pixel channel: emit bit 1 if it is at or above the channel
//!    mean, else 0
//! 3. Pack the bits MSB-first into bytes behind a 2-byte mode header
//!
//! Both passes walk the grid in the same row-major order; that order and
//! the inclusive-high threshold tie-break define hash reproducibility.

mod packer;
mod quantizer;

pub use packer::BitPacker;
pub use quantizer::channel_means;

use crate::core::grid::PixelGrid;
use crate::core::hash::ImageHash;

/// Encode a pixel grid into its average-hash fingerprint.
///
/// The grid carries the edge length and color mode fixed at decode time.
/// Encoding is total and deterministic: the same grid content always
/// yields a byte-identical hash, with payload length
/// `ceil(edge * edge * channels / 8)`.
pub fn encode_hash(grid: &PixelGrid) -> ImageHash {
    let means = channel_means(grid);

    let mut packer = BitPacker::with_bit_capacity(grid.pixel_count() * grid.mode().channels());
    for sample in grid.samples() {
        for (index, &value) in sample.channels().iter().enumerate() {
            // Inclusive on the high side: a channel exactly at its mean
            // encodes as 1
            packer.push(value as f64 >= means[index]);
        }
    }

    ImageHash::new(grid.mode(), packer.into_bytes())
}
