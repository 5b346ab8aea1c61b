//! Pixel samples and the decoded intensity grid.
//!
//! A [`PixelGrid`] is what an image decoder hands the hasher: an N x N,
//! row-major grid of per-pixel intensity samples with the color mode fixed
//! at decode time. Traversal order (rows outer, columns inner, channels
//! innermost) is part of the wire format: the averaging pass and the
//! bit-packing pass must visit samples in the identical order.

use crate::core::mode::ColorMode;
use crate::error::DecodeError;

/// Minimum grid edge length accepted from a decoder
pub const MIN_EDGE: usize = 4;

/// Intensity values for a single pixel.
///
/// The variant fixes the channel count: one channel for the monochrome and
/// grayscale modes, three for color. Every sample in a grid carries the
/// same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelSample {
    /// Single-channel intensity (monochrome or grayscale)
    Single(u8),
    /// Three-channel intensity (red, green, blue)
    Rgb([u8; 3]),
}

impl PixelSample {
    /// Number of intensity channels in this sample
    pub fn channel_count(&self) -> usize {
        match self {
            PixelSample::Single(_) => 1,
            PixelSample::Rgb(_) => 3,
        }
    }

    /// Channel intensities in order
    pub fn channels(&self) -> &[u8] {
        match self {
            PixelSample::Single(value) => std::slice::from_ref(value),
            PixelSample::Rgb(rgb) => rgb,
        }
    }
}

/// A decoded, square, row-major grid of pixel samples
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    edge: usize,
    mode: ColorMode,
    samples: Vec<PixelSample>,
}

impl PixelGrid {
    /// Build a grid from row-major samples.
    ///
    /// Enforces the decode-layer contract: `edge >= 4`, exactly
    /// `edge * edge` samples, and every sample carrying the channel count
    /// of `mode`. Violations are decode failures; the hasher never
    /// re-validates.
    pub fn from_samples(
        edge: usize,
        mode: ColorMode,
        samples: Vec<PixelSample>,
    ) -> Result<Self, DecodeError> {
        if edge < MIN_EDGE {
            return Err(DecodeError::EdgeTooSmall { edge });
        }

        let expected = edge * edge;
        if samples.len() != expected {
            return Err(DecodeError::SampleCountMismatch {
                edge,
                expected,
                actual: samples.len(),
            });
        }

        let channels = mode.channels();
        if let Some(bad) = samples.iter().find(|s| s.channel_count() != channels) {
            return Err(DecodeError::ChannelMismatch {
                expected: channels,
                actual: bad.channel_count(),
            });
        }

        Ok(Self { edge, mode, samples })
    }

    /// Build a single-channel grid from a flat row-major intensity buffer.
    ///
    /// `mode` must be one of the single-channel modes and `bytes` must hold
    /// exactly `edge * edge` intensities.
    pub fn from_luma(edge: usize, mode: ColorMode, bytes: &[u8]) -> Result<Self, DecodeError> {
        if edge < MIN_EDGE {
            return Err(DecodeError::EdgeTooSmall { edge });
        }

        let expected = edge * edge;
        if bytes.len() != expected {
            return Err(DecodeError::SizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }

        let samples = bytes.iter().map(|&value| PixelSample::Single(value)).collect();
        Self::from_samples(edge, mode, samples)
    }

    /// Build a color grid from a flat row-major buffer of interleaved
    /// red, green, blue intensities (`edge * edge * 3` bytes).
    pub fn from_rgb(edge: usize, bytes: &[u8]) -> Result<Self, DecodeError> {
        if edge < MIN_EDGE {
            return Err(DecodeError::EdgeTooSmall { edge });
        }

        let expected = edge * edge * 3;
        if bytes.len() != expected {
            return Err(DecodeError::SizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }

        let samples = bytes
            .chunks_exact(3)
            .map(|rgb| PixelSample::Rgb([rgb[0], rgb[1], rgb[2]]))
            .collect();
        Self::from_samples(edge, ColorMode::Color, samples)
    }

    /// Grid edge length N
    pub fn edge(&self) -> usize {
        self.edge
    }

    /// Color mode fixed at decode time
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Total number of pixels (N squared)
    pub fn pixel_count(&self) -> usize {
        self.samples.len()
    }

    /// Sample at column `x`, row `y`
    pub fn pixel(&self, x: usize, y: usize) -> PixelSample {
        self.samples[y * self.edge + x]
    }

    /// Samples in encode traversal order: rows outer, columns inner.
    ///
    /// Both encoder passes iterate this exact sequence; reordering it would
    /// change every stored hash.
    pub fn samples(&self) -> impl Iterator<Item = PixelSample> + '_ {
        self.samples.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_channel_counts() {
        assert_eq!(PixelSample::Single(40).channel_count(), 1);
        assert_eq!(PixelSample::Rgb([1, 2, 3]).channel_count(), 3);
    }

    #[test]
    fn sample_channels_in_order() {
        assert_eq!(PixelSample::Single(40).channels(), &[40]);
        assert_eq!(PixelSample::Rgb([1, 2, 3]).channels(), &[1, 2, 3]);
    }

    #[test]
    fn from_luma_builds_a_valid_grid() {
        let bytes: Vec<u8> = (0..16).collect();
        let grid = PixelGrid::from_luma(4, ColorMode::Grayscale, &bytes).unwrap();

        assert_eq!(grid.edge(), 4);
        assert_eq!(grid.mode(), ColorMode::Grayscale);
        assert_eq!(grid.pixel_count(), 16);
    }

    #[test]
    fn samples_iterate_row_major() {
        let bytes: Vec<u8> = (0..16).collect();
        let grid = PixelGrid::from_luma(4, ColorMode::Grayscale, &bytes).unwrap();

        let seen: Vec<u8> = grid
            .samples()
            .map(|s| s.channels()[0])
            .collect();
        assert_eq!(seen, bytes);

        // (x, y) indexing agrees with the flat order: index = y * edge + x
        assert_eq!(grid.pixel(2, 1), PixelSample::Single(6));
    }

    #[test]
    fn from_rgb_chunks_interleaved_channels() {
        let bytes: Vec<u8> = (0..48).collect();
        let grid = PixelGrid::from_rgb(4, &bytes).unwrap();

        assert_eq!(grid.mode(), ColorMode::Color);
        assert_eq!(grid.pixel(0, 0), PixelSample::Rgb([0, 1, 2]));
        assert_eq!(grid.pixel(1, 0), PixelSample::Rgb([3, 4, 5]));
        assert_eq!(grid.pixel(0, 1), PixelSample::Rgb([12, 13, 14]));
    }

    #[test]
    fn rejects_edges_below_minimum() {
        let result = PixelGrid::from_luma(3, ColorMode::Grayscale, &[0u8; 9]);
        assert!(matches!(result, Err(DecodeError::EdgeTooSmall { edge: 3 })));
    }

    #[test]
    fn rejects_wrong_buffer_length() {
        let result = PixelGrid::from_luma(4, ColorMode::Grayscale, &[0u8; 15]);
        assert!(matches!(
            result,
            Err(DecodeError::SizeMismatch {
                expected: 16,
                actual: 15
            })
        ));
    }

    #[test]
    fn rejects_wrong_sample_count() {
        let samples = vec![PixelSample::Single(0); 15];
        let result = PixelGrid::from_samples(4, ColorMode::Grayscale, samples);
        assert!(matches!(
            result,
            Err(DecodeError::SampleCountMismatch {
                expected: 16,
                actual: 15,
                ..
            })
        ));
    }

    #[test]
    fn rejects_channel_count_not_matching_mode() {
        // A luma buffer can never satisfy the three-channel color mode
        let result = PixelGrid::from_luma(4, ColorMode::Color, &[0u8; 16]);
        assert!(matches!(
            result,
            Err(DecodeError::ChannelMismatch {
                expected: 3,
                actual: 1
            })
        ));

        // Mixed variants inside one grid are rejected too
        let mut samples = vec![PixelSample::Single(0); 16];
        samples[7] = PixelSample::Rgb([1, 2, 3]);
        let result = PixelGrid::from_samples(4, ColorMode::Grayscale, samples);
        assert!(matches!(result, Err(DecodeError::ChannelMismatch { .. })));
    }
}
